//! Function handlers
//!
//! Each submodule registers one family of commands with a `define_*`
//! function and provides the handlers [`dispatch`] routes to. A handler gets
//! the [`FunctionContext`] plus the parsed arguments and returns the node for
//! the whole application. Commands with an implicit body (`\color`, `\left`,
//! `\begin`, the size and style switches) read that body themselves through
//! the parser in the context.
//!
//! ```
//! use katex_parser::{KatexContext, Settings, parse};
//! use katex_parser::parser::parse_node::ParseNode;
//!
//! let ctx = KatexContext::default();
//! let tree = parse(&ctx, r"\sqrt[3]{x}", &Settings::default()).unwrap();
//! assert!(matches!(tree[0], ParseNode::Sqrt(_)));
//! ```

mod accent;
mod arrow;
mod color;
mod cr;
mod def;
mod delimsizing;
mod enclose;
mod environment;
mod font;
mod genfrac;
mod kern;
mod lap;
mod mclass;
mod op;
mod overline;
mod phantom;
mod raisebox;
mod rule;
mod sizing;
mod sqrt;
mod styling;
mod text;
mod underline;

use crate::define_function::{FunctionContext, FunctionKind};
use crate::parser::parse_node::ParseNode;
use crate::types::ParseError;

pub use accent::define_accent;
pub use arrow::define_arrow;
pub use color::define_color;
pub use cr::define_cr;
pub use def::define_def;
pub use delimsizing::{DELIMITERS, define_delimsizing};
pub use enclose::define_enclose;
pub use environment::define_environment;
pub use font::define_font;
pub use genfrac::define_genfrac;
pub use kern::define_kern;
pub use lap::define_lap;
pub use mclass::{binrel_class, define_mclass};
pub use op::define_op;
pub use overline::define_overline;
pub use phantom::define_phantom;
pub use raisebox::define_raisebox;
pub use rule::define_rule;
pub use sizing::{SIZE_FUNCS, define_sizing};
pub use sqrt::define_sqrt;
pub use styling::define_styling;
pub use text::define_text;
pub use underline::define_underline;

/// Runs the handler for `kind`.
///
/// `opt_args` holds one entry per optional argument, `None` where the
/// bracketed group was absent.
pub fn dispatch(
    kind: FunctionKind,
    context: FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
    opt_args: Vec<Option<ParseNode>>,
) -> Result<ParseNode, ParseError> {
    match kind {
        FunctionKind::Genfrac => genfrac::genfrac(&context, args),
        FunctionKind::Infix => Ok(genfrac::infix(&context)),
        FunctionKind::Sqrt => sqrt::sqrt(&context, args, opt_args),
        FunctionKind::TextColor => color::text_color(&context, args),
        FunctionKind::Color => color::color(context, args),
        FunctionKind::Text => text::text(&context, args),
        FunctionKind::Font => font::font(&context, args),
        FunctionKind::BoldSymbol => font::bold_symbol(&context, args),
        FunctionKind::OldFont => font::old_font(context),
        FunctionKind::Sizing => sizing::sizing(context),
        FunctionKind::Styling => styling::styling(context),
        FunctionKind::Delimsizing => delimsizing::delimsizing(&context, args),
        FunctionKind::LeftRight => delimsizing::left_right(context, args),
        FunctionKind::Middle => delimsizing::middle(&context, args),
        FunctionKind::Op { limits, symbol } => Ok(op::op(&context, limits, symbol)),
        FunctionKind::MathOp => op::math_op(&context, args),
        FunctionKind::Mclass => mclass::mclass(&context, args),
        FunctionKind::Stackrel => mclass::stackrel(&context, args),
        FunctionKind::Accent => accent::accent(&context, args),
        FunctionKind::TextAccent => accent::text_accent(&context, args),
        FunctionKind::Overline => overline::overline(&context, args),
        FunctionKind::Underline => underline::underline(&context, args),
        FunctionKind::Phantom => phantom::phantom(&context, args),
        FunctionKind::Hphantom => phantom::hphantom(&context, args),
        FunctionKind::Vphantom => phantom::vphantom(&context, args),
        FunctionKind::Rule => rule::rule(&context, args, opt_args),
        FunctionKind::Kern => kern::kern(context, args),
        FunctionKind::Raisebox => raisebox::raisebox(&context, args),
        FunctionKind::Lap => lap::lap(&context, args),
        FunctionKind::Enclose => enclose::enclose(&context, args),
        FunctionKind::ColorBox => enclose::color_box(&context, args),
        FunctionKind::FColorBox => enclose::fcolor_box(&context, args),
        FunctionKind::XArrow => arrow::x_arrow(&context, args, opt_args),
        FunctionKind::Cr => cr::cr(&context, opt_args),
        FunctionKind::Environment => environment::environment(context, args),
        FunctionKind::Def => def::def(context),
        FunctionKind::Global => def::global(context),
        FunctionKind::Let => def::let_(context),
        FunctionKind::NewCommand => def::new_command(context),
    }
}
