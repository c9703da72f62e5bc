//! `\text` and its font variants

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, ord_argument, take_args,
};
use crate::parser::parse_node::{ParseNode, ParseNodeText};
use crate::types::{ArgType, Mode, ParseError};

/// Registers `\text`, `\textrm`, `\textbf` and the other text commands. The
/// argument is read in text mode.
pub fn define_text(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Text,
        names: &[
            // Font families
            "\\text",
            "\\textrm",
            "\\textsf",
            "\\texttt",
            "\\textnormal",
            // Font weights
            "\\textbf",
            // Font shapes
            "\\textit",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Mode(Mode::Text)]),
            greediness: 2,
            allowed_in_text: true,
            ..Default::default()
        },
    });
}

pub(super) fn text(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [body] = take_args(args, &context.func_name)?;
    // Plain \text keeps whatever font surrounds it.
    let font = (context.func_name != "\\text").then(|| context.func_name.clone());
    Ok(ParseNode::Text(ParseNodeText {
        mode: context.parser.mode,
        loc: context.loc(),
        body: ord_argument(body),
        font,
    }))
}
