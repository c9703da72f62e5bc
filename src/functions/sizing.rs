//! Font size switches

use crate::KatexContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec};
use crate::parser::parse_node::{ParseNode, ParseNodeSizing};
use crate::types::ParseError;

/// The size commands, smallest first. A command's size is its index plus one.
pub const SIZE_FUNCS: [&str; 11] = [
    "\\tiny",
    "\\sixptsize",
    "\\scriptsize",
    "\\footnotesize",
    "\\small",
    "\\normalsize",
    "\\large",
    "\\Large",
    "\\LARGE",
    "\\huge",
    "\\Huge",
];

/// Registers `\tiny` through `\Huge`.
pub fn define_sizing(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Sizing,
        names: &SIZE_FUNCS,
        props: FunctionPropSpec {
            allowed_in_text: true,
            ..Default::default()
        },
    });
}

/// Resizes everything up to the end of the enclosing group.
pub(super) fn sizing(context: FunctionContext<'_, '_>) -> Result<ParseNode, ParseError> {
    let loc = context.loc();
    let size = SIZE_FUNCS
        .iter()
        .position(|name| *name == context.func_name)
        .map_or(6, |index| index + 1);

    context.parser.consume_spaces()?;
    let body = context
        .parser
        .parse_expression(false, context.break_on_token_text)?;

    Ok(ParseNode::Sizing(ParseNodeSizing {
        mode: context.parser.mode,
        loc,
        size,
        body,
    }))
}
