//! Extensible arrows with labels

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, take_args,
};
use crate::parser::parse_node::{ParseNode, ParseNodeXArrow};
use crate::types::ParseError;

/// Registers `\xrightarrow` and friends. The optional argument is the label
/// below the arrow, the required one the label above.
pub fn define_arrow(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::XArrow,
        names: &[
            "\\xleftarrow",
            "\\xrightarrow",
            "\\xLeftarrow",
            "\\xRightarrow",
            "\\xleftrightarrow",
            "\\xLeftrightarrow",
            "\\xhookleftarrow",
            "\\xhookrightarrow",
            "\\xmapsto",
            "\\xrightharpoondown",
            "\\xrightharpoonup",
            "\\xleftharpoondown",
            "\\xleftharpoonup",
            "\\xrightleftharpoons",
            "\\xleftrightharpoons",
            "\\xlongequal",
            "\\xtwoheadrightarrow",
            "\\xtwoheadleftarrow",
            "\\xtofrom",
            // mhchem
            "\\xrightleftarrows",
            "\\xrightequilibrium",
            "\\xleftequilibrium",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            num_optional_args: 1,
            ..Default::default()
        },
    });
}

pub(super) fn x_arrow(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
    opt_args: Vec<Option<ParseNode>>,
) -> Result<ParseNode, ParseError> {
    let [body] = take_args(args, &context.func_name)?;
    let below = opt_args.into_iter().next().flatten().map(Box::new);
    Ok(ParseNode::XArrow(ParseNodeXArrow {
        mode: context.parser.mode,
        loc: context.loc(),
        label: context.func_name.clone(),
        body: Box::new(body),
        below,
    }))
}
