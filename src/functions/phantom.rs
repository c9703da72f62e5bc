//! Invisible boxes that keep the size of their content

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, ord_argument, take_args,
};
use crate::parser::parse_node::{
    ParseNode, ParseNodeHphantom, ParseNodePhantom, ParseNodeVphantom,
};
use crate::types::ParseError;

/// Registers `\phantom`, `\hphantom` and `\vphantom`.
pub fn define_phantom(ctx: &mut KatexContext) {
    let props = FunctionPropSpec {
        num_args: 1,
        allowed_in_text: true,
        ..Default::default()
    };
    for (kind, name) in [
        (FunctionKind::Phantom, "\\phantom"),
        (FunctionKind::Hphantom, "\\hphantom"),
        (FunctionKind::Vphantom, "\\vphantom"),
    ] {
        ctx.define_function(FunctionDefSpec {
            kind,
            names: &[name],
            props: props.clone(),
        });
    }
}

pub(super) fn phantom(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [body] = take_args(args, &context.func_name)?;
    Ok(ParseNode::Phantom(ParseNodePhantom {
        mode: context.parser.mode,
        loc: context.loc(),
        body: ord_argument(body),
    }))
}

/// Keeps only the width.
pub(super) fn hphantom(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [body] = take_args(args, &context.func_name)?;
    Ok(ParseNode::Hphantom(ParseNodeHphantom {
        mode: context.parser.mode,
        loc: context.loc(),
        body: Box::new(body),
    }))
}

/// Keeps only the height and depth.
pub(super) fn vphantom(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [body] = take_args(args, &context.func_name)?;
    Ok(ParseNode::Vphantom(ParseNodeVphantom {
        mode: context.parser.mode,
        loc: context.loc(),
        body: Box::new(body),
    }))
}
