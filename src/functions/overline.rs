//! `\overline`

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, take_args,
};
use crate::parser::parse_node::{ParseNode, ParseNodeOverline};
use crate::types::ParseError;

pub fn define_overline(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Overline,
        names: &["\\overline"],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
    });
}

pub(super) fn overline(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [body] = take_args(args, &context.func_name)?;
    Ok(ParseNode::Overline(ParseNodeOverline {
        mode: context.parser.mode,
        loc: context.loc(),
        body: Box::new(body),
    }))
}
