//! `\underline`, which also works in text mode

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, take_args,
};
use crate::parser::parse_node::{ParseNode, ParseNodeUnderline};
use crate::types::ParseError;

pub fn define_underline(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Underline,
        names: &["\\underline"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            ..Default::default()
        },
    });
}

pub(super) fn underline(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [body] = take_args(args, &context.func_name)?;
    Ok(ParseNode::Underline(ParseNodeUnderline {
        mode: context.parser.mode,
        loc: context.loc(),
        body: Box::new(body),
    }))
}
