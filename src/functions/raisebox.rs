//! `\raisebox{dy}{text}`

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, size_argument, take_args,
};
use crate::parser::parse_node::{ParseNode, ParseNodeRaisebox};
use crate::types::{ArgType, Mode, ParseError};

pub fn define_raisebox(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Raisebox,
        names: &["\\raisebox"],
        props: FunctionPropSpec {
            num_args: 2,
            arg_types: Some(vec![ArgType::Size, ArgType::Mode(Mode::Text)]),
            allowed_in_text: true,
            ..Default::default()
        },
    });
}

pub(super) fn raisebox(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [amount, body] = take_args(args, &context.func_name)?;
    Ok(ParseNode::Raisebox(ParseNodeRaisebox {
        mode: context.parser.mode,
        loc: context.loc(),
        dy: size_argument(amount, &context.func_name)?,
        body: Box::new(body),
    }))
}
