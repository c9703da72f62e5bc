//! Square roots and nth roots

use crate::KatexContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, take_args};
use crate::parser::parse_node::{ParseNode, ParseNodeSqrt};
use crate::types::ParseError;

/// Registers `\sqrt`, which takes the root index as an optional argument.
pub fn define_sqrt(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Sqrt,
        names: &["\\sqrt"],
        props: FunctionPropSpec {
            num_args: 1,
            num_optional_args: 1,
            ..Default::default()
        },
    });
}

pub(super) fn sqrt(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
    opt_args: Vec<Option<ParseNode>>,
) -> Result<ParseNode, ParseError> {
    let [body] = take_args(args, &context.func_name)?;
    let index = opt_args.into_iter().next().flatten();
    Ok(ParseNode::Sqrt(Box::new(ParseNodeSqrt {
        mode: context.parser.mode,
        loc: context.loc(),
        body,
        index,
    })))
}
