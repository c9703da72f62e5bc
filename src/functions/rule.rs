//! `\rule[shift]{width}{height}`

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, size_argument, take_args,
};
use crate::parser::parse_node::{ParseNode, ParseNodeRule};
use crate::types::{ArgType, ParseError};

pub fn define_rule(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Rule,
        names: &["\\rule"],
        props: FunctionPropSpec {
            num_args: 2,
            num_optional_args: 1,
            arg_types: Some(vec![ArgType::Size, ArgType::Size, ArgType::Size]),
            ..Default::default()
        },
    });
}

pub(super) fn rule(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
    opt_args: Vec<Option<ParseNode>>,
) -> Result<ParseNode, ParseError> {
    let [width, height] = take_args(args, &context.func_name)?;
    let shift = opt_args
        .into_iter()
        .next()
        .flatten()
        .map(|shift| size_argument(shift, &context.func_name))
        .transpose()?;
    Ok(ParseNode::Rule(ParseNodeRule {
        mode: context.parser.mode,
        loc: context.loc(),
        shift,
        width: size_argument(width, &context.func_name)?,
        height: size_argument(height, &context.func_name)?,
    }))
}
