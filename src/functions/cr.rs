//! Row and line breaks

use crate::KatexContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, size_argument};
use crate::parser::parse_node::{ParseNode, ParseNodeCr};
use crate::types::{ArgType, ParseError};

/// Registers `\\`, `\cr` and `\newline`, each with an optional extra gap.
pub fn define_cr(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Cr,
        names: &["\\\\", "\\cr", "\\newline"],
        props: FunctionPropSpec {
            num_optional_args: 1,
            arg_types: Some(vec![ArgType::Size]),
            allowed_in_text: true,
            ..Default::default()
        },
    });
}

pub(super) fn cr(
    context: &FunctionContext<'_, '_>,
    opt_args: Vec<Option<ParseNode>>,
) -> Result<ParseNode, ParseError> {
    let size = opt_args
        .into_iter()
        .next()
        .flatten()
        .map(|size| size_argument(size, &context.func_name))
        .transpose()?;
    Ok(ParseNode::Cr(ParseNodeCr {
        mode: context.parser.mode,
        loc: context.loc(),
        size,
    }))
}
