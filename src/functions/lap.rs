//! `\mathllap`, `\mathrlap` and `\mathclap`

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, take_args,
};
use crate::parser::parse_node::{LapAlignment, ParseNode, ParseNodeLap};
use crate::types::ParseError;

pub fn define_lap(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Lap,
        names: &["\\mathllap", "\\mathrlap", "\\mathclap"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            ..Default::default()
        },
    });
}

pub(super) fn lap(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [body] = take_args(args, &context.func_name)?;
    let alignment = match context.func_name.as_str() {
        "\\mathllap" => LapAlignment::Llap,
        "\\mathrlap" => LapAlignment::Rlap,
        _ => LapAlignment::Clap,
    };
    Ok(ParseNode::Lap(ParseNodeLap {
        mode: context.parser.mode,
        loc: context.loc(),
        alignment,
        body: Box::new(body),
    }))
}
