//! `\textcolor` and the `\color` switch

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, color_argument,
    ord_argument, take_args,
};
use crate::macros::{MacroContextInterface as _, MacroDefinition};
use crate::parser::parse_node::{ParseNode, ParseNodeColor};
use crate::types::{ArgType, ParseError};

/// Registers the color commands.
pub fn define_color(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::TextColor,
        names: &["\\textcolor"],
        props: FunctionPropSpec {
            num_args: 2,
            allowed_in_text: true,
            greediness: 3,
            arg_types: Some(vec![ArgType::Color, ArgType::Original]),
            ..Default::default()
        },
    });

    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Color,
        names: &["\\color"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            greediness: 3,
            arg_types: Some(vec![ArgType::Color]),
            ..Default::default()
        },
    });
}

pub(super) fn text_color(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [color, body] = take_args(args, &context.func_name)?;
    Ok(ParseNode::Color(ParseNodeColor {
        mode: context.parser.mode,
        loc: context.loc(),
        color: color_argument(&color, &context.func_name)?,
        body: ord_argument(body),
    }))
}

/// Colors everything up to the end of the enclosing group.
pub(super) fn color(
    context: FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [color] = take_args(args, &context.func_name)?;
    let color = color_argument(&color, &context.func_name)?;

    // color.sty keeps the current color in \current@color.
    context.parser.gullet.macros_mut().set(
        "\\current@color",
        Some(MacroDefinition::String(color.clone())),
        false,
    );

    let loc = context.loc();
    let body = context
        .parser
        .parse_expression(true, context.break_on_token_text)?;

    Ok(ParseNode::Color(ParseNodeColor {
        mode: context.parser.mode,
        loc,
        color,
        body,
    }))
}
