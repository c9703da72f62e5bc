//! Boxes and strike-throughs

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, color_argument, take_args,
};
use crate::parser::parse_node::{ParseNode, ParseNodeEnclose};
use crate::types::{ArgType, Mode, ParseError};

/// Registers `\colorbox`, `\fcolorbox`, `\fbox` and the cancel family.
pub fn define_enclose(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::ColorBox,
        names: &["\\colorbox"],
        props: FunctionPropSpec {
            num_args: 2,
            allowed_in_text: true,
            greediness: 3,
            arg_types: Some(vec![ArgType::Color, ArgType::Mode(Mode::Text)]),
            ..Default::default()
        },
    });

    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::FColorBox,
        names: &["\\fcolorbox"],
        props: FunctionPropSpec {
            num_args: 3,
            allowed_in_text: true,
            greediness: 3,
            arg_types: Some(vec![
                ArgType::Color,
                ArgType::Color,
                ArgType::Mode(Mode::Text),
            ]),
            ..Default::default()
        },
    });

    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Enclose,
        names: &["\\cancel", "\\bcancel", "\\xcancel", "\\sout", "\\fbox"],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
    });
}

fn enclose_node(
    context: &FunctionContext<'_, '_>,
    background_color: Option<String>,
    border_color: Option<String>,
    body: ParseNode,
) -> ParseNode {
    ParseNode::Enclose(ParseNodeEnclose {
        mode: context.parser.mode,
        loc: context.loc(),
        label: context.func_name.clone(),
        background_color,
        border_color,
        body: Box::new(body),
    })
}

pub(super) fn enclose(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [body] = take_args(args, &context.func_name)?;
    Ok(enclose_node(context, None, None, body))
}

pub(super) fn color_box(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [color, body] = take_args(args, &context.func_name)?;
    let color = color_argument(&color, &context.func_name)?;
    Ok(enclose_node(context, Some(color), None, body))
}

pub(super) fn fcolor_box(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [border, background, body] = take_args(args, &context.func_name)?;
    let border = color_argument(&border, &context.func_name)?;
    let background = color_argument(&background, &context.func_name)?;
    Ok(enclose_node(context, Some(background), Some(border), body))
}
