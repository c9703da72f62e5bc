//! Math and text accents

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, take_args,
};
use crate::parser::parse_node::{ParseNode, ParseNodeAccent};
use crate::types::ParseError;

/// Accents drawn with a fixed-width glyph rather than stretched.
const NON_STRETCHY_ACCENTS: [&str; 11] = [
    "\\acute", "\\grave", "\\ddot", "\\tilde", "\\bar", "\\breve", "\\check", "\\hat", "\\vec",
    "\\dot", "\\mathring",
];

/// Registers math accents and the text-mode accent commands.
pub fn define_accent(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Accent,
        names: &[
            "\\acute",
            "\\grave",
            "\\ddot",
            "\\tilde",
            "\\bar",
            "\\breve",
            "\\check",
            "\\hat",
            "\\vec",
            "\\dot",
            "\\mathring",
            "\\widehat",
            "\\widetilde",
            "\\overrightarrow",
            "\\overleftarrow",
            "\\Overrightarrow",
            "\\overleftrightarrow",
            "\\overgroup",
            "\\overlinesegment",
            "\\overleftharpoon",
            "\\overrightharpoon",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
    });

    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::TextAccent,
        names: &[
            "\\'", "\\`", "\\^", "\\~", "\\=", "\\u", "\\.", "\\\"", "\\r", "\\H", "\\v", "\\c",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            allowed_in_math: false,
            ..Default::default()
        },
    });
}

/// Whether a math accent stretches, and whether it follows the skew of an
/// italic base.
fn accent_shape(label: &str) -> (bool, bool) {
    let is_stretchy = !NON_STRETCHY_ACCENTS.contains(&label);
    let is_shifty = !is_stretchy || matches!(label, "\\widehat" | "\\widetilde");
    (is_stretchy, is_shifty)
}

pub(super) fn accent(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [base] = take_args(args, &context.func_name)?;
    let (is_stretchy, is_shifty) = accent_shape(&context.func_name);
    Ok(ParseNode::Accent(Box::new(ParseNodeAccent {
        mode: context.parser.mode,
        loc: context.loc(),
        label: context.func_name.clone(),
        is_stretchy,
        is_shifty,
        base,
    })))
}

pub(super) fn text_accent(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [base] = take_args(args, &context.func_name)?;
    Ok(ParseNode::Accent(Box::new(ParseNodeAccent {
        mode: context.parser.mode,
        loc: context.loc(),
        label: context.func_name.clone(),
        is_stretchy: false,
        is_shifty: true,
        base,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_shapes() {
        assert_eq!(accent_shape("\\hat"), (false, true));
        assert_eq!(accent_shape("\\widehat"), (true, true));
        assert_eq!(accent_shape("\\overrightarrow"), (true, false));
    }
}
