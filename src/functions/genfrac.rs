//! Fractions and binomials, plus the infix operators rewritten into them

use crate::KatexContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, take_args};
use crate::parser::parse_node::{ParseNode, ParseNodeGenfrac, ParseNodeInfix};
use crate::types::{ParseError, StyleVariant};

/// Registers `\frac`, `\binom` and their style variants, the internal
/// targets of the infix operators, and the infix operators themselves.
pub fn define_genfrac(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Genfrac,
        names: &[
            "\\dfrac",
            "\\frac",
            "\\tfrac",
            "\\dbinom",
            "\\binom",
            "\\tbinom",
            // Not for public use: targets of \atop, \brace and \brack.
            "\\\\atopfrac",
            "\\\\bracefrac",
            "\\\\brackfrac",
        ],
        props: FunctionPropSpec {
            num_args: 2,
            greediness: 2,
            ..Default::default()
        },
    });

    // Infix generalized fractions: these are rewritten by the parser into
    // the function named in `replace_with`.
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Infix,
        names: &["\\over", "\\choose", "\\atop", "\\brace", "\\brack"],
        props: FunctionPropSpec {
            infix: true,
            ..Default::default()
        },
    });
}

/// Bar line, delimiters and forced style for one fraction command.
fn frac_shape(func_name: &str) -> (bool, Option<(&'static str, &'static str)>, Option<StyleVariant>) {
    let has_bar_line = matches!(func_name, "\\dfrac" | "\\frac" | "\\tfrac");
    let delims = match func_name {
        "\\dbinom" | "\\binom" | "\\tbinom" => Some(("(", ")")),
        "\\\\bracefrac" => Some(("\\{", "\\}")),
        "\\\\brackfrac" => Some(("[", "]")),
        _ => None,
    };
    let size = match func_name {
        "\\dfrac" | "\\dbinom" => Some(StyleVariant::Display),
        "\\tfrac" | "\\tbinom" => Some(StyleVariant::Text),
        _ => None,
    };
    (has_bar_line, delims, size)
}

pub(super) fn genfrac(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [numer, denom] = take_args(args, &context.func_name)?;
    let (has_bar_line, delims, size) = frac_shape(&context.func_name);

    Ok(ParseNode::Genfrac(Box::new(ParseNodeGenfrac {
        mode: context.parser.mode,
        loc: context.loc(),
        numer,
        denom,
        has_bar_line,
        left_delim: delims.map(|(left, _)| left.to_owned()),
        right_delim: delims.map(|(_, right)| right.to_owned()),
        size,
    })))
}

pub(super) fn infix(context: &FunctionContext<'_, '_>) -> ParseNode {
    let replace_with = match context.func_name.as_str() {
        "\\over" => "\\frac",
        "\\choose" => "\\binom",
        "\\atop" => "\\\\atopfrac",
        "\\brace" => "\\\\bracefrac",
        _ => "\\\\brackfrac",
    };
    ParseNode::Infix(ParseNodeInfix {
        mode: context.parser.mode,
        loc: context.loc(),
        replace_with: replace_with.to_owned(),
        token: context.token.cloned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frac_shapes() {
        assert_eq!(frac_shape("\\frac"), (true, None, None));
        assert_eq!(frac_shape("\\dbinom"), (false, Some(("(", ")")), Some(StyleVariant::Display)));
        assert_eq!(frac_shape("\\\\atopfrac"), (false, None, None));
        assert_eq!(frac_shape("\\\\bracefrac").1, Some(("\\{", "\\}")));
        assert_eq!(frac_shape("\\tfrac").2, Some(StyleVariant::Text));
    }
}
