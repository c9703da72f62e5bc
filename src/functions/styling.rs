//! Math style switches

use crate::KatexContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec};
use crate::parser::parse_node::{ParseNode, ParseNodeStyling};
use crate::types::{ParseError, StyleVariant};

/// Registers `\displaystyle`, `\textstyle`, `\scriptstyle` and
/// `\scriptscriptstyle`.
pub fn define_styling(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Styling,
        names: &[
            "\\displaystyle",
            "\\textstyle",
            "\\scriptstyle",
            "\\scriptscriptstyle",
        ],
        props: FunctionPropSpec {
            allowed_in_text: true,
            ..Default::default()
        },
    });
}

/// `\scriptstyle` -> `script`
fn style_of(func_name: &str) -> Result<StyleVariant, ParseError> {
    let name = func_name.trim_start_matches('\\');
    let style = name.strip_suffix("style").unwrap_or(name);
    Ok(style.parse()?)
}

/// Restyles everything up to the end of the enclosing group.
pub(super) fn styling(context: FunctionContext<'_, '_>) -> Result<ParseNode, ParseError> {
    let loc = context.loc();
    let style = style_of(&context.func_name)?;

    context.parser.consume_spaces()?;
    let body = context
        .parser
        .parse_expression(true, context.break_on_token_text)?;

    Ok(ParseNode::Styling(ParseNodeStyling {
        mode: context.parser.mode,
        loc,
        style,
        body,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_of() {
        assert_eq!(style_of("\\displaystyle").unwrap(), StyleVariant::Display);
        assert_eq!(style_of("\\textstyle").unwrap(), StyleVariant::Text);
        assert_eq!(
            style_of("\\scriptscriptstyle").unwrap(),
            StyleVariant::ScriptScript
        );
        assert!(style_of("\\boldstyle").is_err());
    }
}
