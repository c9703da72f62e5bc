//! Entry points: parse an expression, with or without the strict warnings

use crate::KatexContext;
use crate::parser::Parser;
use crate::parser::parse_node::{AnyParseNode, ParseNodeErrorLeaf};
use crate::types::{Mode, ParseError, Settings, SourceLocation, StrictWarning};

/// A successful parse together with the strict-mode warnings it raised.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    /// The parse tree.
    pub nodes: Vec<AnyParseNode>,
    /// LaTeX-incompatible constructs accepted under `StrictMode::Warn`, in
    /// the order they were met.
    pub warnings: Vec<StrictWarning>,
}

/// Degrades a failed parse into a single `error` leaf holding the whole
/// expression, unless errors are to be thrown.
fn error_node(
    error: ParseError,
    expression: &str,
    settings: &Settings,
) -> Result<AnyParseNode, ParseError> {
    if settings.throw_on_error {
        return Err(error);
    }
    let loc = error
        .location()
        .cloned()
        .unwrap_or_else(|| SourceLocation::from_str(expression, 0, expression.len()));
    Ok(AnyParseNode::Error(ParseNodeErrorLeaf {
        mode: Mode::Math,
        loc: Some(loc),
        text: expression.to_owned(),
        message: error.to_string(),
        color: settings.error_color.clone(),
    }))
}

/// Parses an expression and also returns the strict-mode warnings.
///
/// With `throw_on_error` off, a failure still returns `Ok`: the tree is one
/// `error` node and the warnings are those raised before the failure.
pub fn parse_with_warnings(
    ctx: &KatexContext,
    expression: &str,
    settings: &Settings,
) -> Result<ParseOutput, ParseError> {
    let mut parser = Parser::new(expression, settings, ctx);
    let nodes = match parser.parse() {
        Ok(nodes) => nodes,
        Err(e) => vec![error_node(e, expression, settings)?],
    };
    Ok(ParseOutput {
        nodes,
        warnings: parser.take_warnings(),
    })
}

/// Parses an expression into its parse tree.
///
/// # Parameters
/// * `ctx` - The registries of functions, environments and symbols
/// * `expression` - The TeX math source
/// * `settings` - Options for this parse
///
/// # Returns
/// The top-level nodes of the expression, or the first error. With
/// `throw_on_error` off, errors come back as a single `error` node instead.
pub fn parse(
    ctx: &KatexContext,
    expression: &str,
    settings: &Settings,
) -> Result<Vec<AnyParseNode>, ParseError> {
    parse_with_warnings(ctx, expression, settings).map(|output| output.nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_degrades_to_one_node() {
        let ctx = KatexContext::default();
        let settings = Settings::builder().throw_on_error(false).build();

        let nodes = parse(&ctx, r"x^1^2", &settings).unwrap();
        assert_eq!(nodes.len(), 1);
        let AnyParseNode::Error(leaf) = &nodes[0] else {
            panic!("expected error leaf, got {:?}", nodes[0]);
        };
        assert_eq!(leaf.text, "x^1^2");
        assert!(leaf.message.starts_with("KaTeX parse error: Double superscript"));
        assert_eq!(leaf.loc.as_ref().map(SourceLocation::start), Some(3));
    }

    #[test]
    fn test_error_is_returned_when_throwing() {
        let ctx = KatexContext::default();
        let err = parse(&ctx, r"\frac{a}{", &Settings::default()).unwrap_err();
        assert!(err.to_string().contains("Expected '}'"));
    }

    #[test]
    fn test_display_mode_leaves_tree_alone() {
        let ctx = KatexContext::default();
        let display = Settings::builder().display_mode(true).build();
        let inline = parse(&ctx, r"\sum_{i=1}^n x_i", &Settings::default()).unwrap();
        assert_eq!(parse(&ctx, r"\sum_{i=1}^n x_i", &display).unwrap(), inline);
    }

    #[test]
    fn test_warnings_side_channel() {
        let ctx = KatexContext::default();
        let output = parse_with_warnings(&ctx, "\u{436}", &Settings::default()).unwrap();
        assert_eq!(output.nodes.len(), 1);
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.warnings[0].position, Some(0));
    }
}
