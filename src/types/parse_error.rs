//! Parse error handling
//!
//! A [`ParseError`] carries a categorised [`ParseErrorKind`] and, when the
//! failing token or node knows where it came from, the offending span. The
//! rendered message then ends with a context window around that span.

use alloc::boxed::Box;
use core::fmt;
#[cfg(feature = "backtrace")]
use std::backtrace::Backtrace;

use thiserror::Error;

use crate::parser::parse_node::{AnyParseNode, ParseNodeError};
use crate::types::SourceLocation;

/// Characters of context shown on each side of an error span.
const CONTEXT_CHARS: usize = 15;

/// The error returned by every fallible operation of the parser.
///
/// This is the only error type the crate produces. `position` and `length`
/// are byte offsets into the string the offending token was lexed from.
#[derive(Debug, Error)]
#[error("KaTeX parse error: {kind}{context}")]
pub struct ParseError {
    /// Categorised reason for the failure.
    #[source]
    pub kind: Box<ParseErrorKind>,
    /// Start offset of the offending span.
    pub position: Option<usize>,
    /// Length in bytes of the offending span.
    pub length: Option<usize>,
    context: ParseErrorContext,
    /// Where the error was raised.
    #[cfg(feature = "backtrace")]
    pub backtrace: Box<Backtrace>,
}

impl ParseError {
    /// Create an error with no location.
    pub fn new<T: Into<ParseErrorKind>>(kind: T) -> Self {
        Self::from_kind(kind.into(), ParseErrorContext::None, None, None)
    }

    /// Create an error located at a token or node.
    pub fn with_token<T: Into<ParseErrorKind>>(kind: T, token: &dyn ErrorLocationProvider) -> Self {
        match token.loc().filter(|loc| loc.start() <= loc.end()) {
            Some(loc) => Self::from_kind(
                kind.into(),
                ParseErrorContext::Location(loc.clone()),
                Some(loc.start()),
                Some(loc.end() - loc.start()),
            ),
            None => Self::new(kind),
        }
    }

    /// The span the error points at, if any.
    #[must_use]
    pub const fn location(&self) -> Option<&SourceLocation> {
        match &self.context {
            ParseErrorContext::None => None,
            ParseErrorContext::Location(loc) => Some(loc),
        }
    }

    fn from_kind(
        kind: ParseErrorKind,
        context: ParseErrorContext,
        position: Option<usize>,
        length: Option<usize>,
    ) -> Self {
        Self {
            kind: Box::new(kind),
            position,
            length,
            context,
            #[cfg(feature = "backtrace")]
            backtrace: Box::new(Backtrace::force_capture()),
        }
    }
}

impl From<strum::ParseError> for ParseError {
    fn from(err: strum::ParseError) -> Self {
        Self::new(ParseErrorKind::EnumParse(err))
    }
}

impl From<ParseNodeError> for ParseError {
    fn from(err: ParseNodeError) -> Self {
        Self::new(ParseErrorKind::from(err))
    }
}

/// Describes the specific reason for a [`ParseError`].
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    // Lexer
    #[error("Unexpected character: '{character}'")]
    UnexpectedCharacter { character: String },

    // Gullet
    #[error("Too many expansions: infinite loop or need to increase maxExpand setting")]
    TooManyExpansions,
    #[error("End of input in macro argument")]
    UnterminatedArgument,
    #[error("End of input expecting macro argument")]
    UnexpectedEndOfMacroArgument,
    #[error("Incomplete placeholder at end of macro body")]
    IncompletePlaceholder,
    #[error("Not a valid argument number")]
    InvalidPlaceholderIndex,
    #[error("Expected a control sequence")]
    ExpectedControlSequence,
    #[error("Invalid token after macro prefix: '{token}'")]
    InvalidGlobalPrefix { token: String },
    #[error("Invalid argument number \"{value}\"")]
    InvalidMacroArgumentNumber { value: String },
    #[error("\\newcommand{{{name}}} attempting to redefine {name}; use \\renewcommand")]
    MacroAlreadyDefined { name: String },
    #[error("\\renewcommand{{{name}}} when command {name} does not yet exist; use \\newcommand")]
    MacroNotDefined { name: String },
    #[error("Invalid number of arguments: {value}")]
    InvalidArgumentCount { value: String },
    #[error(
        "Unbalanced namespace destruction: attempt to pop global namespace; please report this as a bug"
    )]
    UnbalancedNamespaceDestruction,

    // Parser structure
    #[error("Expected '{expected}', got '{found}'")]
    ExpectedToken { expected: String, found: String },
    #[error("only one infix operator per group")]
    MultipleInfixOperators,
    #[error("Double superscript")]
    DoubleSuperscript,
    #[error("Double subscript")]
    DoubleSubscript,
    #[error("Limit controls must follow a math operator")]
    LimitControlsMustFollowMathOperator,
    #[error("Expected group after '{symbol}'")]
    ExpectedGroupAfterSymbol { symbol: String },
    #[error("Expected group after '{func}'")]
    ExpectedGroupAfterFunction { func: String },
    #[error("Got function '{func}' with no arguments as {context}")]
    FunctionRequiresArguments { func: String, context: String },
    #[error("Got function '{func}' as argument to '{parent}'")]
    FunctionAsArgument { func: String, parent: String },
    #[error("Can't use function '{func}' in text mode")]
    FunctionNotAllowedInTextMode { func: String },
    #[error("Can't use function '{func}' in math mode")]
    FunctionNotAllowedInMathMode { func: String },
    #[error("Undefined control sequence: {name}")]
    UndefinedControlSequence { name: String },
    #[error("Expected '\\right', got '{found}'")]
    MissingRight { found: String },
    #[error("\\right without matching \\left")]
    UnmatchedRight,
    #[error("\\middle without preceding \\left")]
    MiddleWithoutLeft,
    #[error("Expected '}}', got '{found}'")]
    UnmatchedBrace { found: String },
    #[error("Expected ']', got '{found}'")]
    UnmatchedBracket { found: String },
    #[error("$ within math mode")]
    DollarInMathMode,
    #[error("Unexpected end of input in {context}")]
    UnexpectedEndOfInput { context: String },

    // Environments
    #[error("No such environment: {name}")]
    UnknownEnvironment { name: String },
    #[error(r"Mismatch: \begin{{{begin}}} matched by \end{{{end}}}")]
    MismatchedEnvironment { begin: String, end: String },
    #[error(r"\end{{{name}}} without matching \begin")]
    UnmatchedEnd { name: String },
    #[error("Unknown column alignment: {alignment}")]
    InvalidColumnAlignment { alignment: String },
    #[error(r"Expected & or \\ or \cr or \end, got '{found}'")]
    ExpectedArrayDelimiter { found: String },

    // Special groups
    #[error("Invalid color: '{color}'")]
    InvalidColor { color: String },
    #[error("Invalid size: '{size}'")]
    InvalidSize { size: String },
    #[error("Invalid unit: '{unit}'")]
    InvalidUnit { unit: String },
    #[error("Invalid delimiter '{delimiter}' after '{function}'")]
    InvalidDelimiter { delimiter: String, function: String },
    #[error("Invalid {context}: '{value}'")]
    InvalidValue { context: String, value: String },
    #[error("Expected {node} node as argument to '{func}'")]
    UnexpectedArgumentNode { node: String, func: String },

    // Policy
    #[error("LaTeX-incompatible input and strict mode is set to 'error': {message} [{code}]")]
    StrictMode { message: String, code: String },

    // Test helpers
    #[error("Expected parsing to fail for '{expression}'")]
    ExpectedParseFailure { expression: String },

    #[error("Enum parse error: {0}")]
    EnumParse(strum::ParseError),
    #[error(transparent)]
    ParseNode(#[from] ParseNodeError),
}

#[derive(Debug)]
enum ParseErrorContext {
    None,
    Location(SourceLocation),
}

impl fmt::Display for ParseErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self::Location(SourceLocation { input, start, end }) = self else {
            return Ok(());
        };
        let (start, end) = (*start, (*end).min(input.len()));

        if start >= input.len() {
            write!(f, " at end of input: ")?;
        } else {
            write!(f, " at position {}: ", start + 1)?;
        }

        let prefix_start = char_boundary(input, start.saturating_sub(CONTEXT_CHARS), false);
        if prefix_start > 0 {
            write!(f, "\u{2026}")?;
        }
        write!(f, "{}", input.get(prefix_start..start).unwrap_or_default())?;

        for c in input.get(start..end).unwrap_or_default().chars() {
            write!(f, "{c}\u{0332}")?;
        }

        let suffix_end = char_boundary(input, (end + CONTEXT_CHARS).min(input.len()), true);
        write!(f, "{}", input.get(end..suffix_end).unwrap_or_default())?;
        if suffix_end < input.len() {
            write!(f, "\u{2026}")?;
        }
        Ok(())
    }
}

const fn char_boundary(input: &str, mut index: usize, forward: bool) -> usize {
    if forward {
        while index < input.len() && !input.is_char_boundary(index) {
            index += 1;
        }
    } else {
        while index > 0 && !input.is_char_boundary(index) {
            index -= 1;
        }
    }
    index
}

/// Anything that can point at a span of the source for error reporting.
pub trait ErrorLocationProvider {
    /// The span to report, if known.
    fn loc(&self) -> Option<&SourceLocation>;
}

impl ErrorLocationProvider for AnyParseNode {
    fn loc(&self) -> Option<&SourceLocation> {
        self.location()
    }
}

impl ErrorLocationProvider for Option<AnyParseNode> {
    fn loc(&self) -> Option<&SourceLocation> {
        self.as_ref()?.location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Token;
    use alloc::sync::Arc;

    #[test]
    fn test_parse_error_creation() {
        let error = ParseError::new(ParseErrorKind::TooManyExpansions);
        assert!(matches!(
            error.kind.as_ref(),
            ParseErrorKind::TooManyExpansions
        ));
        assert_eq!(
            error.to_string(),
            "KaTeX parse error: Too many expansions: infinite loop or need to increase maxExpand setting"
        );
        assert_eq!(error.position, None);
        assert_eq!(error.length, None);
        assert!(error.location().is_none());
    }

    #[test]
    fn test_parse_error_with_token_context() {
        let input: Arc<str> = Arc::from("This is a test expression with invalid syntax");
        let token = Token::from_slice(&input, 10, 14);

        let error = ParseError::with_token(ParseErrorKind::DoubleSubscript, &token);
        assert_eq!(error.position, Some(10));
        assert_eq!(error.length, Some(4));
        assert_eq!(
            error.to_string(),
            "KaTeX parse error: Double subscript at position 11: \
             This is a t\u{332}e\u{332}s\u{332}t\u{332} expression wit\u{2026}"
        );
    }

    #[test]
    fn test_context_window_truncates_prefix() {
        let input: Arc<str> = Arc::from("0123456789abcdefghij^");
        let token = Token::from_slice(&input, 20, 21);

        let error = ParseError::with_token(ParseErrorKind::DoubleSuperscript, &token);
        assert_eq!(
            error.to_string(),
            "KaTeX parse error: Double superscript at position 21: \u{2026}56789abcdefghij^\u{332}"
        );
    }

    #[test]
    fn test_context_at_end_of_input() {
        let input: Arc<str> = Arc::from("x^");
        let eof = Token::from_slice(&input, 2, 2);

        let error = ParseError::with_token(
            ParseErrorKind::ExpectedGroupAfterSymbol {
                symbol: "^".to_owned(),
            },
            &eof,
        );
        assert_eq!(
            error.to_string(),
            "KaTeX parse error: Expected group after '^' at end of input: x^"
        );
    }
}
