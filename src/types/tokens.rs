use core::fmt;
use core::ops::Range;

use alloc::borrow::ToOwned as _;
use alloc::sync::Arc;

use crate::types::{ErrorLocationProvider, SourceLocation};

/// Text carried by a [`Token`].
///
/// Lexed tokens borrow a range of the shared source instead of copying it.
/// Tokens synthesized by the parser or by procedural macros own their text.
#[derive(Clone, Debug)]
pub enum TokenText {
    /// A range of a shared source string.
    Slice {
        /// The source the range indexes into.
        source: Arc<str>,
        /// Byte range of the text.
        range: Range<usize>,
    },
    /// Owned text.
    Owned(Arc<str>),
    /// A string literal, used for sentinels such as `EOF`.
    Static(&'static str),
}

impl TokenText {
    /// Borrows `start..end` of `source`.
    #[must_use]
    pub const fn slice(source: Arc<str>, start: usize, end: usize) -> Self {
        Self::Slice {
            source,
            range: start..end,
        }
    }

    /// The text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Slice { source, range } => source.get(range.clone()).unwrap_or_default(),
            Self::Owned(text) => text,
            Self::Static(text) => text,
        }
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq for TokenText {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TokenText {}

impl From<String> for TokenText {
    fn from(value: String) -> Self {
        Self::Owned(Arc::from(value))
    }
}

impl From<&str> for TokenText {
    fn from(value: &str) -> Self {
        Self::Owned(Arc::from(value))
    }
}

impl From<Arc<str>> for TokenText {
    fn from(value: Arc<str>) -> Self {
        Self::Owned(value)
    }
}

impl From<TokenText> for String {
    fn from(value: TokenText) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for TokenText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for TokenText {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<str> for TokenText {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<String> for TokenText {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other
    }
}

/// A lexical token: its text plus where it came from.
///
/// Tokens are never mutated after the lexer or an expansion produces them,
/// with two exceptions: `\let` and `\noexpand` flag the tokens they protect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Raw text, e.g. `x`, `\frac`, `" "` or `EOF`.
    pub text: TokenText,
    /// Span in the source the token was lexed from. Synthesized tokens have
    /// none.
    pub loc: Option<SourceLocation>,
    /// The gullet must not expand this token, even when it names a macro.
    pub noexpand: bool,
    /// Set by `\noexpand` on an expandable token: the parser reads it as
    /// `\relax`.
    pub treat_as_relax: bool,
}

impl Token {
    /// Creates a token with the given text and optional location.
    #[must_use]
    pub fn new<T>(text: T, loc: Option<SourceLocation>) -> Self
    where
        T: Into<TokenText>,
    {
        Self {
            text: text.into(),
            loc,
            noexpand: false,
            treat_as_relax: false,
        }
    }

    /// Creates a token whose text is `start..end` of `input` and whose location
    /// is the same span.
    #[must_use]
    pub fn from_slice(input: &Arc<str>, start: usize, end: usize) -> Self {
        Self {
            text: TokenText::slice(Arc::clone(input), start, end),
            loc: Some(SourceLocation::new(Arc::clone(input), start, end)),
            noexpand: false,
            treat_as_relax: false,
        }
    }

    /// The token text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Whether this is the end-of-input sentinel.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.text == "EOF"
    }

    /// Builds a token with `text` whose location spans from this token to
    /// `end_token`.
    ///
    /// Returns `None` when the two tokens come from different sources.
    #[must_use]
    pub fn range<T: Into<TokenText>>(&self, end_token: &Self, text: T) -> Option<Self> {
        let loc = SourceLocation::range(self.loc.clone(), end_token.loc.clone())?;
        Some(Self::new(text, Some(loc)))
    }
}

impl ErrorLocationProvider for Token {
    fn loc(&self) -> Option<&SourceLocation> {
        self.loc.as_ref()
    }
}

impl ErrorLocationProvider for Option<Token> {
    fn loc(&self) -> Option<&SourceLocation> {
        self.as_ref()?.loc.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_text_and_equality() {
        let input: Arc<str> = Arc::from(r"\alpha+\beta");
        let alpha = Token::from_slice(&input, 0, 6);

        assert_eq!(alpha.text(), r"\alpha");
        assert_eq!(alpha.text, r"\alpha");
        // Text equality ignores where the text lives.
        assert_eq!(alpha.text, TokenText::from(r"\alpha"));
        assert!(!alpha.is_eof());
    }

    #[test]
    fn test_range_spans_both_tokens() {
        let input: Arc<str> = Arc::from("{red}");
        let first = Token::from_slice(&input, 1, 2);
        let last = Token::from_slice(&input, 3, 4);

        let merged = first.range(&last, "red").unwrap();
        assert_eq!(merged.text(), "red");
        let loc = merged.loc.unwrap();
        assert_eq!((loc.start, loc.end), (1, 4));
    }

    #[test]
    fn test_range_rejects_foreign_tokens() {
        let doc = Token::from_slice(&Arc::from("ab"), 0, 1);
        let body = Token::from_slice(&Arc::from("ab"), 1, 2);
        assert!(doc.range(&body, "ab").is_none());
    }
}
