//! The lexer turns the source string into tokens on demand.
//!
//! It keeps nothing but a cursor, so it can restart from any byte offset.
//! Each call to [`Lexer::lex`] tries the matchers below in priority order at
//! the cursor and returns the first hit.

use alloc::sync::Arc;

use crate::types::{
    ParseError, ParseErrorKind, Settings, SourceLocation, StrictWarning, Token, TokenText,
};

const fn is_combining_mark(ch: char) -> bool {
    matches!(ch as u32, 0x0300..=0x036F)
}

const fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\r' | '\n' | '\t')
}

fn match_space(s: &str) -> Option<usize> {
    let len: usize = s
        .chars()
        .take_while(|&c| is_space(c))
        .map(char::len_utf8)
        .sum();
    (len > 0).then_some(len)
}

/// A printable character, plus any combining marks that follow it.
fn match_normal_char(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    let first = chars.next()?;
    let allowed = matches!(
        first as u32,
        0x0021..=0x005B | 0x005D..=0x2027 | 0x202A..=0xD7FF | 0xF900..=0xFFFF | 0x1_0000..=0x10_FFFF
    );
    if !allowed {
        return None;
    }
    let marks: usize = chars
        .take_while(|&c| is_combining_mark(c))
        .map(char::len_utf8)
        .sum();
    Some(first.len_utf8() + marks)
}

/// `\` followed by letters; returns the word length and the length of the
/// whitespace run after it.
fn match_control_word(s: &str) -> Option<(usize, usize)> {
    let rest = s.strip_prefix('\\')?;
    let word = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic() || *b == b'@')
        .count();
    if word == 0 {
        return None;
    }
    let skip = match_space(&rest[word..]).unwrap_or(0);
    Some((1 + word, skip))
}

fn match_control_symbol(s: &str) -> Option<usize> {
    let c = s.strip_prefix('\\')?.chars().next()?;
    Some(1 + c.len_utf8())
}

#[derive(Debug, PartialEq, Eq)]
enum Branch {
    Space,
    Comment,
    Normal,
    ControlWord { skip: usize },
    ControlSymbol,
}

fn exec(slice: &str) -> Option<(Branch, usize)> {
    if let Some(len) = match_space(slice) {
        Some((Branch::Space, len))
    } else if slice.starts_with('%') {
        Some((Branch::Comment, 1))
    } else if let Some(len) = match_normal_char(slice) {
        Some((Branch::Normal, len))
    } else if let Some((len, skip)) = match_control_word(slice) {
        Some((Branch::ControlWord { skip }, len + skip))
    } else {
        match_control_symbol(slice).map(|len| (Branch::ControlSymbol, len))
    }
}

/// Tokenizer over one source string.
pub struct Lexer<'a> {
    input: Arc<str>,
    last_index: usize,
    settings: &'a Settings,
    warnings: Vec<StrictWarning>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: Arc<str>, settings: &'a Settings) -> Self {
        Self {
            input,
            last_index: 0,
            settings,
            warnings: Vec::new(),
        }
    }

    /// The source being tokenized.
    #[must_use]
    pub fn input(&self) -> &Arc<str> {
        &self.input
    }

    /// Lexes the next token.
    ///
    /// At end of input this returns an `EOF` token spanning `len..len`, and
    /// keeps returning it on every further call.
    pub fn lex(&mut self) -> Result<Token, ParseError> {
        loop {
            let pos = self.last_index;
            let Some(slice) = self.input.get(pos..).filter(|s| !s.is_empty()) else {
                return Ok(Token {
                    text: TokenText::Static("EOF"),
                    loc: Some(self.loc(self.input.len(), self.input.len())),
                    noexpand: false,
                    treat_as_relax: false,
                });
            };

            let Some((branch, len)) = exec(slice) else {
                let character: String = slice.chars().next().into_iter().collect();
                let end = pos + character.len().max(1);
                let token = Token::new(character.clone(), Some(self.loc(pos, end)));
                return Err(ParseError::with_token(
                    ParseErrorKind::UnexpectedCharacter { character },
                    &token,
                ));
            };
            self.last_index = pos + len;

            let text = match branch {
                Branch::Comment => {
                    self.skip_comment()?;
                    continue;
                }
                Branch::Space => TokenText::Static(" "),
                Branch::ControlWord { skip } => {
                    TokenText::slice(Arc::clone(&self.input), pos, self.last_index - skip)
                }
                Branch::Normal | Branch::ControlSymbol => {
                    TokenText::slice(Arc::clone(&self.input), pos, self.last_index)
                }
            };
            return Ok(Token::new(text, Some(self.loc(pos, self.last_index))));
        }
    }

    fn skip_comment(&mut self) -> Result<(), ParseError> {
        let start = self.last_index - 1;
        match self.input[self.last_index..].find('\n') {
            Some(rel) => self.last_index += rel + 1,
            None => {
                self.last_index = self.input.len();
                let loc = self.loc(start, self.last_index);
                if let Some(warning) = self.settings.report_nonstrict(
                    "commentAtEnd",
                    "% comment has no terminating newline; LaTeX would fail because of commenting the end of math mode (e.g. $)",
                    Some(&loc),
                )? {
                    self.warnings.push(warning);
                }
            }
        }
        Ok(())
    }

    fn loc(&self, start: usize, end: usize) -> SourceLocation {
        SourceLocation::new(Arc::clone(&self.input), start, end)
    }

    /// Byte offset the next call to [`Lexer::lex`] reads from.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.last_index
    }

    /// Moves the cursor.
    pub const fn set_position(&mut self, last_index: usize) {
        self.last_index = last_index;
    }

    /// Drains the strict-mode warnings raised so far.
    pub fn take_warnings(&mut self) -> Vec<StrictWarning> {
        core::mem::take(&mut self.warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StrictMode, StrictSetting};

    fn lex_all(input: &str, settings: &Settings) -> Result<Vec<String>, ParseError> {
        let mut lexer = Lexer::new(Arc::from(input), settings);
        let mut out = Vec::new();
        loop {
            let token = lexer.lex()?;
            if token.is_eof() {
                return Ok(out);
            }
            out.push(token.text().to_owned());
        }
    }

    #[test]
    fn test_token_kinds() {
        let settings = Settings::default();
        let tokens = lex_all(r"\frac  {a}\,\\ x^2 é", &settings).unwrap();
        assert_eq!(
            tokens,
            [r"\frac", "{", "a", "}", r"\,", r"\\", " ", "x", "^", "2", " ", "é"]
        );
    }

    #[test]
    fn test_whitespace_run_is_one_token() {
        let settings = Settings::default();
        let tokens = lex_all("a \t\n b", &settings).unwrap();
        assert_eq!(tokens, ["a", " ", "b"]);
    }

    #[test]
    fn test_control_word_spans_trailing_space() {
        let settings = Settings::default();
        let mut lexer = Lexer::new(Arc::from(r"\alpha  b"), &settings);
        let token = lexer.lex().unwrap();
        assert_eq!(token.text(), r"\alpha");
        let loc = token.loc.unwrap();
        assert_eq!((loc.start, loc.end), (0, 8));
        assert_eq!(lexer.lex().unwrap().text(), "b");
    }

    #[test]
    fn test_eof_is_idempotent() {
        let settings = Settings::default();
        let mut lexer = Lexer::new(Arc::from("x"), &settings);
        assert_eq!(lexer.lex().unwrap().text(), "x");
        for _ in 0..3 {
            let eof = lexer.lex().unwrap();
            assert!(eof.is_eof());
            let loc = eof.loc.unwrap();
            assert_eq!((loc.start, loc.end), (1, 1));
        }
    }

    #[test]
    fn test_unexpected_character_has_offset() {
        let settings = Settings::default();
        let err = lex_all("ab\u{0007}", &settings).unwrap_err();
        assert!(matches!(
            err.kind.as_ref(),
            ParseErrorKind::UnexpectedCharacter { character } if character == "\u{0007}"
        ));
        assert_eq!(err.position, Some(2));
    }

    #[test]
    fn test_lone_backslash_at_end() {
        let settings = Settings::default();
        let err = lex_all(r"x\", &settings).unwrap_err();
        assert_eq!(err.position, Some(1));
    }

    #[test]
    fn test_astral_character_is_one_token() {
        let settings = Settings::default();
        assert_eq!(lex_all("\u{1D400}", &settings).unwrap(), ["\u{1D400}"]);
    }

    #[test]
    fn test_comment_skipped() {
        let settings = Settings::default();
        let tokens = lex_all("a% ignored\nb", &settings).unwrap();
        assert_eq!(tokens, ["a", "b"]);
    }

    #[test]
    fn test_comment_at_end_warns() {
        let settings = Settings::default();
        let mut lexer = Lexer::new(Arc::from("a%tail"), &settings);
        assert_eq!(lexer.lex().unwrap().text(), "a");
        assert!(lexer.lex().unwrap().is_eof());
        let warnings = lexer.take_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "commentAtEnd");
        assert_eq!(warnings[0].position, Some(1));

        let strict = Settings::builder()
            .strict(StrictSetting::Mode(StrictMode::Error))
            .build();
        assert!(lex_all("a%tail", &strict).is_err());
    }
}
