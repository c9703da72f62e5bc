//! The gullet: expands macros until only non-macro tokens remain
//!
//! Tokens live on a stack in reverse order, so the next token to read is the
//! last element. Expanding a macro pops its name, captures its arguments and
//! pushes the pasted body back, which is then read before anything else.

use alloc::sync::Arc;

use phf::phf_set;

use crate::context::KatexContext;
use crate::lexer::Lexer;
use crate::macros::builtins::BUILTIN_MACROS;
use crate::macros::{
    ExpansionResult, MacroArg, MacroContextInterface, MacroDefinition, MacroExpansion,
    MacroExpansionResult,
};
use crate::namespace::Namespace;
use crate::types::{Mode, ParseError, ParseErrorKind, Settings, StrictWarning, Token};

/// Commands the parser handles itself, without a macro, function or symbol
/// entry.
pub static IMPLICIT_COMMANDS: phf::Set<&'static str> = phf_set! {
    "\\relax",
    "^",
    "_",
    "\\limits",
    "\\nolimits",
};

/// Expands macros on demand for the parser.
pub struct MacroExpander<'a> {
    settings: &'a Settings,
    expansion_count: usize,
    lexer: Lexer<'a>,
    macros: Namespace<MacroDefinition>,
    stack: Vec<Token>,
    mode: Mode,
    ctx: &'a KatexContext,
    warnings: Vec<StrictWarning>,
}

impl<'a> MacroExpander<'a> {
    /// Creates a gullet over `input`. The root macro scope starts with the
    /// user macros from `settings`.
    #[must_use]
    pub fn new(input: &str, settings: &'a Settings, mode: Mode, ctx: &'a KatexContext) -> Self {
        Self {
            lexer: Lexer::new(Arc::from(input), settings),
            settings,
            expansion_count: 0,
            macros: Namespace::new(&BUILTIN_MACROS, settings.macros.clone()),
            stack: Vec::new(),
            mode,
            ctx,
            warnings: Vec::new(),
        }
    }

    /// The source being read.
    #[must_use]
    pub fn input(&self) -> &Arc<str> {
        self.lexer.input()
    }

    /// Switches between text and math mode.
    pub const fn switch_mode(&mut self, new_mode: Mode) {
        self.mode = new_mode;
    }

    /// Closes every open macro scope.
    pub fn end_groups(&mut self) {
        self.macros.end_groups();
    }

    /// Strict-mode warnings raised while lexing the input and macro bodies.
    pub fn take_warnings(&mut self) -> Vec<StrictWarning> {
        let mut warnings = self.lexer.take_warnings();
        warnings.append(&mut self.warnings);
        warnings
    }

    fn count_expansion(&mut self, amount: usize, token: &Token) -> Result<(), ParseError> {
        self.expansion_count += amount;
        if self.expansion_count > self.settings.max_expand {
            return Err(ParseError::with_token(
                ParseErrorKind::TooManyExpansions,
                token,
            ));
        }
        Ok(())
    }

    /// Resolves the definition of `name` to a tokenized body. Procedural
    /// macros run here and may consume tokens.
    fn get_expansion(&mut self, name: &str) -> Result<Option<MacroExpansion>, ParseError> {
        let Some(definition) = self.macros.get(name).cloned() else {
            return Ok(None);
        };
        let result = match definition {
            MacroDefinition::String(body) => MacroExpansionResult::String(body),
            MacroDefinition::StaticStr(body) => MacroExpansionResult::String(body.to_owned()),
            MacroDefinition::Expansion(expansion) => MacroExpansionResult::Expansion(expansion),
            MacroDefinition::Function(f) => f(self)?,
            MacroDefinition::StaticFunction(f) => f(self)?,
        };
        Ok(Some(match result {
            MacroExpansionResult::String(body) => self.string_to_expansion(&body)?,
            MacroExpansionResult::Expansion(expansion) => expansion,
            MacroExpansionResult::Empty => MacroExpansion::default(),
        }))
    }

    /// Lexes a string body. The argument count is the length of the run
    /// `#1`, `#2`, ... present once `##` escapes are removed.
    fn string_to_expansion(&mut self, body: &str) -> Result<MacroExpansion, ParseError> {
        let mut num_args = 0;
        if body.contains('#') {
            let stripped = body.replace("##", "");
            while num_args < 9 && stripped.contains(&format!("#{}", num_args + 1)) {
                num_args += 1;
            }
        }

        let mut body_lexer = Lexer::new(Arc::from(body), self.settings);
        let mut tokens = Vec::new();
        loop {
            let token = body_lexer.lex()?;
            if token.is_eof() {
                break;
            }
            tokens.push(token);
        }
        self.warnings.append(&mut body_lexer.take_warnings());
        tokens.reverse();
        Ok(MacroExpansion {
            tokens,
            num_args,
            unexpandable: false,
        })
    }

    /// Replaces `#n` with argument n and `##` with `#`, walking the body in
    /// stack order.
    fn paste_arguments(
        tokens: &mut Vec<Token>,
        args: &[Vec<Token>],
    ) -> Result<(), ParseError> {
        let mut i = tokens.len();
        while i > 0 {
            i -= 1;
            if tokens[i].text != "#" {
                continue;
            }
            if i == 0 {
                return Err(ParseError::with_token(
                    ParseErrorKind::IncompletePlaceholder,
                    &tokens[i],
                ));
            }
            let next = &tokens[i - 1];
            if next.text == "#" {
                tokens.remove(i);
                i -= 1;
                continue;
            }
            let index = match next.text() {
                digit @ ("1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9") => {
                    digit.parse::<usize>().ok()
                }
                _ => None,
            };
            let Some(arg) = index.and_then(|n| args.get(n - 1)) else {
                return Err(ParseError::with_token(
                    ParseErrorKind::InvalidPlaceholderIndex,
                    next,
                ));
            };
            tokens.splice(i - 1..=i, arg.iter().rev().cloned());
            i -= 1;
        }
        Ok(())
    }

    /// Fully expands `tokens` (stack order) and returns the result in reading
    /// order. `\noexpand`ed tokens come out as themselves.
    fn expand_tokens(&mut self, tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
        let mut output = Vec::new();
        let floor = self.stack.len();
        self.push_tokens(tokens);
        while self.stack.len() > floor {
            if let ExpansionResult::Unexpanded(_) = self.expand_once(true)? {
                if let Some(mut token) = self.stack.pop() {
                    if token.treat_as_relax {
                        token.noexpand = false;
                        token.treat_as_relax = false;
                    }
                    output.push(token);
                }
            }
        }
        Ok(output)
    }
}

impl MacroContextInterface for MacroExpander<'_> {
    fn mode(&self) -> Mode {
        self.mode
    }

    fn context(&self) -> &KatexContext {
        self.ctx
    }

    fn macros(&self) -> &Namespace<MacroDefinition> {
        &self.macros
    }

    fn macros_mut(&mut self) -> &mut Namespace<MacroDefinition> {
        &mut self.macros
    }

    fn future(&mut self) -> Result<&Token, ParseError> {
        if self.stack.is_empty() {
            let token = self.lexer.lex()?;
            self.stack.push(token);
        }
        self.stack
            .last()
            .ok_or_else(|| ParseError::new(ParseErrorKind::UnexpectedEndOfInput {
                context: "token stack".to_owned(),
            }))
    }

    fn pop_token(&mut self) -> Result<Token, ParseError> {
        match self.stack.pop() {
            Some(token) => Ok(token),
            None => self.lexer.lex(),
        }
    }

    fn push_token(&mut self, token: Token) {
        self.stack.push(token);
    }

    fn push_tokens(&mut self, tokens: Vec<Token>) {
        self.stack.extend(tokens);
    }

    fn consume_spaces(&mut self) -> Result<(), ParseError> {
        while self.future()?.text == " " {
            self.stack.pop();
        }
        Ok(())
    }

    fn expand_once(&mut self, expandable_only: bool) -> Result<ExpansionResult, ParseError> {
        let top = self.pop_token()?;
        let expansion = if top.noexpand {
            None
        } else {
            self.get_expansion(top.text())?
        };
        let Some(expansion) = expansion.filter(|e| !(expandable_only && e.unexpandable)) else {
            self.push_token(top.clone());
            return Ok(ExpansionResult::Unexpanded(top));
        };

        self.count_expansion(1, &top)?;
        let mut tokens = expansion.tokens;
        if expansion.num_args > 0 {
            let args = self.consume_args(expansion.num_args)?;
            Self::paste_arguments(&mut tokens, &args)?;
        }
        let count = tokens.len();
        self.push_tokens(tokens);
        Ok(ExpansionResult::Expanded(count))
    }

    fn expand_next_token(&mut self) -> Result<Token, ParseError> {
        loop {
            if let ExpansionResult::Unexpanded(_) = self.expand_once(false)? {
                let token = self.pop_token()?;
                // A \noexpand'ed macro means \relax, and \relax means nothing.
                if token.treat_as_relax || token.text == "\\relax" {
                    continue;
                }
                return Ok(token);
            }
        }
    }

    fn expand_macro(&mut self, name: &str) -> Result<Option<Vec<Token>>, ParseError> {
        if !self.macros.has(name) {
            return Ok(None);
        }
        self.expand_tokens(vec![Token::new(name, None)]).map(Some)
    }

    fn expand_macro_as_text(&mut self, name: &str) -> Result<Option<String>, ParseError> {
        Ok(self
            .expand_macro(name)?
            .map(|tokens| tokens.iter().map(Token::text).collect()))
    }

    fn consume_arg(&mut self) -> Result<MacroArg, ParseError> {
        self.consume_spaces()?;
        let start = self.pop_token()?;
        if start.is_eof() {
            return Err(ParseError::with_token(
                ParseErrorKind::UnexpectedEndOfMacroArgument,
                &start,
            ));
        }
        if start.text != "{" {
            return Ok(MacroArg {
                tokens: vec![start.clone()],
                end: start.clone(),
                start,
            });
        }

        let mut tokens = Vec::new();
        let mut depth = 1usize;
        loop {
            let token = self.pop_token()?;
            match token.text() {
                "{" => depth += 1,
                "}" => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(MacroArg {
                            tokens,
                            start,
                            end: token,
                        });
                    }
                }
                "EOF" => {
                    return Err(ParseError::with_token(
                        ParseErrorKind::UnterminatedArgument,
                        &start,
                    ));
                }
                _ => {}
            }
            tokens.push(token);
        }
    }

    fn consume_args(&mut self, num_args: usize) -> Result<Vec<Vec<Token>>, ParseError> {
        (0..num_args)
            .map(|_| self.consume_arg().map(|arg| arg.tokens))
            .collect()
    }

    fn is_defined(&self, name: &str) -> bool {
        self.macros.has(name)
            || self.ctx.functions.contains_key(name)
            || self.ctx.symbols.contains(Mode::Math, name)
            || self.ctx.symbols.contains(Mode::Text, name)
            || IMPLICIT_COMMANDS.contains(name)
    }

    fn is_expandable(&self, name: &str) -> bool {
        match self.macros.get(name) {
            Some(MacroDefinition::Expansion(e)) => !e.unexpandable,
            Some(_) => true,
            None => self
                .ctx
                .functions
                .get(name)
                .is_some_and(|spec| !spec.primitive),
        }
    }

    fn begin_group(&mut self) {
        self.macros.begin_group();
    }

    fn end_group(&mut self) -> Result<(), ParseError> {
        self.macros.end_group()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::Mapping;

    fn expand_all(input: &str, settings: &Settings) -> Result<Vec<String>, ParseError> {
        let ctx = KatexContext::default();
        let mut gullet = MacroExpander::new(input, settings, Mode::Math, &ctx);
        let mut out = Vec::new();
        loop {
            let token = gullet.expand_next_token()?;
            if token.is_eof() {
                return Ok(out);
            }
            out.push(token.text().to_owned());
        }
    }

    fn with_macros(defs: &[(&str, &str)]) -> Settings {
        let mut macros = Mapping::default();
        for (name, body) in defs {
            macros.insert((*name).to_owned(), MacroDefinition::from(*body));
        }
        Settings::builder().macros(macros).build()
    }

    #[test]
    fn test_string_macro_with_arguments() {
        let settings = with_macros(&[("\\pair", "(#1,#2)")]);
        let tokens = expand_all("\\pair a{bc}", &settings).unwrap();
        assert_eq!(tokens, ["(", "a", ",", "b", "c", ")"]);
    }

    #[test]
    fn test_nested_braces_are_kept_inside_argument() {
        let settings = with_macros(&[("\\id", "#1")]);
        let tokens = expand_all("\\id{a{b}c}", &settings).unwrap();
        assert_eq!(tokens, ["a", "{", "b", "}", "c"]);
    }

    #[test]
    fn test_double_hash_becomes_hash() {
        let settings = with_macros(&[("\\h", "#1##")]);
        let tokens = expand_all("\\h x", &settings).unwrap();
        assert_eq!(tokens, ["x", "#"]);
    }

    #[test]
    fn test_invalid_placeholder_index() {
        let settings = with_macros(&[("\\bad", "#1#3")]);
        let err = expand_all("\\bad x", &settings).unwrap_err();
        assert!(matches!(
            err.kind.as_ref(),
            ParseErrorKind::InvalidPlaceholderIndex
        ));
    }

    #[test]
    fn test_incomplete_placeholder() {
        let settings = with_macros(&[("\\bad", "#1#")]);
        let err = expand_all("\\bad x", &settings).unwrap_err();
        assert!(matches!(
            err.kind.as_ref(),
            ParseErrorKind::IncompletePlaceholder
        ));
    }

    #[test]
    fn test_hash_in_argless_macro_is_plain() {
        let settings = with_macros(&[("\\x", "#")]);
        assert_eq!(expand_all("\\x", &settings).unwrap(), ["#"]);
    }

    #[test]
    fn test_unterminated_argument() {
        let settings = with_macros(&[("\\id", "#1")]);
        let err = expand_all("\\id{ab", &settings).unwrap_err();
        assert!(matches!(
            err.kind.as_ref(),
            ParseErrorKind::UnterminatedArgument
        ));
        assert_eq!(err.position, Some(3));
    }

    #[test]
    fn test_missing_argument() {
        let settings = with_macros(&[("\\id", "#1")]);
        let err = expand_all("\\id", &settings).unwrap_err();
        assert!(matches!(
            err.kind.as_ref(),
            ParseErrorKind::UnexpectedEndOfMacroArgument
        ));
    }

    #[test]
    fn test_expansion_limit() {
        let settings = with_macros(&[("\\loop", "\\loop")]);
        let err = expand_all("\\loop", &settings).unwrap_err();
        assert!(matches!(err.kind.as_ref(), ParseErrorKind::TooManyExpansions));

        let tight = Settings::builder()
            .macros(with_macros(&[("\\twice", "\\a\\a"), ("\\a", "x")]).macros)
            .max_expand(2)
            .build();
        assert!(expand_all("\\twice", &tight).is_err());
        assert_eq!(
            expand_all("\\a\\a", &tight).unwrap(),
            ["x", "x"]
        );
    }

    #[test]
    fn test_relax_is_transparent() {
        let settings = Settings::default();
        let tokens = expand_all("a\\relax b", &settings).unwrap();
        assert_eq!(tokens, ["a", "b"]);
    }

    #[test]
    fn test_primitives() {
        let settings = Settings::default();
        assert_eq!(
            expand_all("\\@firstoftwo{a}{b}\\@secondoftwo{c}{d}", &settings).unwrap(),
            ["a", "d"]
        );
        assert_eq!(
            expand_all("\\@ifnextchar x{yes}{no}x", &settings).unwrap(),
            ["y", "e", "s", "x"]
        );
        assert_eq!(
            expand_all("\\TextOrMath{t}{m}", &settings).unwrap(),
            ["m"]
        );
    }

    #[test]
    fn test_noexpand_and_expandafter() {
        let settings = with_macros(&[("\\a", "x"), ("\\b", "[#1]")]);
        // \noexpand\a reads as \relax, which is skipped.
        assert_eq!(expand_all("\\noexpand\\a y", &settings).unwrap(), ["y"]);
        // A token that would not expand anyway passes through untouched.
        assert_eq!(expand_all("\\noexpand x y", &settings).unwrap(), ["x", "y"]);
        assert_eq!(expand_all("\\noexpand\\frac", &settings).unwrap(), ["\\frac"]);
        // \expandafter\b\a expands \a before \b takes it as its argument.
        assert_eq!(
            expand_all("\\expandafter\\b\\a", &settings).unwrap(),
            ["[", "x", "]"]
        );
    }

    #[test]
    fn test_protected_token_is_kept() {
        let settings = Settings::default();
        let ctx = KatexContext::default();
        let mut gullet = MacroExpander::new("", &settings, Mode::Math, &ctx);
        let mut token = Token::new("x", None);
        token.noexpand = true;
        gullet.push_token(token);
        let next = gullet.expand_next_token().unwrap();
        assert_eq!(next.text(), "x");
        assert!(next.noexpand);
    }

    #[test]
    fn test_expand_macro_as_text() {
        let settings = with_macros(&[("\\name", "ab\\c"), ("\\c", "c")]);
        let ctx = KatexContext::default();
        let mut gullet = MacroExpander::new("", &settings, Mode::Math, &ctx);
        assert_eq!(
            gullet.expand_macro_as_text("\\name").unwrap().as_deref(),
            Some("abc")
        );
        assert_eq!(gullet.expand_macro("\\undefined").unwrap(), None);
    }

    #[test]
    fn test_is_defined() {
        let settings = Settings::default();
        let ctx = KatexContext::default();
        let gullet = MacroExpander::new("", &settings, Mode::Math, &ctx);
        for name in ["\\relax", "^", "_", "\\limits", "\\nolimits"] {
            assert!(gullet.is_defined(name), "{name}");
        }
        assert!(gullet.is_defined("\\frac"));
        assert!(gullet.is_defined("\\alpha"));
        assert!(gullet.is_defined("\\bgroup"));
        assert!(!gullet.is_defined("\\nonexistent"));
        assert!(gullet.is_expandable("\\bgroup"));
        assert!(!gullet.is_expandable("\\alpha"));
    }
}
