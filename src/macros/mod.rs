//! Macro definitions and the interface procedural macros expand through
//!
//! A macro is either a TeX-style string body with `#1`..`#9` placeholders, a
//! pre-tokenized [`MacroExpansion`], or a procedural definition that drives
//! the gullet itself through [`MacroContextInterface`].

use alloc::sync::Arc;
use core::fmt::{self, Debug};

use crate::{
    KatexContext, ParseError,
    namespace::Namespace,
    types::{Mode, Token},
};

pub mod builtins;

/// One argument captured by the gullet.
///
/// `tokens` are in reading order, without the outer braces. `start` and `end`
/// are the first and last tokens read for the argument (the braces themselves
/// for a braced group), so their span covers the whole argument.
#[derive(Debug, Clone)]
pub struct MacroArg {
    /// Content of the argument.
    pub tokens: Vec<Token>,
    /// First token read.
    pub start: Token,
    /// Last token read.
    pub end: Token,
}

/// A macro body that has already been tokenized.
#[derive(Debug, Clone, Default)]
pub struct MacroExpansion {
    /// Body tokens in stack order: the first token to be read is last.
    pub tokens: Vec<Token>,
    /// Number of arguments consumed before pasting.
    pub num_args: usize,
    /// Set for `\let` aliases of non-expandable commands, so
    /// `expand_once(true)` leaves them alone.
    pub unexpandable: bool,
}

/// Procedural macro backed by a closure, for definitions built at runtime.
pub type MacroFunction = Arc<
    dyn Fn(&mut dyn MacroContextInterface) -> Result<MacroExpansionResult, ParseError>
        + Send
        + Sync,
>;

/// Procedural macro backed by a plain function, usable in static tables.
pub type StaticMacroFunction =
    fn(&mut dyn MacroContextInterface) -> Result<MacroExpansionResult, ParseError>;

/// How a macro expands.
#[derive(Clone)]
pub enum MacroDefinition {
    /// A TeX-style body, lexed every time the macro is expanded.
    String(String),
    /// Same as `String` for bodies known at compile time.
    StaticStr(&'static str),
    /// A body tokenized ahead of time, as produced by `\def` and `\let`.
    Expansion(MacroExpansion),
    /// A procedural definition.
    Function(MacroFunction),
    /// A procedural definition without captured state.
    StaticFunction(StaticMacroFunction),
}

impl MacroDefinition {
    /// The literal body, for string definitions.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::StaticStr(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for MacroDefinition {
    fn from(body: &str) -> Self {
        Self::String(body.to_owned())
    }
}

impl From<String> for MacroDefinition {
    fn from(body: String) -> Self {
        Self::String(body)
    }
}

impl Debug for MacroDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticStr(s) => f.debug_tuple("StaticStr").field(s).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Expansion(e) => f.debug_tuple("Expansion").field(e).finish(),
            Self::Function(_) => f.debug_struct("Function").finish(),
            Self::StaticFunction(_) => f.debug_struct("StaticFunction").finish(),
        }
    }
}

/// What a procedural macro produced.
#[derive(Debug, Clone)]
pub enum MacroExpansionResult {
    /// A body to lex, placeholders included.
    String(String),
    /// Ready-made tokens.
    Expansion(MacroExpansion),
    /// Nothing; the macro disappears from the stream.
    Empty,
}

impl MacroExpansionResult {
    /// Wraps tokens given in reading order.
    #[must_use]
    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        tokens.reverse();
        Self::Expansion(MacroExpansion {
            tokens,
            ..MacroExpansion::default()
        })
    }
}

/// Outcome of one expansion step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionResult {
    /// The top token was a macro; this many tokens replaced it on the stack.
    Expanded(usize),
    /// The top token is not expandable. It is still on the stack.
    Unexpanded(Token),
}

/// Gullet operations available to procedural macros.
pub trait MacroContextInterface {
    /// The mode tokens are currently read in.
    fn mode(&self) -> Mode;

    /// The registry, for lookups such as [`Self::is_defined`].
    fn context(&self) -> &KatexContext;

    /// The macro table in scope.
    fn macros(&self) -> &Namespace<MacroDefinition>;

    /// Mutable access to the macro table, for definitions.
    fn macros_mut(&mut self) -> &mut Namespace<MacroDefinition>;

    /// Peeks at the next unexpanded token, lexing it if needed.
    fn future(&mut self) -> Result<&Token, ParseError>;

    /// Removes and returns the next unexpanded token.
    fn pop_token(&mut self) -> Result<Token, ParseError>;

    /// Puts a token back so it is read next.
    fn push_token(&mut self, token: Token);

    /// Puts tokens back; `tokens` is in stack order (last is read first).
    fn push_tokens(&mut self, tokens: Vec<Token>);

    /// Drops space tokens without expanding anything.
    fn consume_spaces(&mut self) -> Result<(), ParseError>;

    /// Expands the top token once if it is a macro.
    ///
    /// With `expandable_only`, macros marked unexpandable are left in place.
    fn expand_once(&mut self, expandable_only: bool) -> Result<ExpansionResult, ParseError>;

    /// Expands until the top token is not a macro, then pops it. `\relax` is
    /// skipped.
    fn expand_next_token(&mut self) -> Result<Token, ParseError>;

    /// Fully expands macro `name` and returns the tokens in reading order, or
    /// `None` when it is not a macro.
    fn expand_macro(&mut self, name: &str) -> Result<Option<Vec<Token>>, ParseError>;

    /// Like [`Self::expand_macro`], concatenating the token texts.
    fn expand_macro_as_text(&mut self, name: &str) -> Result<Option<String>, ParseError>;

    /// Reads one undelimited argument: a single token or a balanced group.
    fn consume_arg(&mut self) -> Result<MacroArg, ParseError>;

    /// Reads `num_args` arguments, each in reading order.
    fn consume_args(&mut self, num_args: usize) -> Result<Vec<Vec<Token>>, ParseError>;

    /// Whether `name` means anything: a macro, function, symbol or implicit
    /// command.
    fn is_defined(&self, name: &str) -> bool;

    /// Whether `name` would be expanded by the gullet.
    fn is_expandable(&self, name: &str) -> bool;

    /// Opens a macro scope.
    fn begin_group(&mut self);

    /// Closes the innermost macro scope.
    fn end_group(&mut self) -> Result<(), ParseError>;
}
