//! Core type definitions shared by the lexer, gullet and parser

mod parse_error;
mod settings;
mod source_location;
mod tokens;

use strum::{AsRefStr, Display, EnumString};

use crate::define_environment::EnvSpec;
use crate::define_function::FunctionSpec;
pub use crate::symbols::Mode;
pub use parse_error::{ErrorLocationProvider, ParseError, ParseErrorKind};
pub use settings::{
    Settings, StrictFunction, StrictMode, StrictReturn, StrictSetting, StrictWarning,
};
pub use source_location::{SourceLocation, SourceRangeRef};
pub use tokens::{Token, TokenText};

/// How an argument of a function or environment is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A CSS-like color literal, read by the color sub-lexer.
    Color,
    /// A dimension such as `1.5em`, read by the size sub-lexer.
    Size,
    /// The raw text of a braced group.
    Raw,
    /// A normal group in whatever mode the parser is in.
    Original,
    /// A text-mode group wrapped in text style.
    Hbox,
    /// A single expanded token or group, without opening a new scope.
    Primitive,
    /// A group parsed in the given mode.
    Mode(Mode),
}

/// Math styles, as set by `\displaystyle` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StyleVariant {
    Text,
    Display,
    Script,
    ScriptScript,
}

/// Tokens that can end an expression early.
#[derive(Debug, Clone, PartialEq, Eq, EnumString, AsRefStr)]
pub enum BreakToken {
    #[strum(serialize = "]")]
    RightBracket,
    #[strum(serialize = "}")]
    RightBrace,
    #[strum(serialize = "\\endgroup")]
    EndGroup,
    #[strum(serialize = "$")]
    Dollar,
    #[strum(serialize = "\\\\")]
    DoubleBackslash,
    #[strum(serialize = "\\end")]
    End,
    #[strum(serialize = "EOF")]
    Eof,
}

/// Argument layout shared by functions and environments, so one
/// `parse_arguments` serves both.
pub trait Spec {
    /// Required arguments.
    fn num_args(&self) -> usize;
    /// Optional (bracketed) arguments, which come first.
    fn num_optional_args(&self) -> usize;
    /// Per-position argument types, when not all `Original`.
    fn arg_types(&self) -> Option<&[ArgType]>;
    /// Rank used to decide whether an argument may itself be a function
    /// application.
    fn greediness(&self) -> u8;
    /// Whether arguments are read without opening a scope.
    fn primitive(&self) -> bool;
}

impl Spec for FunctionSpec {
    fn num_args(&self) -> usize {
        self.num_args
    }
    fn num_optional_args(&self) -> usize {
        self.num_optional_args
    }
    fn arg_types(&self) -> Option<&[ArgType]> {
        self.arg_types.as_deref()
    }
    fn greediness(&self) -> u8 {
        self.greediness
    }
    fn primitive(&self) -> bool {
        self.primitive
    }
}

impl Spec for EnvSpec {
    fn num_args(&self) -> usize {
        self.num_args
    }
    fn num_optional_args(&self) -> usize {
        self.num_optional_args
    }
    fn arg_types(&self) -> Option<&[ArgType]> {
        self.arg_types.as_deref()
    }
    fn greediness(&self) -> u8 {
        1
    }
    fn primitive(&self) -> bool {
        false
    }
}
