use core::fmt;

use alloc::sync::Arc;
use bon::bon;

use crate::macros::MacroDefinition;
use crate::namespace::Mapping;
use crate::types::{ErrorLocationProvider, ParseError, ParseErrorKind};

/// How a non-strict construct is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrictMode {
    /// Accept silently.
    Ignore,
    /// Accept, print a warning and record it in the parse's warnings.
    Warn,
    /// Fail the parse with [`ParseErrorKind::StrictMode`].
    Error,
}

/// Options for one parse.
///
/// Build with [`Settings::builder`]; every option has a default.
///
/// ```
/// use katex_parser::{Settings, StrictMode, StrictSetting};
///
/// let settings = Settings::builder()
///     .display_mode(true)
///     .strict(StrictSetting::Mode(StrictMode::Error))
///     .build();
/// assert_eq!(settings.max_expand, 1000);
/// ```
#[derive(Debug, Clone)]
pub struct Settings {
    /// Display style instead of text style for the whole expression.
    ///
    /// This is metadata for whatever lays the tree out. Parsing never reads
    /// it, so the same input gives the same tree either way.
    pub display_mode: bool,
    /// Fail on errors instead of degrading them into error nodes.
    pub throw_on_error: bool,
    /// Color attached to error nodes when `throw_on_error` is false.
    pub error_color: String,
    /// User macros merged into the root scope before parsing.
    pub macros: Mapping<MacroDefinition>,
    /// Policy for LaTeX-incompatible input.
    pub strict: StrictSetting,
    /// Ceiling on macro expansions per parse.
    pub max_expand: usize,
    /// Parse at the macro root scope, so definitions are not discarded by an
    /// outer group.
    pub global_group: bool,
}

#[bon]
impl Settings {
    /// Creates settings, filling in defaults for every omitted option.
    #[must_use]
    #[builder]
    pub fn new(
        display_mode: Option<bool>,
        throw_on_error: Option<bool>,
        error_color: Option<String>,
        macros: Option<Mapping<MacroDefinition>>,
        strict: Option<StrictSetting>,
        max_expand: Option<usize>,
        global_group: Option<bool>,
    ) -> Self {
        Self {
            display_mode: display_mode.unwrap_or(false),
            throw_on_error: throw_on_error.unwrap_or(true),
            error_color: error_color.unwrap_or_else(|| "#cc0000".to_owned()),
            macros: macros.unwrap_or_default(),
            strict: strict.unwrap_or_default(),
            max_expand: max_expand.unwrap_or(1000),
            global_group: global_group.unwrap_or(false),
        }
    }

    /// Applies the strict policy to a LaTeX-incompatible construct.
    ///
    /// Returns the warning to record when the policy is `Warn`, and an error
    /// when it is `Error`.
    #[expect(clippy::print_stderr)]
    pub fn report_nonstrict(
        &self,
        error_code: &str,
        error_msg: &str,
        token: Option<&dyn ErrorLocationProvider>,
    ) -> Result<Option<StrictWarning>, ParseError> {
        match self.resolve_strict(error_code, error_msg, token) {
            StrictMode::Ignore => Ok(None),
            StrictMode::Error => {
                let kind = ParseErrorKind::StrictMode {
                    message: error_msg.to_owned(),
                    code: error_code.to_owned(),
                };
                Err(match token {
                    Some(t) => ParseError::with_token(kind, t),
                    None => ParseError::new(kind),
                })
            }
            StrictMode::Warn => {
                eprintln!(
                    "LaTeX-incompatible input and strict mode is set to 'warn': {error_msg} [{error_code}]"
                );
                Ok(Some(StrictWarning {
                    code: error_code.to_owned(),
                    message: error_msg.to_owned(),
                    position: token.and_then(|t| t.loc()).map(|loc| loc.start),
                }))
            }
        }
    }

    fn resolve_strict(
        &self,
        error_code: &str,
        error_msg: &str,
        token: Option<&dyn ErrorLocationProvider>,
    ) -> StrictMode {
        match &self.strict {
            StrictSetting::Mode(m) => *m,
            StrictSetting::Bool(b) => StrictReturn::Bool(*b).into(),
            StrictSetting::Function(f) => f(error_code, error_msg, token)
                .map_or(StrictMode::Ignore, StrictMode::from),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A LaTeX-incompatible construct that was accepted under `StrictMode::Warn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrictWarning {
    /// Machine-readable code, e.g. `unicodeTextInMathMode`.
    pub code: String,
    /// Human-readable description.
    pub message: String,
    /// Byte offset of the offending input, when known.
    pub position: Option<usize>,
}

/// Value returned by a [`StrictFunction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrictReturn {
    /// `true` means error, `false` means ignore.
    Bool(bool),
    /// An explicit mode.
    Mode(StrictMode),
}

impl From<StrictReturn> for StrictMode {
    fn from(value: StrictReturn) -> Self {
        match value {
            StrictReturn::Mode(m) => m,
            StrictReturn::Bool(true) => Self::Error,
            StrictReturn::Bool(false) => Self::Ignore,
        }
    }
}

/// Callback deciding the policy per diagnostic: `(code, message, location)`.
/// Returning `None` ignores the diagnostic.
pub type StrictFunction =
    dyn Fn(&str, &str, Option<&dyn ErrorLocationProvider>) -> Option<StrictReturn> + Send + Sync;

/// The `strict` option.
#[derive(Clone)]
pub enum StrictSetting {
    /// The same mode for every diagnostic.
    Mode(StrictMode),
    /// `true` for `Error`, `false` for `Ignore`.
    Bool(bool),
    /// Decide per diagnostic.
    Function(Arc<StrictFunction>),
}

impl fmt::Debug for StrictSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mode(m) => write!(f, "StrictSetting::Mode({m:?})"),
            Self::Bool(b) => write!(f, "StrictSetting::Bool({b})"),
            Self::Function(_) => write!(f, "StrictSetting::Function(<fn>)"),
        }
    }
}

impl Default for StrictSetting {
    fn default() -> Self {
        Self::Mode(StrictMode::Warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceLocation;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.display_mode);
        assert!(settings.throw_on_error);
        assert_eq!(settings.error_color, "#cc0000");
        assert_eq!(settings.max_expand, 1000);
        assert!(settings.macros.is_empty());
        assert!(matches!(
            settings.strict,
            StrictSetting::Mode(StrictMode::Warn)
        ));
    }

    #[test]
    fn test_report_nonstrict_modes() {
        let loc = SourceLocation::from_str("é", 0, 2);

        let ignore = Settings::builder().strict(StrictSetting::Bool(false)).build();
        assert_eq!(ignore.report_nonstrict("unknownSymbol", "msg", Some(&loc)).unwrap(), None);

        let warn = Settings::default();
        let warning = warn
            .report_nonstrict("unknownSymbol", "msg", Some(&loc))
            .unwrap()
            .unwrap();
        assert_eq!(warning.code, "unknownSymbol");
        assert_eq!(warning.position, Some(0));

        let error = Settings::builder().strict(StrictSetting::Bool(true)).build();
        let err = error
            .report_nonstrict("unknownSymbol", "msg", Some(&loc))
            .unwrap_err();
        assert!(matches!(*err.kind, ParseErrorKind::StrictMode { .. }));
        assert_eq!(err.position, Some(0));
    }

    #[test]
    fn test_strict_function_per_code() {
        let settings = Settings::builder()
            .strict(StrictSetting::Function(Arc::new(|code, _, _| {
                (code == "commentAtEnd").then_some(StrictReturn::Mode(StrictMode::Error))
            })))
            .build();

        assert!(settings.report_nonstrict("commentAtEnd", "c", None).is_err());
        assert_eq!(settings.report_nonstrict("unknownSymbol", "u", None).unwrap(), None);
    }
}
