#![allow(dead_code)]

use std::{
    panic::{UnwindSafe, catch_unwind},
    sync::OnceLock,
};

use katex_parser::{
    KatexContext, ParseError, ParseOutput, Settings, StrictMode, StrictSetting,
    macros::MacroDefinition,
    namespace::Mapping,
    parse, parse_with_warnings,
    parser::parse_node::ParseNode,
    types::ParseErrorKind,
};

static DEFAULT_CONTEXT: OnceLock<KatexContext> = OnceLock::new();
pub fn default_ctx() -> &'static KatexContext {
    DEFAULT_CONTEXT.get_or_init(KatexContext::default)
}

pub struct TestExpr<'a> {
    pub expr: String,
    pub ctx: &'a KatexContext,
    pub file: &'static str,
    pub line: u32,
    pub code: &'static str,
}

/// Clear every `loc`, so trees parsed from different sources compare equal
pub fn strip_positions(nodes: &mut [ParseNode]) {
    for node in nodes {
        *node.location_mut() = None;
        for child in node.children_mut() {
            strip_positions(core::slice::from_mut(child));
        }
    }
}

impl TestExpr<'_> {
    pub fn to_parse(self, settings: &Settings) -> Result<(), ParseError> {
        parse(self.ctx, &self.expr, settings).map(|_| ())
    }

    pub fn not_to_parse(self, settings: &Settings) -> Result<(), ParseError> {
        match parse(self.ctx, &self.expr, settings) {
            Ok(_) => Err(ParseError::new(ParseErrorKind::ExpectedParseFailure {
                expression: self.expr.clone(),
            })),
            Err(_) => Ok(()),
        }
    }

    /// Fails unless parsing raises an error whose kind matches `check`.
    pub fn to_fail_with(
        self,
        settings: &Settings,
        check: impl FnOnce(&ParseErrorKind) -> bool,
    ) -> Result<(), ParseError> {
        match parse(self.ctx, &self.expr, settings) {
            Ok(_) => Err(ParseError::new(ParseErrorKind::ExpectedParseFailure {
                expression: self.expr.clone(),
            })),
            Err(e) => {
                assert!(
                    check(e.kind.as_ref()),
                    "{}:{} `{}` failed with the wrong error: {e}",
                    self.file,
                    self.line,
                    self.code
                );
                Ok(())
            }
        }
    }

    pub fn to_parse_like(self, other: &str, settings: &Settings) -> Result<(), ParseError> {
        let mut tree1 = parse(self.ctx, &self.expr, settings)?;
        let mut tree2 = parse(self.ctx, other, settings)?;

        strip_positions(&mut tree1);
        strip_positions(&mut tree2);

        pretty_assertions::assert_eq!(
            tree1,
            tree2,
            "Parse trees do not match between '{}' and '{}'",
            self.expr,
            other
        );
        Ok(())
    }

    pub fn to_warn(self, settings: &Settings) -> Result<ParseOutput, ParseError> {
        let output = parse_with_warnings(self.ctx, &self.expr, settings)?;
        assert!(
            !output.warnings.is_empty(),
            "{}:{} `{}` raised no warning",
            self.file,
            self.line,
            self.code
        );
        Ok(output)
    }
}

pub fn expect_impl(
    expr: &str,
    file: &'static str,
    line: u32,
    code: &'static str,
) -> TestExpr<'static> {
    TestExpr {
        expr: expr.to_owned(),
        ctx: default_ctx(),
        file,
        line,
        code,
    }
}

#[macro_export]
macro_rules! expect {
    ($e:expr) => {
        $crate::setup::expect_impl($e, file!(), line!(), stringify!($e))
    };
}

#[cfg(feature = "backtrace")]
fn describe(e: &ParseError) -> String {
    format!("{e}\nBacktrace:\n{}", e.backtrace)
}

#[cfg(not(feature = "backtrace"))]
fn describe(e: &ParseError) -> String {
    e.to_string()
}

pub fn it<F>(desc: &str, test_fn: F)
where
    F: FnOnce() -> Result<(), ParseError> + UnwindSafe,
{
    match catch_unwind(test_fn) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => panic!("Test '{desc}' failed with Result::Err: {}", describe(&e)),
        Err(panic_payload) => {
            let msg = if let Some(s) = panic_payload.downcast_ref::<&str>() {
                (*s).to_owned()
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "<non-string panic payload>".to_owned()
            };
            panic!("Test '{desc}' panicked: {msg}");
        }
    }
}

/// Settings helpers
pub fn strict_settings() -> Settings {
    Settings::builder()
        .throw_on_error(true)
        .strict(StrictSetting::Mode(StrictMode::Error))
        .build()
}

pub fn nonstrict_settings() -> Settings {
    Settings::builder()
        .strict(StrictSetting::Mode(StrictMode::Ignore))
        .build()
}

pub fn lenient_settings() -> Settings {
    Settings::builder().throw_on_error(false).build()
}

pub fn settings_with_macros(defs: &[(&str, &str)]) -> Settings {
    let mut macros = Mapping::default();
    for (name, body) in defs {
        macros.insert((*name).to_owned(), MacroDefinition::from(*body));
    }
    Settings::builder().macros(macros).build()
}

pub fn get_parsed(expr: &str, settings: &Settings) -> Result<Vec<ParseNode>, ParseError> {
    parse(default_ctx(), expr, settings)
}

/// Parses with default settings and drops every location.
pub fn get_stripped(expr: &str) -> Result<Vec<ParseNode>, ParseError> {
    let mut nodes = get_parsed(expr, &Settings::default())?;
    strip_positions(&mut nodes);
    Ok(nodes)
}

#[macro_export]
macro_rules! assert_let {
    ($pat:pat = $expr:expr, $($arg:tt)+) => {
        let $pat = $expr else {
            panic!($($arg)+);
        };
    };
    ($pat:pat = $expr:expr) => {
        let $pat = $expr else {
            panic!(
                "assert_let failed: pattern `{}` did not match {} at {}:{} \n{:#?}",
                stringify!($pat), stringify!($expr),
                file!(), line!(),
                $expr
            );
        };
    };
}
