mod setup;

use std::sync::Arc;

use katex_parser::parser::parse_node::ParseNode;
use katex_parser::types::{ErrorLocationProvider, ParseErrorKind, StrictReturn};
use katex_parser::{KatexContext, Settings, StrictMode, StrictSetting, parse, parse_with_warnings};
use pretty_assertions::assert_eq;
use setup::*;

#[test]
fn test_supsub() {
    it("should parse a superscript on a greek letter", || {
        let nodes = get_stripped(r"\sigma^2")?;
        assert_eq!(nodes.len(), 1);
        assert_let!(ParseNode::SupSub(supsub) = &nodes[0]);
        assert_let!(Some(ParseNode::MathOrd(base)) = supsub.base.as_deref());
        assert_eq!(base.text, r"\sigma");
        assert_let!(Some(ParseNode::TextOrd(sup)) = supsub.sup.as_deref());
        assert_eq!(sup.text, "2");
        assert!(supsub.sub.is_none());
        Ok(())
    });

    it("should not care about script order", || {
        expect!(r"x^2_3").to_parse_like(r"x_3^2", &Settings::default())
    });

    it("should reject double scripts", || {
        expect!(r"x^1^2").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::DoubleSuperscript)
        })?;
        expect!(r"x_1_2").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::DoubleSubscript)
        })
    });

    it("should reject a script with nothing after it", || {
        expect!(r"x^").not_to_parse(&Settings::default())
    });
}

#[test]
fn test_greediness() {
    it("should accept high-greediness functions as scripts", || {
        expect!(r"x^\frac12").to_parse(&Settings::default())?;
        expect!(r"x^\sum").to_parse(&Settings::default())
    });

    it("should reject low-greediness functions as scripts", || {
        expect!(r"x^\sqrt2").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::FunctionRequiresArguments { .. })
        })
    });

    it("should report a script function at its script symbol", || {
        let err = parse(default_ctx(), r"1^\sqrt{2}", &Settings::default()).unwrap_err();
        assert!(matches!(
            err.kind.as_ref(),
            ParseErrorKind::FunctionRequiresArguments { context, .. } if context == "superscript"
        ));
        assert_eq!(err.position, Some(1));
        assert_eq!(err.length, Some(1));
        Ok(())
    });

    it("should reject a bare function as an argument", || {
        expect!(r"\frac\frac123").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::FunctionAsArgument { .. })
        })
    });
}

#[test]
fn test_fractions() {
    it("should parse single-token arguments", || {
        let nodes = get_stripped(r"\frac12")?;
        assert_let!(ParseNode::Genfrac(frac) = &nodes[0]);
        assert!(frac.has_bar_line);
        assert_eq!(frac.numer.text(), Some("1"));
        assert_eq!(frac.denom.text(), Some("2"));
        Ok(())
    });

    it("should rewrite infix operators", || {
        let nodes = get_stripped(r"a \over b")?;
        assert_eq!(nodes.len(), 1);
        assert_let!(ParseNode::Genfrac(_) = &nodes[0]);
        Ok(())
    });

    it("should reject two infix operators in one group", || {
        expect!(r"a \over b \over c").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::MultipleInfixOperators)
        })
    });

    it("should report the second infix operator", || {
        let err = parse(default_ctx(), r"a \over b \over c", &Settings::default()).unwrap_err();
        assert!(matches!(err.kind.as_ref(), ParseErrorKind::MultipleInfixOperators));
        assert_eq!(err.position, Some(10));
        Ok(())
    });

    it("should report the end of input for an unclosed group", || {
        let err = parse(default_ctx(), r"\frac{a}{", &Settings::default()).unwrap_err();
        assert_eq!(err.position, Some(9));
        Ok(())
    });
}

#[test]
fn test_macro_scoping() {
    it("should forget local definitions at the end of a group", || {
        expect!(r"{\def\x{a}}\x").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::UndefinedControlSequence { name } if name == r"\x")
        })
    });

    it("should keep global definitions", || {
        expect!(r"{\gdef\x{a}}\x").to_parse(&Settings::default())?;
        expect!(r"{\global\def\x{a}}\x").to_parse(&Settings::default())
    });

    it("should substitute parameters", || {
        expect!(r"\def\x#1{#1#1}\x y").to_parse_like(r"\def\x{}yy", &Settings::default())
    });

    it("should reject parameters out of order", || {
        expect!(r"\def\x#2{}").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::InvalidMacroArgumentNumber { .. })
        })
    });

    it("should snapshot a definition with \\let", || {
        expect!(r"\def\a{x}\let\b=\a\def\a{y}\b")
            .to_parse_like(r"\def\a{x}\let\b=\a\def\a{y}x", &Settings::default())
    });

    it("should alias a plain character with \\let", || {
        let nodes = get_stripped(r"\let\a=x \a")?;
        assert_eq!(nodes.len(), 2);
        assert_let!(ParseNode::Internal(_) = &nodes[0]);
        assert_let!(ParseNode::MathOrd(ord) = &nodes[1]);
        assert_eq!(ord.text, "x");
        Ok(())
    });

    it("should alias a function with \\let", || {
        expect!(r"\let\f=\frac \f12").to_parse_like(r"\let\f=\frac \frac12", &Settings::default())?;
        let nodes = get_stripped(r"\let\f\frac\f12")?;
        assert_let!(ParseNode::Genfrac(_) = &nodes[1]);
        Ok(())
    });

    it("should leave non-expandable tokens alone after \\noexpand", || {
        expect!(r"\noexpand x").to_parse_like(r"x", &Settings::default())?;
        expect!(r"\noexpand\frac12").to_parse_like(r"\frac12", &Settings::default())
    });

    it("should read a protected macro as nothing", || {
        expect!(r"\def\a{y}\noexpand\a x").to_parse_like(r"\def\a{y}x", &Settings::default())
    });

    it("should stop runaway recursion", || {
        expect!(r"\def\loop{\loop}\loop").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::TooManyExpansions)
        })
    });
}

#[test]
fn test_new_command() {
    it("should define and use a command with arguments", || {
        expect!(r"\newcommand\pair[2]{(#1,#2)}\pair ab")
            .to_parse_like(r"\def\pair{}(a,b)", &Settings::default())
    });

    it("should refuse to redefine with \\newcommand", || {
        expect!(r"\newcommand\frac{x}").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::MacroAlreadyDefined { .. })
        })
    });

    it("should refuse to define with \\renewcommand", || {
        expect!(r"\renewcommand\nothere{x}").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::MacroNotDefined { .. })
        })
    });

    it("should accept either with \\providecommand", || {
        expect!(r"\providecommand\nothere{x}\nothere").to_parse(&Settings::default())
    });
}

#[test]
fn test_settings_macros() {
    let settings = settings_with_macros(&[(r"\RR", r"\mathbb{R}")]);
    let mut nodes = parse(default_ctx(), r"\RR", &settings).unwrap();
    let mut expected = parse(default_ctx(), r"\mathbb{R}", &settings).unwrap();
    strip_positions(&mut nodes);
    strip_positions(&mut expected);
    assert_eq!(nodes, expected);
}

#[test]
fn test_expansion_limit() {
    let settings = Settings::builder().max_expand(0).build();
    let err = parse(default_ctx(), r"\def\a{b}\a", &settings).unwrap_err();
    assert!(matches!(*err.kind, ParseErrorKind::TooManyExpansions));
}

#[test]
fn test_environments() {
    it("should split rows and columns", || {
        let nodes = get_stripped(r"\begin{matrix}a&b\\c&d\end{matrix}")?;
        assert_let!(ParseNode::Array(array) = &nodes[0]);
        assert_eq!(array.body.len(), 2);
        assert!(array.body.iter().all(|row| row.len() == 2));
        Ok(())
    });

    it("should drop a trailing empty row", || {
        let nodes = get_stripped(r"\begin{matrix}a\\\end{matrix}")?;
        assert_let!(ParseNode::Array(array) = &nodes[0]);
        assert_eq!(array.body.len(), 1);
        Ok(())
    });

    it("should wrap delimited matrices", || {
        let nodes = get_stripped(r"\begin{pmatrix}a\end{pmatrix}")?;
        assert_let!(ParseNode::LeftRight(leftright) = &nodes[0]);
        assert_eq!(leftright.left, "(");
        assert_eq!(leftright.right, ")");
        Ok(())
    });

    it("should reject mismatched names", || {
        expect!(r"\begin{matrix}a\end{pmatrix}").to_fail_with(&Settings::default(), |kind| {
            matches!(
                kind,
                ParseErrorKind::MismatchedEnvironment { begin, end }
                    if begin == "matrix" && end == "pmatrix"
            )
        })
    });

    it("should reject unknown environments", || {
        expect!(r"\begin{nope}\end{nope}").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::UnknownEnvironment { .. })
        })
    });

    it("should reject a dangling \\end", || {
        expect!(r"a\end{matrix}").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::UnmatchedEnd { name } if name == "matrix")
        })
    });

    it("should reject a row break outside an environment", || {
        expect!(r"a\\b").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::ExpectedToken { .. })
        })
    });
}

#[test]
fn test_implicit_groups() {
    it("should color up to the end of the group", || {
        let nodes = get_stripped(r"{\color{red}ab}c")?;
        assert_eq!(nodes.len(), 2);
        assert_let!(ParseNode::OrdGroup(group) = &nodes[0]);
        assert_let!(ParseNode::Color(color) = &group.body[0]);
        assert_eq!(color.color, "red");
        assert_eq!(color.body.len(), 2);
        Ok(())
    });

    it("should size up to the end of the expression", || {
        let nodes = get_stripped(r"\Huge ab")?;
        assert_let!(ParseNode::Sizing(sizing) = &nodes[0]);
        assert_eq!(sizing.size, 11);
        assert_eq!(sizing.body.len(), 2);
        Ok(())
    });

    it("should stop a style switch at an infix operator", || {
        let nodes = get_stripped(r"\displaystyle a \over b")?;
        assert_let!(ParseNode::Genfrac(frac) = &nodes[0]);
        assert_let!(ParseNode::OrdGroup(numer) = &frac.numer);
        assert_let!(ParseNode::Styling(_) = &numer.body[0]);
        Ok(())
    });
}

#[test]
fn test_left_right() {
    it("should collect the body between delimiters", || {
        let nodes = get_stripped(r"\left( x \middle| y \right]")?;
        assert_let!(ParseNode::LeftRight(leftright) = &nodes[0]);
        assert_eq!(leftright.left, "(");
        assert_eq!(leftright.right, "]");
        assert_eq!(leftright.body.len(), 3);
        Ok(())
    });

    it("should require \\right", || {
        expect!(r"\left( x").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::MissingRight { found } if found == "EOF")
        })
    });

    it("should reject a dangling \\right", || {
        expect!(r"x \right)").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::UnmatchedRight)
        })
    });

    it("should reject \\middle outside \\left", || {
        expect!(r"a \middle| b").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::MiddleWithoutLeft)
        })
    });

    it("should reject non-delimiters", || {
        expect!(r"\left x \right)").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::InvalidDelimiter { .. })
        })
    });
}

#[test]
fn test_modes() {
    it("should parse math inside text", || {
        let nodes = get_stripped(r"\text{a $x^2$ b}")?;
        assert_let!(ParseNode::Text(text) = &nodes[0]);
        assert!(
            text.body
                .iter()
                .any(|node| matches!(node, ParseNode::Styling(_)))
        );
        Ok(())
    });

    it("should reject a dollar in math mode", || {
        expect!(r"a$b").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::DollarInMathMode)
        })
    });

    it("should reject math-only functions in text", || {
        expect!(r"\text{\frac12}").to_fail_with(&Settings::default(), |kind| {
            matches!(kind, ParseErrorKind::FunctionNotAllowedInTextMode { .. })
        })
    });

    it("should form ligatures in text", || {
        let nodes = get_stripped(r"\text{a--b}")?;
        assert_let!(ParseNode::Text(text) = &nodes[0]);
        let texts: Vec<_> = text.body.iter().filter_map(ParseNode::text).collect();
        assert_eq!(texts, ["a", "--", "b"]);
        Ok(())
    });
}

#[test]
fn test_undefined_control_sequence() {
    let err = parse(default_ctx(), r"a+\foo", &Settings::default()).unwrap_err();
    assert!(matches!(
        err.kind.as_ref(),
        ParseErrorKind::UndefinedControlSequence { name } if name == r"\foo"
    ));
    assert_eq!(err.position, Some(2));
    assert_eq!(err.length, Some(4));
}

#[test]
fn test_throw_on_error() {
    it("should degrade errors into one error node", || {
        let nodes = get_parsed(r"\frac{a}{", &lenient_settings())?;
        assert_eq!(nodes.len(), 1);
        assert_let!(ParseNode::Error(leaf) = &nodes[0]);
        assert_eq!(leaf.text, r"\frac{a}{");
        assert_eq!(leaf.color, "#cc0000");
        Ok(())
    });

    it("should leave valid input alone", || {
        let nodes = get_parsed(r"x+y", &lenient_settings())?;
        assert_eq!(nodes.len(), 3);
        Ok(())
    });
}

#[test]
fn test_strict_policy() {
    it("should warn about unicode text in math by default", || {
        let output = expect!("\u{436}").to_warn(&Settings::default())?;
        assert_eq!(output.warnings[0].code, "unicodeTextInMathMode");
        Ok(())
    });

    it("should fail under the error policy", || {
        expect!("\u{436}").to_fail_with(&strict_settings(), |kind| {
            matches!(kind, ParseErrorKind::StrictMode { code, .. } if code == "unicodeTextInMathMode")
        })
    });

    it("should stay quiet under the ignore policy", || {
        let output = parse_with_warnings(default_ctx(), "\u{436}", &nonstrict_settings())?;
        assert!(output.warnings.is_empty());
        Ok(())
    });
}

fn unicode_is_error(
    code: &str,
    _: &str,
    _: Option<&dyn ErrorLocationProvider>,
) -> Option<StrictReturn> {
    (code == "unicodeTextInMathMode").then_some(StrictReturn::Mode(StrictMode::Error))
}

#[test]
fn test_strict_function() {
    let settings = Settings::builder()
        .strict(StrictSetting::Function(Arc::new(unicode_is_error)))
        .build();
    assert!(parse(default_ctx(), "\u{436}", &settings).is_err());
    assert!(parse(default_ctx(), r"x^2", &settings).is_ok());
}

#[test]
fn test_custom_context() {
    let ctx = KatexContext::new();
    let err = parse(&ctx, r"\frac12", &Settings::default()).unwrap_err();
    assert!(matches!(
        err.kind.as_ref(),
        ParseErrorKind::UndefinedControlSequence { .. }
    ));
}
