//! Sized delimiters, `\left ... \right` and `\middle`

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, take_args,
};
use crate::parser::GroupRole;
use crate::parser::parse_node::{
    NodeType, ParseNode, ParseNodeDelimsizing, ParseNodeLeftRight, ParseNodeLeftRightRight,
    ParseNodeMiddle,
};
use crate::types::{ParseError, ParseErrorKind};

/// Every token accepted after `\big`, `\left`, `\middle` and `\right`.
pub const DELIMITERS: [&str; 43] = [
    "(", ")", "[", "\\lbrack", "]", "\\rbrack",
    "\\{", "\\lbrace", "\\}", "\\rbrace",
    "\\lfloor", "\\rfloor", "\\lceil", "\\rceil",
    "<", ">", "\\langle", "\u{27e8}", "\\rangle", "\u{27e9}", "\\lt", "\\gt",
    "\\lvert", "\\rvert", "\\lVert", "\\rVert",
    "\\lgroup", "\\rgroup", "\\lmoustache", "\\rmoustache",
    "/", "\\backslash",
    "|", "\\vert", "\\|", "\\Vert",
    "\\uparrow", "\\Uparrow",
    "\\downarrow", "\\Downarrow",
    "\\updownarrow", "\\Updownarrow",
    ".",
];

/// Registers `\big` and friends, `\left`/`\right` and `\middle`.
pub fn define_delimsizing(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Delimsizing,
        names: &[
            "\\bigl", "\\Bigl", "\\biggl", "\\Biggl",
            "\\bigr", "\\Bigr", "\\biggr", "\\Biggr",
            "\\bigm", "\\Bigm", "\\biggm", "\\Biggm",
            "\\big", "\\Big", "\\bigg", "\\Bigg",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
    });

    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::LeftRight,
        names: &["\\left", "\\right"],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
    });

    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Middle,
        names: &["\\middle"],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
    });
}

/// Size (1 to 4) and atom class of a `\big`-style command.
fn delimiter_size(func_name: &str) -> (u8, &'static str) {
    let name = func_name.trim_start_matches('\\');
    let (stem, mclass) = match name.as_bytes().last() {
        Some(b'l') => (&name[..name.len() - 1], "mopen"),
        Some(b'r') => (&name[..name.len() - 1], "mclose"),
        Some(b'm') => (&name[..name.len() - 1], "mrel"),
        _ => (name, "mord"),
    };
    let size = match stem {
        "big" => 1,
        "Big" => 2,
        "bigg" => 3,
        _ => 4,
    };
    (size, mclass)
}

/// The delimiter text of `delim`, if it is one of [`DELIMITERS`].
fn check_delimiter(delim: &ParseNode, func_name: &str) -> Result<String, ParseError> {
    match delim.text() {
        Some(text) if DELIMITERS.contains(&text) => Ok(text.to_owned()),
        text => Err(ParseError::with_token(
            ParseErrorKind::InvalidDelimiter {
                delimiter: text.map_or_else(|| NodeType::from(delim).to_string(), str::to_owned),
                function: func_name.to_owned(),
            },
            delim,
        )),
    }
}

pub(super) fn delimsizing(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [delim] = take_args(args, &context.func_name)?;
    let delim = check_delimiter(&delim, &context.func_name)?;
    let (size, mclass) = delimiter_size(&context.func_name);
    Ok(ParseNode::Delimsizing(ParseNodeDelimsizing {
        mode: context.parser.mode,
        loc: context.loc(),
        size,
        mclass: mclass.to_owned(),
        delim,
    }))
}

/// `\left` parses its body up to the matching `\right` and returns the whole
/// `leftright` node. `\right` alone returns just its delimiter, which only
/// the `\left` handler consumes.
pub(super) fn left_right(
    context: FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [delim] = take_args(args, &context.func_name)?;
    let delim = check_delimiter(&delim, &context.func_name)?;
    let loc = context.loc();
    let parser = context.parser;

    if context.func_name != "\\left" {
        return Ok(ParseNode::LeftRightRight(ParseNodeLeftRightRight {
            mode: parser.mode,
            loc,
            delim,
        }));
    }

    parser.leftright_depth += 1;
    let body = parser.parse_expression(false, None);
    parser.leftright_depth -= 1;
    let body = body?;

    let next = parser.fetch()?;
    if next.text() != "\\right" {
        return Err(ParseError::with_token(
            ParseErrorKind::MissingRight {
                found: next.text().to_owned(),
            },
            next,
        ));
    }
    let right = match parser.parse_function(None, GroupRole::Atom)? {
        Some(ParseNode::LeftRightRight(right)) => right,
        _ => {
            return Err(ParseError::new(ParseErrorKind::ExpectedGroupAfterFunction {
                func: "\\right".to_owned(),
            }));
        }
    };

    Ok(ParseNode::LeftRight(ParseNodeLeftRight {
        mode: parser.mode,
        loc,
        body,
        left: delim,
        right: right.delim,
    }))
}

pub(super) fn middle(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [delim_node] = take_args(args, &context.func_name)?;
    let delim = check_delimiter(&delim_node, &context.func_name)?;
    if context.parser.leftright_depth == 0 {
        return Err(ParseError::with_token(
            ParseErrorKind::MiddleWithoutLeft,
            &delim_node,
        ));
    }
    Ok(ParseNode::Middle(ParseNodeMiddle {
        mode: context.parser.mode,
        loc: context.loc(),
        delim,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_sizes() {
        assert_eq!(delimiter_size("\\bigl"), (1, "mopen"));
        assert_eq!(delimiter_size("\\Biggr"), (4, "mclose"));
        assert_eq!(delimiter_size("\\biggm"), (3, "mrel"));
        assert_eq!(delimiter_size("\\Big"), (2, "mord"));
        assert_eq!(delimiter_size("\\Bigg"), (4, "mord"));
    }
}
