//! Array-like environments: `array`, the matrices, `cases`, `aligned` and
//! `gathered`
//!
//! They all share [`parse_array`], which reads cells separated by `&` and
//! rows separated by `\\` or `\cr` until the `\end`.

use crate::KatexContext;
use crate::define_environment::{EnvContext, EnvDefSpec, EnvKind, EnvProps};
use crate::define_function::ord_argument;
use crate::macros::MacroContextInterface as _;
use crate::parser::parse_node::{
    AlignSpec, ColSeparationType, ParseNode, ParseNodeArray, ParseNodeLeftRight,
    ParseNodeOrdGroup, ParseNodeStyling,
};
use crate::parser::{GroupRole, Parser};
use crate::types::{ParseError, ParseErrorKind, StyleVariant};

pub fn define_array(ctx: &mut KatexContext) {
    // {darray} is {array} with cells in \displaystyle, as in nccmath.sty.
    ctx.define_environment(EnvDefSpec {
        kind: EnvKind::Array,
        names: &["array", "darray"],
        props: EnvProps {
            num_args: 1,
            ..Default::default()
        },
    });

    ctx.define_environment(EnvDefSpec {
        kind: EnvKind::Matrix,
        names: &["matrix", "pmatrix", "bmatrix", "Bmatrix", "vmatrix", "Vmatrix"],
        props: EnvProps::default(),
    });

    ctx.define_environment(EnvDefSpec {
        kind: EnvKind::SmallMatrix,
        names: &["smallmatrix"],
        props: EnvProps::default(),
    });

    // {dcases} is {cases} with cells in \displaystyle, as in mathtools.sty.
    ctx.define_environment(EnvDefSpec {
        kind: EnvKind::Cases,
        names: &["cases", "dcases"],
        props: EnvProps::default(),
    });

    ctx.define_environment(EnvDefSpec {
        kind: EnvKind::Aligned,
        names: &["aligned"],
        props: EnvProps::default(),
    });

    ctx.define_environment(EnvDefSpec {
        kind: EnvKind::Gathered,
        names: &["gathered"],
        props: EnvProps::default(),
    });
}

/// Layout fields of the array node that the environment decides up front.
#[derive(Debug, Clone)]
pub struct ArrayConfig {
    pub hskip_before_and_after: bool,
    pub add_jot: bool,
    pub cols: Option<Vec<AlignSpec>>,
    pub arraystretch: f64,
    pub col_separation_type: Option<ColSeparationType>,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            hskip_before_and_after: false,
            add_jot: false,
            cols: None,
            arraystretch: 1.0,
            col_separation_type: None,
        }
    }
}

/// Parses the rows of an environment body into a row-major grid, one
/// ordgroup per cell, each cast into `style` when one is given.
///
/// Every cell is parsed in its own macro scope. A row break may carry a
/// `[size]` gap. A trailing empty row before `\end` is dropped, as LaTeX's
/// `\crcr` does.
pub fn parse_array(
    parser: &mut Parser,
    config: ArrayConfig,
    style: Option<StyleVariant>,
) -> Result<ParseNodeArray, ParseError> {
    let mut body: Vec<Vec<ParseNode>> = vec![Vec::new()];
    let mut row_gaps = Vec::new();

    parser.gullet.begin_group();
    loop {
        let cell = parser.parse_expression(false, None)?;
        parser.gullet.end_group()?;
        parser.gullet.begin_group();

        let mode = parser.mode;
        let mut cell = ParseNode::ord_group(mode, cell);
        if let Some(style) = style {
            cell = ParseNode::Styling(ParseNodeStyling {
                mode,
                loc: None,
                style,
                body: vec![cell],
            });
        }
        if let Some(row) = body.last_mut() {
            row.push(cell);
        }

        let next = parser.fetch()?.clone();
        match next.text() {
            "&" => parser.consume(),
            "\\end" => {
                if body.len() > 1 && body.last().is_some_and(|row| is_empty_row(row)) {
                    body.pop();
                }
                break;
            }
            "\\\\" | "\\cr" => {
                let gap = match parser.parse_function(None, GroupRole::Atom)? {
                    Some(ParseNode::Cr(cr)) => cr.size,
                    _ => None,
                };
                row_gaps.push(gap);
                body.push(Vec::new());
            }
            found => {
                return Err(ParseError::with_token(
                    ParseErrorKind::ExpectedArrayDelimiter {
                        found: found.to_owned(),
                    },
                    &next,
                ));
            }
        }
    }
    parser.gullet.end_group()?;

    Ok(ParseNodeArray {
        mode: parser.mode,
        loc: None,
        col_separation_type: config.col_separation_type,
        hskip_before_and_after: config.hskip_before_and_after,
        add_jot: config.add_jot,
        cols: config.cols,
        arraystretch: config.arraystretch,
        body,
        row_gaps,
    })
}

/// A row holding one cell with nothing in it.
fn is_empty_row(row: &[ParseNode]) -> bool {
    let [cell] = row else {
        return false;
    };
    let group = match cell {
        ParseNode::Styling(styling) => match styling.body.as_slice() {
            [inner] => inner,
            _ => return false,
        },
        other => other,
    };
    matches!(group, ParseNode::OrdGroup(ord) if ord.body.is_empty())
}

/// Cells of environments whose name starts with `d` are set in display style.
fn d_cell_style(env_name: &str) -> StyleVariant {
    if env_name.starts_with('d') {
        StyleVariant::Display
    } else {
        StyleVariant::Text
    }
}

pub(super) fn array(
    context: EnvContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let spec = args.into_iter().next().ok_or_else(|| {
        ParseError::new(ParseErrorKind::ExpectedGroupAfterFunction {
            func: format!("\\begin{{{}}}", context.env_name),
        })
    })?;

    let cols = ord_argument(spec)
        .iter()
        .map(|node| match node.text() {
            Some(align @ ("l" | "c" | "r")) => Ok(AlignSpec::Align {
                align: align.to_owned(),
            }),
            Some(separator @ ("|" | ":")) => Ok(AlignSpec::Separator {
                separator: separator.to_owned(),
            }),
            other => Err(ParseError::with_token(
                ParseErrorKind::InvalidColumnAlignment {
                    alignment: other.unwrap_or_default().to_owned(),
                },
                node,
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let style = d_cell_style(&context.env_name);
    let res = parse_array(
        context.parser,
        ArrayConfig {
            cols: Some(cols),
            // \@preamble in lttab.dtx
            hskip_before_and_after: true,
            ..Default::default()
        },
        Some(style),
    )?;
    Ok(ParseNode::Array(res))
}

pub(super) fn matrix(context: EnvContext<'_, '_>) -> Result<ParseNode, ParseError> {
    let delimiters = match context.env_name.as_str() {
        "pmatrix" => Some(("(", ")")),
        "bmatrix" => Some(("[", "]")),
        "Bmatrix" => Some(("\\{", "\\}")),
        "vmatrix" => Some(("|", "|")),
        "Vmatrix" => Some(("\\Vert", "\\Vert")),
        _ => None,
    };

    let style = d_cell_style(&context.env_name);
    // \hskip -\arraycolsep in amsmath
    let res = parse_array(context.parser, ArrayConfig::default(), Some(style))?;
    let array = ParseNode::Array(res);

    Ok(match delimiters {
        Some((left, right)) => ParseNode::LeftRight(ParseNodeLeftRight {
            mode: context.mode,
            loc: None,
            body: vec![array],
            left: left.to_owned(),
            right: right.to_owned(),
        }),
        None => array,
    })
}

pub(super) fn small_matrix(context: EnvContext<'_, '_>) -> Result<ParseNode, ParseError> {
    let res = parse_array(
        context.parser,
        ArrayConfig {
            arraystretch: 0.5,
            col_separation_type: Some(ColSeparationType::Small),
            ..Default::default()
        },
        Some(StyleVariant::Script),
    )?;
    Ok(ParseNode::Array(res))
}

pub(super) fn cases(context: EnvContext<'_, '_>) -> Result<ParseNode, ParseError> {
    // \left\{\begin{array}{@{}l@{\quad}l@{}} ... \end{array}\right.
    let style = d_cell_style(&context.env_name);
    let res = parse_array(
        context.parser,
        ArrayConfig {
            arraystretch: 1.2,
            cols: Some(vec![
                AlignSpec::Align {
                    align: "l".to_owned(),
                },
                AlignSpec::Align {
                    align: "l".to_owned(),
                },
            ]),
            ..Default::default()
        },
        Some(style),
    )?;

    Ok(ParseNode::LeftRight(ParseNodeLeftRight {
        mode: context.mode,
        loc: None,
        body: vec![ParseNode::Array(res)],
        left: "\\{".to_owned(),
        right: ".".to_owned(),
    }))
}

pub(super) fn aligned(context: EnvContext<'_, '_>) -> Result<ParseNode, ParseError> {
    let mode = context.mode;
    let mut res = parse_array(
        context.parser,
        ArrayConfig {
            add_jot: true,
            col_separation_type: Some(ColSeparationType::Align),
            ..Default::default()
        },
        Some(StyleVariant::Display),
    )?;

    // amsmath's \start@aligned puts an empty group in front of every second
    // cell, so that a leading operator there is binary.
    let mut num_cols = 0;
    for row in &mut res.body {
        for cell in row.iter_mut().skip(1).step_by(2) {
            if let ParseNode::Styling(styling) = cell
                && let Some(ParseNode::OrdGroup(ord)) = styling.body.first_mut()
            {
                ord.body.insert(
                    0,
                    ParseNode::OrdGroup(ParseNodeOrdGroup {
                        mode,
                        loc: None,
                        body: Vec::new(),
                        semisimple: false,
                    }),
                );
            }
        }
        num_cols = num_cols.max(row.len());
    }

    res.cols = Some(
        (0..num_cols)
            .map(|i| AlignSpec::Align {
                align: if i % 2 == 0 { "r" } else { "l" }.to_owned(),
            })
            .collect(),
    );
    Ok(ParseNode::Array(res))
}

pub(super) fn gathered(context: EnvContext<'_, '_>) -> Result<ParseNode, ParseError> {
    let res = parse_array(
        context.parser,
        ArrayConfig {
            add_jot: true,
            col_separation_type: Some(ColSeparationType::Gather),
            cols: Some(vec![AlignSpec::Align {
                align: "c".to_owned(),
            }]),
            ..Default::default()
        },
        Some(StyleVariant::Display),
    )?;
    Ok(ParseNode::Array(res))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mode;

    fn cell(body: Vec<ParseNode>) -> ParseNode {
        ParseNode::Styling(ParseNodeStyling {
            mode: Mode::Math,
            loc: None,
            style: StyleVariant::Text,
            body: vec![ParseNode::ord_group(Mode::Math, body)],
        })
    }

    #[test]
    fn test_empty_row_detection() {
        assert!(is_empty_row(&[cell(Vec::new())]));
        assert!(is_empty_row(&[ParseNode::ord_group(Mode::Math, Vec::new())]));
        assert!(!is_empty_row(&[cell(Vec::new()), cell(Vec::new())]));
        assert!(!is_empty_row(&[]));
    }

    #[test]
    fn test_cell_style_follows_name() {
        assert_eq!(d_cell_style("darray"), StyleVariant::Display);
        assert_eq!(d_cell_style("dcases"), StyleVariant::Display);
        assert_eq!(d_cell_style("array"), StyleVariant::Text);
    }
}
