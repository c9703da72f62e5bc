//! Math fonts, `\boldsymbol` and the old-style font switches

use phf::phf_map;

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, normalize_argument,
    take_args,
};
use crate::functions::mclass::binrel_class;
use crate::parser::parse_node::{ParseNode, ParseNodeFont, ParseNodeMclass};
use crate::types::ParseError;

static FONT_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "\\Bbb" => "\\mathbb",
    "\\bold" => "\\mathbf",
    "\\frak" => "\\mathfrak",
};

/// Registers the math font commands and the old font switches.
pub fn define_font(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Font,
        names: &[
            // styles
            "\\mathrm",
            "\\mathit",
            "\\mathbf",
            // families
            "\\mathbb",
            "\\mathcal",
            "\\mathfrak",
            "\\mathscr",
            "\\mathsf",
            "\\mathtt",
            // aliases
            "\\Bbb",
            "\\bold",
            "\\frak",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            greediness: 2,
            ..Default::default()
        },
    });

    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::BoldSymbol,
        names: &["\\boldsymbol", "\\bm"],
        props: FunctionPropSpec {
            num_args: 1,
            greediness: 2,
            ..Default::default()
        },
    });

    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::OldFont,
        names: &["\\rm", "\\sf", "\\tt", "\\bf", "\\it"],
        props: FunctionPropSpec {
            allowed_in_text: true,
            ..Default::default()
        },
    });
}

/// The `font` field for a font command: the canonical name without its
/// backslash.
fn font_name(func_name: &str) -> &str {
    let canonical = FONT_ALIASES.get(func_name).copied().unwrap_or(func_name);
    canonical.strip_prefix('\\').unwrap_or(canonical)
}

pub(super) fn font(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [body] = take_args(args, &context.func_name)?;
    Ok(ParseNode::Font(ParseNodeFont {
        mode: context.parser.mode,
        loc: context.loc(),
        font: font_name(&context.func_name).to_owned(),
        body: Box::new(normalize_argument(body)),
    }))
}

/// `\boldsymbol{x}` keeps the spacing class of its argument, so `\bm{=}`
/// still spaces like a relation.
pub(super) fn bold_symbol(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [body] = take_args(args, &context.func_name)?;
    let mclass = binrel_class(&body).to_owned();
    let loc = context.loc();
    Ok(ParseNode::Mclass(ParseNodeMclass {
        mode: context.parser.mode,
        loc: loc.clone(),
        mclass,
        body: vec![ParseNode::Font(ParseNodeFont {
            mode: context.parser.mode,
            loc,
            font: "boldsymbol".to_owned(),
            body: Box::new(body),
        })],
    }))
}

/// `\rm` and friends apply to the rest of the enclosing group.
pub(super) fn old_font(context: FunctionContext<'_, '_>) -> Result<ParseNode, ParseError> {
    let loc = context.loc();
    let font = format!("math{}", context.func_name.trim_start_matches('\\'));
    let body = context
        .parser
        .parse_expression(true, context.break_on_token_text)?;
    let mode = context.parser.mode;
    Ok(ParseNode::Font(ParseNodeFont {
        mode,
        loc,
        font,
        body: Box::new(ParseNode::ord_group(mode, body)),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_names_resolve_aliases() {
        assert_eq!(font_name("\\mathbf"), "mathbf");
        assert_eq!(font_name("\\Bbb"), "mathbb");
        assert_eq!(font_name("\\bold"), "mathbf");
        assert_eq!(font_name("\\frak"), "mathfrak");
    }
}
