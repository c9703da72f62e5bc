//! Atom class commands and `\stackrel`

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, ord_argument, take_args,
};
use crate::parser::parse_node::{ParseNode, ParseNodeMclass, ParseNodeOp, ParseNodeSupSub};
use crate::symbols::Atom;
use crate::types::ParseError;

/// Registers `\mathord` and the other class commands except `\mathop`, plus
/// `\stackrel`.
pub fn define_mclass(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Mclass,
        names: &[
            "\\mathord",
            "\\mathbin",
            "\\mathrel",
            "\\mathopen",
            "\\mathclose",
            "\\mathpunct",
            "\\mathinner",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
    });

    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Stackrel,
        names: &["\\stackrel"],
        props: FunctionPropSpec {
            num_args: 2,
            ..Default::default()
        },
    });
}

/// The class a node spaces as: `mbin` or `mrel` for binary and relation
/// atoms, `mord` for everything else. An ordgroup with a single element
/// counts as that element.
#[must_use]
pub fn binrel_class(arg: &ParseNode) -> &'static str {
    let atom = match arg {
        ParseNode::OrdGroup(group) if group.body.len() == 1 => &group.body[0],
        other => other,
    };
    match atom {
        ParseNode::Atom(atom) if atom.family == Atom::Bin => "mbin",
        ParseNode::Atom(atom) if atom.family == Atom::Rel => "mrel",
        _ => "mord",
    }
}

pub(super) fn mclass(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [body] = take_args(args, &context.func_name)?;
    // \mathrel -> mrel
    let class = context.func_name.get(5..).unwrap_or_default();
    Ok(ParseNode::Mclass(ParseNodeMclass {
        mode: context.parser.mode,
        loc: context.loc(),
        mclass: format!("m{class}"),
        body: ord_argument(body),
    }))
}

/// `\stackrel{top}{bottom}` sets `top` as a limit over `bottom` and spaces
/// the result as a relation.
pub(super) fn stackrel(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [top, bottom] = take_args(args, &context.func_name)?;
    let bottom_op = ParseNode::Op(ParseNodeOp {
        mode: bottom.mode(),
        loc: bottom.location().cloned(),
        limits: true,
        always_handle_sup_sub: true,
        symbol: false,
        name: None,
        body: Some(ord_argument(bottom)),
    });
    let supsub = ParseNode::SupSub(ParseNodeSupSub {
        mode: top.mode(),
        loc: None,
        base: Some(Box::new(bottom_op)),
        sup: Some(Box::new(top)),
        sub: None,
    });
    Ok(ParseNode::Mclass(ParseNodeMclass {
        mode: context.parser.mode,
        loc: context.loc(),
        mclass: "mrel".to_owned(),
        body: vec![supsub],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_node::{ParseNodeAtom, ParseNodeMathOrd};
    use crate::types::Mode;

    fn atom(family: Atom) -> ParseNode {
        ParseNode::Atom(ParseNodeAtom {
            mode: Mode::Math,
            loc: None,
            family,
            text: "=".to_owned(),
        })
    }

    #[test]
    fn test_binrel_class() {
        assert_eq!(binrel_class(&atom(Atom::Rel)), "mrel");
        assert_eq!(binrel_class(&atom(Atom::Bin)), "mbin");
        assert_eq!(binrel_class(&atom(Atom::Open)), "mord");
        assert_eq!(
            binrel_class(&ParseNode::ord_group(Mode::Math, vec![atom(Atom::Rel)])),
            "mrel"
        );
        let x = ParseNode::MathOrd(ParseNodeMathOrd {
            mode: Mode::Math,
            loc: None,
            text: "x".to_owned(),
        });
        assert_eq!(binrel_class(&x), "mord");
    }
}
