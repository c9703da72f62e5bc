//! Large operators, operator names and `\mathop`

use phf::phf_map;

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, ord_argument, take_args,
};
use crate::parser::parse_node::{ParseNode, ParseNodeOp};
use crate::types::ParseError;

/// Unicode operator characters and the command each one stands for.
static SINGLE_CHAR_OPS: phf::Map<&'static str, &'static str> = phf_map! {
    "\u{220F}" => "\\prod",
    "\u{2210}" => "\\coprod",
    "\u{2211}" => "\\sum",
    "\u{22c0}" => "\\bigwedge",
    "\u{22c1}" => "\\bigvee",
    "\u{22c2}" => "\\bigcap",
    "\u{22c3}" => "\\bigcup",
    "\u{2a00}" => "\\bigodot",
    "\u{2a01}" => "\\bigoplus",
    "\u{2a02}" => "\\bigotimes",
    "\u{2a04}" => "\\biguplus",
    "\u{2a06}" => "\\bigsqcup",
    "\u{222b}" => "\\int",
    "\u{222c}" => "\\iint",
    "\u{222d}" => "\\iiint",
    "\u{222e}" => "\\oint",
};

/// Registers the four operator groups, split by whether they take limits in
/// display style and whether they are symbols that grow there.
pub fn define_op(ctx: &mut KatexContext) {
    // No limits, not symbols
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Op {
            limits: false,
            symbol: false,
        },
        names: &[
            "\\arcsin", "\\arccos", "\\arctan", "\\arctg", "\\arcctg", "\\arg", "\\ch", "\\cos",
            "\\cosec", "\\cosh", "\\cot", "\\cotg", "\\coth", "\\csc", "\\ctg", "\\cth",
            "\\deg", "\\dim", "\\exp", "\\hom", "\\ker", "\\lg", "\\ln", "\\log", "\\sec",
            "\\sin", "\\sinh", "\\sh", "\\tan", "\\tanh", "\\tg", "\\th",
        ],
        props: FunctionPropSpec::default(),
    });

    // Limits, not symbols
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Op {
            limits: true,
            symbol: false,
        },
        names: &[
            "\\det", "\\gcd", "\\inf", "\\lim", "\\max", "\\min", "\\Pr", "\\sup",
        ],
        props: FunctionPropSpec::default(),
    });

    // No limits, symbols
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Op {
            limits: false,
            symbol: true,
        },
        names: &[
            "\\int", "\\iint", "\\iiint", "\\oint", "\u{222b}", "\u{222c}", "\u{222d}",
            "\u{222e}",
        ],
        props: FunctionPropSpec::default(),
    });

    // Limits, symbols
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Op {
            limits: true,
            symbol: true,
        },
        names: &[
            "\\coprod", "\\bigvee", "\\bigwedge", "\\biguplus", "\\bigcap", "\\bigcup",
            "\\intop", "\\prod", "\\sum", "\\bigotimes", "\\bigoplus", "\\bigodot",
            "\\bigsqcup", "\\smallint", "\u{220F}", "\u{2210}", "\u{2211}", "\u{22c0}",
            "\u{22c1}", "\u{22c2}", "\u{22c3}", "\u{2a00}", "\u{2a01}", "\u{2a02}",
            "\u{2a04}", "\u{2a06}",
        ],
        props: FunctionPropSpec::default(),
    });

    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::MathOp,
        names: &["\\mathop"],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
    });
}

/// The command name an operator is recorded under.
fn op_name(func_name: &str) -> &str {
    SINGLE_CHAR_OPS.get(func_name).copied().unwrap_or(func_name)
}

pub(super) fn op(context: &FunctionContext<'_, '_>, limits: bool, symbol: bool) -> ParseNode {
    ParseNode::Op(ParseNodeOp {
        mode: context.parser.mode,
        loc: context.loc(),
        limits,
        always_handle_sup_sub: false,
        symbol,
        name: Some(op_name(&context.func_name).to_owned()),
        body: None,
    })
}

pub(super) fn math_op(
    context: &FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [body] = take_args(args, &context.func_name)?;
    Ok(ParseNode::Op(ParseNodeOp {
        mode: context.parser.mode,
        loc: context.loc(),
        limits: false,
        always_handle_sup_sub: false,
        symbol: false,
        name: None,
        body: Some(ord_argument(body)),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_operators_map_to_commands() {
        assert_eq!(op_name("\u{2211}"), "\\sum");
        assert_eq!(op_name("\u{22c3}"), "\\bigcup");
        assert_eq!(op_name("\u{222e}"), "\\oint");
        assert_eq!(op_name("\\lim"), "\\lim");
    }
}
