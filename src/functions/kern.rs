//! Explicit horizontal space

use crate::KatexContext;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionKind, FunctionPropSpec, size_argument, take_args,
};
use crate::parser::parse_node::{ParseNode, ParseNodeKern};
use crate::types::{ArgType, Mode, ParseError, ParseErrorKind};

/// Registers `\kern`, `\hskip` and `\mskip`. `\mkern` is a macro for
/// `\kern`.
pub fn define_kern(ctx: &mut KatexContext) {
    ctx.define_function(FunctionDefSpec {
        kind: FunctionKind::Kern,
        names: &["\\kern", "\\hskip", "\\mskip"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Size]),
            allowed_in_text: true,
            ..Default::default()
        },
    });
}

/// LaTeX only accepts `mu` in the `\m..` variants and rejects it elsewhere;
/// a mismatch is reported through the strict setting.
pub(super) fn kern(
    context: FunctionContext<'_, '_>,
    args: Vec<ParseNode>,
) -> Result<ParseNode, ParseError> {
    let [size] = take_args(args, &context.func_name)?;
    let size_node = size.clone();
    let dimension = size_argument(size, &context.func_name)?;

    let math_function = context.func_name.starts_with("\\m");
    let mu_unit = dimension.unit == "mu";
    if math_function {
        if !mu_unit {
            context.parser.report_nonstrict(
                "mathVsTextUnits",
                &format!(
                    "LaTeX's {} supports only mu units, not {} units",
                    context.func_name, dimension.unit
                ),
                Some(&size_node),
            )?;
        }
        if context.parser.mode != Mode::Math {
            return Err(ParseError::with_token(
                ParseErrorKind::FunctionNotAllowedInTextMode {
                    func: context.func_name.clone(),
                },
                &size_node,
            ));
        }
    } else if mu_unit {
        context.parser.report_nonstrict(
            "mathVsTextUnits",
            &format!("LaTeX's {} doesn't support mu units", context.func_name),
            Some(&size_node),
        )?;
    }

    Ok(ParseNode::Kern(ParseNodeKern {
        mode: context.parser.mode,
        loc: context.loc(),
        dimension,
    }))
}
