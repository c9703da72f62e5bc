//! Function registration types
//!
//! A function is registered under one or more names with a
//! [`FunctionPropSpec`] describing how its arguments are read, and a
//! [`FunctionKind`] naming the handler that builds its node. The parser
//! dispatches on the kind through [`crate::functions::dispatch`].

use crate::parser::Parser;
use crate::parser::parse_node::ParseNode;
use crate::types::{
    ArgType, BreakToken, ErrorLocationProvider as _, ParseError, ParseErrorKind, SourceLocation,
    Token,
};
use crate::units::MeasurementOwned;

/// Everything a handler gets to see besides its arguments.
pub struct FunctionContext<'a, 'b> {
    /// The name the function was invoked as, e.g. `\dfrac`.
    pub func_name: String,
    /// The parser, for handlers that read more input.
    pub parser: &'a mut Parser<'b>,
    /// The function token, when the call came from the input.
    pub token: Option<&'a Token>,
    /// Token that ends the enclosing expression, for implicit groups.
    pub break_on_token_text: Option<&'a BreakToken>,
}

impl FunctionContext<'_, '_> {
    /// The span of the function token, if any.
    #[must_use]
    pub fn loc(&self) -> Option<SourceLocation> {
        let t = self.token?;
        t.loc().cloned()
    }
}

/// Which handler builds the node for a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// `\frac`, `\binom` and the internal infix targets.
    Genfrac,
    /// `\over`, `\choose`, `\atop`, `\brace`, `\brack`.
    Infix,
    /// `\sqrt[n]{x}`.
    Sqrt,
    /// `\textcolor{c}{x}`.
    TextColor,
    /// `\color{c}`, coloring the rest of the group.
    Color,
    /// `\text` and the `\text..` font variants.
    Text,
    /// `\mathbf` and other math fonts taking an argument.
    Font,
    /// `\boldsymbol` and `\bm`.
    BoldSymbol,
    /// `\rm`, `\bf` and the other font switches.
    OldFont,
    /// `\tiny` through `\Huge`.
    Sizing,
    /// `\displaystyle` and friends.
    Styling,
    /// `\big` and friends.
    Delimsizing,
    /// `\left` and `\right`.
    LeftRight,
    /// `\middle`.
    Middle,
    /// Large operators and operator names without arguments.
    Op {
        /// Scripts go above and below in display style.
        limits: bool,
        /// The operator is a symbol that grows in display style.
        symbol: bool,
    },
    /// `\mathop{x}`.
    MathOp,
    /// `\mathrel{x}` and the other class commands.
    Mclass,
    /// `\stackrel{top}{bottom}`.
    Stackrel,
    /// Math accents such as `\hat`.
    Accent,
    /// Text accents such as `\'`.
    TextAccent,
    /// `\overline`.
    Overline,
    /// `\underline`.
    Underline,
    /// `\phantom`.
    Phantom,
    /// `\hphantom`.
    Hphantom,
    /// `\vphantom`.
    Vphantom,
    /// `\rule`.
    Rule,
    /// `\kern` and friends.
    Kern,
    /// `\raisebox`.
    Raisebox,
    /// `\mathllap`, `\mathrlap`, `\mathclap`.
    Lap,
    /// `\cancel`, `\fbox` and friends.
    Enclose,
    /// `\colorbox`.
    ColorBox,
    /// `\fcolorbox`.
    FColorBox,
    /// `\xrightarrow` and the other extensible arrows.
    XArrow,
    /// `\\` and `\cr`.
    Cr,
    /// `\begin` and `\end`.
    Environment,
    /// `\def` and `\gdef`.
    Def,
    /// The `\global` prefix.
    Global,
    /// `\let`.
    Let,
    /// `\newcommand`, `\renewcommand` and `\providecommand`.
    NewCommand,
}

/// How a function's arguments are parsed, and where it may appear.
#[derive(Debug, Clone)]
pub struct FunctionPropSpec {
    /// Required arguments.
    pub num_args: usize,

    /// Type of each argument, optional ones first. `None` reads every
    /// argument in the current mode.
    pub arg_types: Option<Vec<ArgType>>,

    /// Rank deciding whether this function may be an unbraced argument of
    /// another: it may when its greediness is higher than the caller's.
    pub greediness: u8,

    /// Whether the function may be used in text mode.
    pub allowed_in_text: bool,

    /// Whether the function may be used in math mode.
    pub allowed_in_math: bool,

    /// Bracketed arguments read before the required ones.
    pub num_optional_args: usize,

    /// Splits the surrounding expression in two, like `\over`.
    pub infix: bool,

    /// Reads its arguments as single unexpanded tokens.
    pub primitive: bool,
}

impl Default for FunctionPropSpec {
    fn default() -> Self {
        Self {
            num_args: 0,
            arg_types: None,
            greediness: 1,
            allowed_in_text: false,
            allowed_in_math: true,
            num_optional_args: 0,
            infix: false,
            primitive: false,
        }
    }
}

/// A registration: one kind and set of properties under several names.
pub struct FunctionDefSpec<'b> {
    /// Handler to dispatch to.
    pub kind: FunctionKind,

    /// Names the function is invoked as, with their backslash.
    pub names: &'b [&'b str],

    /// Argument layout and placement rules.
    pub props: FunctionPropSpec,
}

/// A function as stored in the registry, one per name.
#[derive(Debug, Clone)]
pub struct FunctionSpec {
    pub kind: FunctionKind,
    pub num_args: usize,
    pub arg_types: Option<Vec<ArgType>>,
    pub greediness: u8,
    pub allowed_in_text: bool,
    pub allowed_in_math: bool,
    pub num_optional_args: usize,
    pub infix: bool,
    pub primitive: bool,
}

impl FunctionSpec {
    /// Whether the function stands alone like a symbol, so that using it as a
    /// script or an argument needs no greediness check.
    #[must_use]
    pub const fn acts_as_symbol(&self) -> bool {
        matches!(self.kind, FunctionKind::Op { .. })
            && self.num_args == 0
            && self.num_optional_args == 0
    }

    /// Combines a kind with its properties.
    #[must_use]
    pub fn new(kind: FunctionKind, props: FunctionPropSpec) -> Self {
        Self {
            kind,
            num_args: props.num_args,
            arg_types: props.arg_types,
            greediness: props.greediness,
            allowed_in_text: props.allowed_in_text,
            allowed_in_math: props.allowed_in_math,
            num_optional_args: props.num_optional_args,
            infix: props.infix,
            primitive: props.primitive,
        }
    }
}

/// Unwraps a one-element ordgroup into its element.
#[must_use]
pub fn normalize_argument(arg: ParseNode) -> ParseNode {
    match arg {
        ParseNode::OrdGroup(mut ord) if ord.body.len() == 1 => ord.body.remove(0),
        other => other,
    }
}

/// The elements of an argument: an ordgroup's body, or the node itself.
#[must_use]
pub fn ord_argument(arg: ParseNode) -> Vec<ParseNode> {
    match arg {
        ParseNode::OrdGroup(ord) => ord.body,
        other => vec![other],
    }
}

/// Moves the required arguments into a fixed-size array.
pub fn take_args<const N: usize>(
    args: Vec<ParseNode>,
    func: &str,
) -> Result<[ParseNode; N], ParseError> {
    <[ParseNode; N]>::try_from(args).map_err(|_| {
        ParseError::new(ParseErrorKind::ExpectedGroupAfterFunction {
            func: func.to_owned(),
        })
    })
}

/// The color carried by a `color-token` argument.
pub fn color_argument(arg: &ParseNode, func: &str) -> Result<String, ParseError> {
    match arg {
        ParseNode::ColorToken(token) => Ok(token.color.clone()),
        other => Err(ParseError::with_token(
            ParseErrorKind::UnexpectedArgumentNode {
                node: "color-token".to_owned(),
                func: func.to_owned(),
            },
            other,
        )),
    }
}

/// The measurement carried by a `size` argument.
pub fn size_argument(arg: ParseNode, func: &str) -> Result<MeasurementOwned, ParseError> {
    match arg {
        ParseNode::Size(size) => Ok(size.value),
        other => Err(ParseError::with_token(
            ParseErrorKind::UnexpectedArgumentNode {
                node: "size".to_owned(),
                func: func.to_owned(),
            },
            &other,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_node::{ParseNodeMathOrd, ParseNodeOrdGroup};
    use crate::types::Mode;

    fn x() -> ParseNode {
        ParseNode::MathOrd(ParseNodeMathOrd {
            mode: Mode::Math,
            loc: None,
            text: "x".to_owned(),
        })
    }

    #[test]
    fn test_argument_normalization() {
        let group = ParseNode::OrdGroup(ParseNodeOrdGroup {
            mode: Mode::Math,
            loc: None,
            body: vec![x()],
            semisimple: false,
        });
        assert_eq!(normalize_argument(group.clone()), x());
        assert_eq!(ord_argument(group), vec![x()]);
        assert_eq!(ord_argument(x()), vec![x()]);
    }

    #[test]
    fn test_take_args_checks_count() {
        let [a, b] = take_args::<2>(vec![x(), x()], "\\frac").unwrap();
        assert_eq!(a, b);

        let err = take_args::<2>(vec![x()], "\\frac").unwrap_err();
        assert_eq!(err.to_string(), "KaTeX parse error: Expected group after '\\frac'");
    }

    #[test]
    fn test_only_plain_operators_act_as_symbols() {
        let mut spec = FunctionSpec::new(
            FunctionKind::Op {
                limits: true,
                symbol: true,
            },
            FunctionPropSpec::default(),
        );
        assert!(spec.acts_as_symbol());

        spec.kind = FunctionKind::Sqrt;
        assert!(!spec.acts_as_symbol());
    }
}
