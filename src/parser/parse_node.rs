//! Parse tree node definitions
//!
//! Every node records the mode it was parsed in and, when known, the span of
//! source it covers. Children are owned, so a tree is a plain value with no
//! ties to the parser that built it.

use strum::{AsRefStr, Display, EnumDiscriminants};
use thiserror::Error;

use crate::symbols::Atom;
use crate::types::{Mode, SourceLocation, StyleVariant, Token};
use crate::units::MeasurementOwned;

/// Column spacing preset of an array environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColSeparationType {
    /// `aligned`: alternating right and left columns.
    Align,
    /// `gathered`: one centered column.
    Gather,
    /// `smallmatrix`: tight columns.
    Small,
}

/// One entry of an array column specification.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum AlignSpec {
    /// A vertical rule between columns, `|` or `:`.
    Separator {
        /// The rule character.
        separator: String,
    },
    /// A content column.
    Align {
        /// `l`, `c` or `r`.
        align: String,
    },
}

/// A node of the parse tree.
///
/// [`NodeType`] names each variant the way the tree is usually printed, e.g.
/// `"supsub"` or `"color-token"`.
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(vis(pub))]
#[strum_discriminants(doc = "The kind of a parse node, without its payload")]
#[strum_discriminants(derive(Display, Hash, AsRefStr), strum(serialize_all = "lowercase"))]
#[strum_discriminants(name(NodeType))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum AnyParseNode {
    // Leaves
    /// A math-mode letter or Greek letter.
    MathOrd(ParseNodeMathOrd),
    /// Digits, text characters and other ordinary symbols.
    TextOrd(ParseNodeTextOrd),
    /// A symbol with an atom family: bin, rel, open, close, punct or inner.
    Atom(ParseNodeAtom),
    /// Explicit spaces such as `\,` or `\quad`.
    Spacing(ParseNodeSpacing),
    /// An accent character used as a symbol.
    #[strum_discriminants(strum(serialize = "accent-token"))]
    #[cfg_attr(feature = "serde", serde(rename = "accent-token"))]
    AccentToken(ParseNodeAccentToken),
    /// A large operator character used as a symbol.
    #[strum_discriminants(strum(serialize = "op-token"))]
    #[cfg_attr(feature = "serde", serde(rename = "op-token"))]
    OpToken(ParseNodeOpToken),

    // Groups and scripts
    /// A braced group.
    OrdGroup(ParseNodeOrdGroup),
    /// A base with superscript and/or subscript.
    SupSub(ParseNodeSupSub),
    /// Fractions and binomials.
    Genfrac(Box<ParseNodeGenfrac>),
    /// An infix operator awaiting rewriting, e.g. `\over`.
    Infix(ParseNodeInfix),
    /// Square roots, with an optional index.
    Sqrt(Box<ParseNodeSqrt>),

    // Color, size and style
    /// Colored content.
    Color(ParseNodeColor),
    /// A color argument.
    #[strum_discriminants(strum(serialize = "color-token"))]
    #[cfg_attr(feature = "serde", serde(rename = "color-token"))]
    ColorToken(ParseNodeColorToken),
    /// A dimension argument.
    Size(ParseNodeSize),
    /// `\displaystyle` and friends.
    Styling(ParseNodeStyling),
    /// `\tiny` through `\Huge`.
    Sizing(ParseNodeSizing),
    /// Math fonts such as `\mathbf`.
    Font(ParseNodeFont),
    /// Text inside math, e.g. `\text{...}`.
    Text(ParseNodeText),

    // Delimiters
    /// `\left ... \right`.
    LeftRight(ParseNodeLeftRight),
    /// The closing half of `\left ... \right`.
    #[strum_discriminants(strum(serialize = "leftright-right"))]
    #[cfg_attr(feature = "serde", serde(rename = "leftright-right"))]
    LeftRightRight(ParseNodeLeftRightRight),
    /// `\middle` inside `\left ... \right`.
    Middle(ParseNodeMiddle),
    /// `\big` and friends.
    Delimsizing(ParseNodeDelimsizing),

    // Operators and classes
    /// Large operators and operator names.
    Op(ParseNodeOp),
    /// `\mathrel` and other explicit atom classes.
    Mclass(ParseNodeMclass),

    // Decorations
    /// Accents over a base.
    Accent(Box<ParseNodeAccent>),
    /// `\overline`.
    Overline(ParseNodeOverline),
    /// `\underline`.
    Underline(ParseNodeUnderline),
    /// `\phantom`.
    Phantom(ParseNodePhantom),
    /// `\hphantom`.
    Hphantom(ParseNodeHphantom),
    /// `\vphantom`.
    Vphantom(ParseNodeVphantom),
    /// `\rule`.
    Rule(ParseNodeRule),
    /// `\kern` and friends.
    Kern(ParseNodeKern),
    /// `\raisebox`.
    Raisebox(ParseNodeRaisebox),
    /// `\mathllap`, `\mathrlap`, `\mathclap`.
    Lap(ParseNodeLap),
    /// `\fbox`, `\cancel`, `\colorbox` and friends.
    Enclose(ParseNodeEnclose),
    /// Extensible arrows such as `\xrightarrow`.
    #[strum_discriminants(strum(serialize = "xArrow"))]
    #[cfg_attr(feature = "serde", serde(rename = "xArrow"))]
    XArrow(ParseNodeXArrow),

    // Environments
    /// A row break, `\\` or `\cr`.
    Cr(ParseNodeCr),
    /// `\begin{name}` or `\end{name}` before it is matched.
    Environment(Box<ParseNodeEnvironment>),
    /// Rows and columns of an array-like environment.
    Array(ParseNodeArray),

    // Bookkeeping
    /// A definition or other command that leaves nothing in the output.
    Internal(ParseNodeInternal),
    /// A raw string argument.
    Raw(ParseNodeRaw),
    /// Input that could not be parsed, kept when errors are not thrown.
    Error(ParseNodeErrorLeaf),
}

/// Applies `$body` to the payload of whichever variant `$node` is.
macro_rules! with_payload {
    ($node:expr, $inner:ident => $body:expr) => {
        match $node {
            AnyParseNode::MathOrd($inner) => $body,
            AnyParseNode::TextOrd($inner) => $body,
            AnyParseNode::Atom($inner) => $body,
            AnyParseNode::Spacing($inner) => $body,
            AnyParseNode::AccentToken($inner) => $body,
            AnyParseNode::OpToken($inner) => $body,
            AnyParseNode::OrdGroup($inner) => $body,
            AnyParseNode::SupSub($inner) => $body,
            AnyParseNode::Genfrac($inner) => $body,
            AnyParseNode::Infix($inner) => $body,
            AnyParseNode::Sqrt($inner) => $body,
            AnyParseNode::Color($inner) => $body,
            AnyParseNode::ColorToken($inner) => $body,
            AnyParseNode::Size($inner) => $body,
            AnyParseNode::Styling($inner) => $body,
            AnyParseNode::Sizing($inner) => $body,
            AnyParseNode::Font($inner) => $body,
            AnyParseNode::Text($inner) => $body,
            AnyParseNode::LeftRight($inner) => $body,
            AnyParseNode::LeftRightRight($inner) => $body,
            AnyParseNode::Middle($inner) => $body,
            AnyParseNode::Delimsizing($inner) => $body,
            AnyParseNode::Op($inner) => $body,
            AnyParseNode::Mclass($inner) => $body,
            AnyParseNode::Accent($inner) => $body,
            AnyParseNode::Overline($inner) => $body,
            AnyParseNode::Underline($inner) => $body,
            AnyParseNode::Phantom($inner) => $body,
            AnyParseNode::Hphantom($inner) => $body,
            AnyParseNode::Vphantom($inner) => $body,
            AnyParseNode::Rule($inner) => $body,
            AnyParseNode::Kern($inner) => $body,
            AnyParseNode::Raisebox($inner) => $body,
            AnyParseNode::Lap($inner) => $body,
            AnyParseNode::Enclose($inner) => $body,
            AnyParseNode::XArrow($inner) => $body,
            AnyParseNode::Cr($inner) => $body,
            AnyParseNode::Environment($inner) => $body,
            AnyParseNode::Array($inner) => $body,
            AnyParseNode::Internal($inner) => $body,
            AnyParseNode::Raw($inner) => $body,
            AnyParseNode::Error($inner) => $body,
        }
    };
}

impl AnyParseNode {
    /// The mode the node was parsed in.
    #[must_use]
    pub fn mode(&self) -> Mode {
        with_payload!(self, node => node.mode)
    }

    /// The source span the node covers.
    #[must_use]
    pub fn location(&self) -> Option<&SourceLocation> {
        with_payload!(self, node => node.loc.as_ref())
    }

    /// Mutable access to the span, e.g. to drop positions before comparing
    /// trees.
    pub fn location_mut(&mut self) -> &mut Option<SourceLocation> {
        with_payload!(self, node => &mut node.loc)
    }

    /// The symbol text of a leaf node.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Atom(node) => Some(&node.text),
            Self::AccentToken(node) => Some(&node.text),
            Self::MathOrd(node) => Some(&node.text),
            Self::OpToken(node) => Some(&node.text),
            Self::Spacing(node) => Some(&node.text),
            Self::TextOrd(node) => Some(&node.text),
            _ => None,
        }
    }

    /// Direct children, in source order.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        fn boxed(node: &Option<Box<AnyParseNode>>) -> Option<&AnyParseNode> {
            node.as_deref()
        }
        match self {
            Self::OrdGroup(node) => node.body.iter().collect(),
            Self::Color(node) => node.body.iter().collect(),
            Self::Styling(node) => node.body.iter().collect(),
            Self::Sizing(node) => node.body.iter().collect(),
            Self::Text(node) => node.body.iter().collect(),
            Self::LeftRight(node) => node.body.iter().collect(),
            Self::Mclass(node) => node.body.iter().collect(),
            Self::Phantom(node) => node.body.iter().collect(),
            Self::Op(node) => node.body.iter().flatten().collect(),
            Self::Array(node) => node.body.iter().flatten().collect(),
            Self::SupSub(node) => [boxed(&node.base), boxed(&node.sup), boxed(&node.sub)]
                .into_iter()
                .flatten()
                .collect(),
            Self::Genfrac(node) => vec![&node.numer, &node.denom],
            Self::Sqrt(node) => node.index.iter().chain([&node.body]).collect(),
            Self::Font(node) => vec![&*node.body],
            Self::Accent(node) => vec![&node.base],
            Self::Overline(node) => vec![&*node.body],
            Self::Underline(node) => vec![&*node.body],
            Self::Hphantom(node) => vec![&*node.body],
            Self::Vphantom(node) => vec![&*node.body],
            Self::Raisebox(node) => vec![&*node.body],
            Self::Lap(node) => vec![&*node.body],
            Self::Enclose(node) => vec![&*node.body],
            Self::XArrow(node) => [Some(&*node.body), boxed(&node.below)]
                .into_iter()
                .flatten()
                .collect(),
            Self::Environment(node) => vec![&node.name_group],
            _ => Vec::new(),
        }
    }

    /// Direct children, mutably.
    pub fn children_mut(&mut self) -> Vec<&mut Self> {
        fn boxed(node: &mut Option<Box<AnyParseNode>>) -> Option<&mut AnyParseNode> {
            node.as_deref_mut()
        }
        match self {
            Self::OrdGroup(node) => node.body.iter_mut().collect(),
            Self::Color(node) => node.body.iter_mut().collect(),
            Self::Styling(node) => node.body.iter_mut().collect(),
            Self::Sizing(node) => node.body.iter_mut().collect(),
            Self::Text(node) => node.body.iter_mut().collect(),
            Self::LeftRight(node) => node.body.iter_mut().collect(),
            Self::Mclass(node) => node.body.iter_mut().collect(),
            Self::Phantom(node) => node.body.iter_mut().collect(),
            Self::Op(node) => node.body.iter_mut().flatten().collect(),
            Self::Array(node) => node.body.iter_mut().flatten().collect(),
            Self::SupSub(node) => [
                boxed(&mut node.base),
                boxed(&mut node.sup),
                boxed(&mut node.sub),
            ]
            .into_iter()
            .flatten()
            .collect(),
            Self::Genfrac(node) => {
                let ParseNodeGenfrac { numer, denom, .. } = &mut **node;
                vec![numer, denom]
            }
            Self::Sqrt(node) => {
                let ParseNodeSqrt { body, index, .. } = &mut **node;
                index.iter_mut().chain([body]).collect()
            }
            Self::Font(node) => vec![&mut *node.body],
            Self::Accent(node) => vec![&mut node.base],
            Self::Overline(node) => vec![&mut *node.body],
            Self::Underline(node) => vec![&mut *node.body],
            Self::Hphantom(node) => vec![&mut *node.body],
            Self::Vphantom(node) => vec![&mut *node.body],
            Self::Raisebox(node) => vec![&mut *node.body],
            Self::Lap(node) => vec![&mut *node.body],
            Self::Enclose(node) => vec![&mut *node.body],
            Self::XArrow(node) => [Some(&mut *node.body), boxed(&mut node.below)]
                .into_iter()
                .flatten()
                .collect(),
            Self::Environment(node) => vec![&mut node.name_group],
            _ => Vec::new(),
        }
    }

    /// Pulls the single element out of one-element ordgroups and colors.
    #[must_use]
    pub fn to_base_elem(&self) -> &Self {
        match self {
            Self::OrdGroup(ord) if ord.body.len() == 1 => ord.body[0].to_base_elem(),
            Self::Color(color) if color.body.len() == 1 => color.body[0].to_base_elem(),
            Self::Font(font) => font.body.to_base_elem(),
            _ => self,
        }
    }

    /// Wraps `body` in an ordgroup spanning its first to last node.
    #[must_use]
    pub fn ord_group(mode: Mode, body: Vec<Self>) -> Self {
        let loc = SourceLocation::range(
            body.first().and_then(Self::location).cloned(),
            body.last().and_then(Self::location).cloned(),
        );
        Self::OrdGroup(ParseNodeOrdGroup {
            mode,
            loc,
            body,
            semisimple: false,
        })
    }
}

/// A math-mode letter or Greek letter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeMathOrd {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    /// Source text, e.g. `x` or `\alpha`.
    pub text: String,
}

/// An ordinary symbol that is not a math letter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeTextOrd {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    /// Source text; ligatures such as `--` hold several characters.
    pub text: String,
}

/// A symbol with an atom family.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeAtom {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    /// TeX atom family.
    pub family: Atom,
    pub text: String,
}

/// An explicit space.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeSpacing {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub text: String,
}

/// An accent character used as a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeAccentToken {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub text: String,
}

/// A large operator character used as a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeOpToken {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub text: String,
}

/// A braced group, or the expansion of `\begingroup ... \endgroup`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeOrdGroup {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub body: Vec<AnyParseNode>,
    /// Set for groups that only scope definitions and do not box their
    /// content.
    pub semisimple: bool,
}

/// A base with attached scripts. `base` is `None` for a script at the start
/// of a group, as in `{^2}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeSupSub {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub base: Option<Box<AnyParseNode>>,
    pub sup: Option<Box<AnyParseNode>>,
    pub sub: Option<Box<AnyParseNode>>,
}

/// Fractions and binomials.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeGenfrac {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub numer: AnyParseNode,
    pub denom: AnyParseNode,
    /// Whether a fraction bar is drawn.
    pub has_bar_line: bool,
    /// Delimiter before the fraction, e.g. `(` for binomials.
    pub left_delim: Option<String>,
    /// Delimiter after the fraction.
    pub right_delim: Option<String>,
    /// Forced style (`\dfrac`, `\tfrac`); `None` follows the context.
    pub size: Option<StyleVariant>,
}

/// An infix operator such as `\over`, before the surrounding expression is
/// rewritten into a call of `replace_with`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeInfix {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    /// The function that replaces the whole expression, e.g. `\frac`.
    pub replace_with: String,
    /// The operator token, used for error positions.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub token: Option<Token>,
}

/// `\sqrt[index]{body}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeSqrt {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub body: AnyParseNode,
    pub index: Option<AnyParseNode>,
}

/// Colored content, from `\textcolor` or the implicit group of `\color`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeColor {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    /// The color as written: a name or a `#` hex code.
    pub color: String,
    pub body: Vec<AnyParseNode>,
}

/// A parsed color argument.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeColorToken {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub color: String,
}

/// A parsed dimension argument.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeSize {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub value: MeasurementOwned,
    /// The argument was empty and defaulted to `0pt`.
    pub is_blank: bool,
}

/// Content in an explicit math style.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeStyling {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub style: StyleVariant,
    pub body: Vec<AnyParseNode>,
}

/// Content at an explicit font size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeSizing {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    /// 1 for `\tiny` up to 11 for `\Huge`.
    pub size: usize,
    pub body: Vec<AnyParseNode>,
}

/// Content in a math font.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeFont {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    /// Font name without the backslash, e.g. `mathbf`.
    pub font: String,
    pub body: Box<AnyParseNode>,
}

/// Text-mode content.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeText {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub body: Vec<AnyParseNode>,
    /// Text font command, e.g. `\textbf`; `None` for plain `\text`.
    pub font: Option<String>,
}

/// `\left ... \right`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeLeftRight {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub body: Vec<AnyParseNode>,
    pub left: String,
    pub right: String,
}

/// The closing `\right` delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeLeftRightRight {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub delim: String,
}

/// `\middle` delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeMiddle {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub delim: String,
}

/// A delimiter at a fixed size.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeDelimsizing {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    /// 1 for `\big` up to 4 for `\Bigg`.
    pub size: u8,
    /// `mopen`, `mclose`, `mrel` or `mord`.
    pub mclass: String,
    pub delim: String,
}

/// A large operator or an operator name.
///
/// Symbol operators such as `\sum` and named ones such as `\lim` have a
/// `name`; `\mathop{...}` has a `body` instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeOp {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    /// Scripts go above and below in display style.
    pub limits: bool,
    /// Set by `\limits`/`\nolimits`: the choice overrides the style.
    pub always_handle_sup_sub: bool,
    /// The operator grows in display style.
    pub symbol: bool,
    pub name: Option<String>,
    pub body: Option<Vec<AnyParseNode>>,
}

/// Content forced into an atom class, e.g. `\mathrel{...}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeMclass {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    /// `mord`, `mbin`, `mrel`, ...
    pub mclass: String,
    pub body: Vec<AnyParseNode>,
}

/// An accent over a base.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeAccent {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    /// The accent command, e.g. `\hat`.
    pub label: String,
    /// Wide accents stretch over the whole base.
    pub is_stretchy: bool,
    /// Shifted to follow the slant of italic bases.
    pub is_shifty: bool,
    pub base: AnyParseNode,
}

/// `\overline{body}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeOverline {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub body: Box<AnyParseNode>,
}

/// `\underline{body}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeUnderline {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub body: Box<AnyParseNode>,
}

/// `\phantom{body}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodePhantom {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub body: Vec<AnyParseNode>,
}

/// `\hphantom{body}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeHphantom {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub body: Box<AnyParseNode>,
}

/// `\vphantom{body}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeVphantom {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub body: Box<AnyParseNode>,
}

/// `\rule[shift]{width}{height}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeRule {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub shift: Option<MeasurementOwned>,
    pub width: MeasurementOwned,
    pub height: MeasurementOwned,
}

/// `\kern{dimension}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeKern {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub dimension: MeasurementOwned,
}

/// `\raisebox{dy}{body}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeRaisebox {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub dy: MeasurementOwned,
    pub body: Box<AnyParseNode>,
}

/// Which side a lap overlaps into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LapAlignment {
    Llap,
    Rlap,
    Clap,
}

/// Zero-width content overlapping its neighbours.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeLap {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub alignment: LapAlignment,
    pub body: Box<AnyParseNode>,
}

/// Boxes and strike-throughs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeEnclose {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    /// The command, e.g. `\fbox` or `\cancel`.
    pub label: String,
    pub background_color: Option<String>,
    pub border_color: Option<String>,
    pub body: Box<AnyParseNode>,
}

/// An extensible arrow with a label above and optionally below.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeXArrow {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub label: String,
    pub body: Box<AnyParseNode>,
    pub below: Option<Box<AnyParseNode>>,
}

/// A row break with an optional extra gap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeCr {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub size: Option<MeasurementOwned>,
}

/// `\begin{name}` or `\end{name}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeEnvironment {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub name: String,
    /// The raw name argument, for error positions.
    pub name_group: AnyParseNode,
}

/// Rows and columns of an array-like environment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeArray {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub col_separation_type: Option<ColSeparationType>,
    /// Pad the outer edges with column spacing.
    pub hskip_before_and_after: bool,
    /// Add extra space between rows, as `aligned` does.
    pub add_jot: bool,
    /// Column specification, when the environment has one.
    pub cols: Option<Vec<AlignSpec>>,
    /// Row height multiplier.
    pub arraystretch: f64,
    /// Cells, row by row.
    pub body: Vec<Vec<AnyParseNode>>,
    /// Extra gap requested after each row with `\\[size]`.
    pub row_gaps: Vec<Option<MeasurementOwned>>,
}

/// A command that leaves nothing in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeInternal {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
}

/// A raw string argument.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeRaw {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    pub string: String,
}

/// Input that failed to parse, kept in the tree when errors are not thrown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseNodeErrorLeaf {
    pub mode: Mode,
    pub loc: Option<SourceLocation>,
    /// The offending source: a command name or the whole expression.
    pub text: String,
    /// The error message.
    pub message: String,
    /// Color to show the text in.
    pub color: String,
}

/// Shorter name for [`AnyParseNode`].
pub type ParseNode = AnyParseNode;

/// Failed node type checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseNodeError {
    #[error("Expected node of type {expected}, but got {actual}")]
    TypeMismatch { expected: NodeType, actual: String },
    #[error("Expected node of symbol group type, but got {actual}")]
    NotSymbolNode { actual: String },
}

/// Checks that `node` exists and has type `expected_type`.
pub fn assert_node_type(
    node: Option<&AnyParseNode>,
    expected_type: NodeType,
) -> Result<NodeType, ParseNodeError> {
    let node = node.ok_or_else(|| ParseNodeError::TypeMismatch {
        expected: expected_type,
        actual: "null".to_owned(),
    })?;
    let actual_type = NodeType::from(node);
    if actual_type == expected_type {
        Ok(actual_type)
    } else {
        Err(ParseNodeError::TypeMismatch {
            expected: expected_type,
            actual: actual_type.to_string(),
        })
    }
}

/// The node type of a symbol leaf, or `None` for anything else.
#[must_use]
pub fn check_symbol_node_type(node: Option<&AnyParseNode>) -> Option<NodeType> {
    let node = node?;
    node.text().map(|_| NodeType::from(node))
}

/// Like [`check_symbol_node_type`], failing for non-symbols.
pub fn assert_symbol_node_type(node: Option<&AnyParseNode>) -> Result<NodeType, ParseNodeError> {
    check_symbol_node_type(node).ok_or_else(|| ParseNodeError::NotSymbolNode {
        actual: node.map_or_else(|| "null".to_owned(), |n| NodeType::from(n).to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plus() -> AnyParseNode {
        AnyParseNode::Atom(ParseNodeAtom {
            family: Atom::Bin,
            mode: Mode::Math,
            loc: None,
            text: "+".to_owned(),
        })
    }

    #[test]
    fn test_node_type_names() {
        assert_eq!(NodeType::SupSub.to_string(), "supsub");
        assert_eq!(NodeType::OrdGroup.as_ref(), "ordgroup");
        assert_eq!(NodeType::ColorToken.to_string(), "color-token");
        assert_eq!(NodeType::LeftRightRight.to_string(), "leftright-right");
        assert_eq!(NodeType::XArrow.to_string(), "xArrow");
        assert_eq!(NodeType::from(&plus()), NodeType::Atom);
    }

    #[test]
    fn test_assert_node_type() {
        assert_eq!(assert_node_type(Some(&plus()), NodeType::Atom), Ok(NodeType::Atom));
        assert_eq!(
            assert_node_type(Some(&plus()), NodeType::MathOrd),
            Err(ParseNodeError::TypeMismatch {
                expected: NodeType::MathOrd,
                actual: "atom".to_owned()
            })
        );
        assert_eq!(
            assert_node_type(None, NodeType::Atom),
            Err(ParseNodeError::TypeMismatch {
                expected: NodeType::Atom,
                actual: "null".to_owned()
            })
        );
    }

    #[test]
    fn test_symbol_node_type() {
        assert_eq!(check_symbol_node_type(Some(&plus())), Some(NodeType::Atom));

        let group = AnyParseNode::ord_group(Mode::Math, vec![plus()]);
        assert_eq!(check_symbol_node_type(Some(&group)), None);
        assert_eq!(
            assert_symbol_node_type(Some(&group)),
            Err(ParseNodeError::NotSymbolNode {
                actual: "ordgroup".to_owned()
            })
        );
        assert_eq!(group.to_base_elem(), &plus());
    }

    #[test]
    fn test_children_and_locations() {
        let input: alloc::sync::Arc<str> = alloc::sync::Arc::from("x+y");
        let mut node = AnyParseNode::SupSub(ParseNodeSupSub {
            mode: Mode::Math,
            loc: Some(SourceLocation::new(input, 0, 3)),
            base: Some(Box::new(plus())),
            sup: None,
            sub: Some(Box::new(plus())),
        });
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.location().map(SourceLocation::text), Some("x+y"));

        *node.location_mut() = None;
        for child in node.children_mut() {
            assert!(child.location_mut().is_none());
        }
        assert!(node.location().is_none());
        assert_eq!(node.mode(), Mode::Math);
    }
}
