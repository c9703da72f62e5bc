//! Environment registration types
//!
//! `\begin{name}` looks `name` up in [`KatexContext::environments`]. The entry
//! says how many arguments follow the `\begin{name}` and which [`EnvKind`]
//! builds the node; [`dispatch`] runs it.
//!
//! [`KatexContext::environments`]: crate::KatexContext::environments

mod array;

use crate::parser::Parser;
use crate::parser::parse_node::ParseNode;
use crate::types::{ArgType, Mode, ParseError};

pub use array::{ArrayConfig, define_array, parse_array};

/// Which handler builds the node for an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvKind {
    /// `array` and `darray`, with a column specification.
    Array,
    /// `matrix` and its delimited variants.
    Matrix,
    /// `smallmatrix`.
    SmallMatrix,
    /// `cases` and `dcases`.
    Cases,
    /// `aligned`.
    Aligned,
    /// `gathered`.
    Gathered,
}

/// What a handler gets to see besides its arguments.
pub struct EnvContext<'a, 'b> {
    /// Mode at the `\begin`.
    pub mode: Mode,
    /// The environment name, without braces.
    pub env_name: String,
    /// The parser, positioned after the environment's arguments.
    pub parser: &'a mut Parser<'b>,
}

/// How an environment's arguments are parsed.
#[derive(Debug, Clone, Default)]
pub struct EnvProps {
    /// Required arguments after `\begin{name}`.
    pub num_args: usize,
    /// Type of each argument, as for functions.
    pub arg_types: Option<Vec<ArgType>>,
    /// Bracketed arguments read before the required ones.
    pub num_optional_args: usize,
    /// Whether the environment may start in text mode. Not enforced.
    pub allowed_in_text: bool,
}

/// A registration: one kind and set of properties under several names.
pub struct EnvDefSpec<'b> {
    pub kind: EnvKind,
    pub names: &'b [&'b str],
    pub props: EnvProps,
}

/// An environment as stored in the registry.
#[derive(Debug, Clone)]
pub struct EnvSpec {
    pub kind: EnvKind,
    pub num_args: usize,
    pub arg_types: Option<Vec<ArgType>>,
    pub num_optional_args: usize,
    pub allowed_in_text: bool,
}

impl EnvSpec {
    /// Combines a kind with its properties.
    #[must_use]
    pub fn new(kind: EnvKind, props: EnvProps) -> Self {
        Self {
            kind,
            num_args: props.num_args,
            arg_types: props.arg_types,
            num_optional_args: props.num_optional_args,
            allowed_in_text: props.allowed_in_text,
        }
    }
}

/// Runs the handler for `kind`, which parses the environment body up to (but
/// not including) its `\end`.
pub fn dispatch(
    kind: EnvKind,
    context: EnvContext<'_, '_>,
    args: Vec<ParseNode>,
    _opt_args: Vec<Option<ParseNode>>,
) -> Result<ParseNode, ParseError> {
    match kind {
        EnvKind::Array => array::array(context, args),
        EnvKind::Matrix => array::matrix(context),
        EnvKind::SmallMatrix => array::small_matrix(context),
        EnvKind::Cases => array::cases(context),
        EnvKind::Aligned => array::aligned(context),
        EnvKind::Gathered => array::gathered(context),
    }
}
