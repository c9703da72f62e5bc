//! A TeX math parser in the manner of KaTeX
//!
//! Turns a TeX math expression into a tree of [`ParseNode`]s: the lexer
//! splits the source into tokens, the gullet ([`macro_expander`]) expands
//! macros, and the [`parser`] builds nodes from what is left, dispatching
//! commands through the registries in [`KatexContext`].
//!
//! [`ParseNode`]: parser::parse_node::ParseNode
#![warn(missing_docs)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::str_to_string)]
#![warn(clippy::non_ascii_literal)]
#![warn(clippy::pointer_format)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::absolute_paths)]
#![warn(clippy::panic)]
#![warn(clippy::expect_used)]
#![warn(clippy::unwrap_in_result)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::unused_trait_names)]
#![warn(clippy::get_unwrap)]
#![warn(clippy::impl_trait_in_params)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::unimplemented)]
#![warn(clippy::return_and_then)]
#![warn(clippy::needless_raw_strings)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::rc_buffer)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::map_with_unused_argument_over_ranges)]
#![warn(clippy::missing_asserts_for_indexing)]
#![warn(clippy::separated_literal_suffix)]
#![warn(clippy::ref_patterns)]
// Not sure
#![allow(clippy::indexing_slicing)]
#![allow(clippy::string_slice)]
#![allow(clippy::pub_use)]
// clippy exceptions
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::default_numeric_fallback)]
#![allow(clippy::single_call_fn)]

extern crate alloc;
pub mod context;
pub mod core;
pub mod define_environment;
pub mod define_function;
pub mod functions;
pub mod lexer;
pub mod macro_expander;
pub mod macros;
pub mod namespace;
/// Core parsing logic for TeX math expressions.
pub mod parser;
pub mod symbols;
pub mod types;
pub mod unicode;
pub mod units;

/// Registries of functions, environments and symbols shared by every parse.
///
/// Build it once with [`KatexContext::default`] and pass it by reference to
/// each call; it is never mutated by parsing.
///
/// ```rust
/// use katex_parser::KatexContext;
///
/// let ctx = KatexContext::default();
/// assert!(ctx.functions.contains_key(r"\frac"));
/// ```
pub use crate::context::KatexContext;

/// Parses an expression and returns its parse tree.
///
/// ```rust
/// use katex_parser::{KatexContext, Settings, parse};
///
/// fn main() -> Result<(), katex_parser::ParseError> {
///     let ctx = KatexContext::default();
///     let nodes = parse(&ctx, r"\sigma^2 + \sqrt{x}", &Settings::default())?;
///     assert_eq!(nodes.len(), 3);
///     Ok(())
/// }
/// ```
///
/// Errors carry the offending position:
/// ```rust
/// use katex_parser::{KatexContext, Settings, parse};
///
/// let ctx = KatexContext::default();
/// let err = parse(&ctx, r"\frac{a}{", &Settings::default()).unwrap_err();
/// assert_eq!(err.position, Some(9));
/// ```
pub use crate::core::parse;

/// Parses an expression and also returns the strict-mode warnings it raised.
pub use crate::core::{ParseOutput, parse_with_warnings};

pub use crate::types::{ParseError, Settings, StrictMode, StrictSetting};
