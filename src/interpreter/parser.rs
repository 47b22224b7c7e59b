// Parse functions share the `PrefixParseFn`/`InfixParseFn` signatures, so
// the ones that cannot fail still return `Option`.
#![allow(clippy::unnecessary_wraps)]

/// Parser state, token lookahead, and the precedence-climbing loop.
///
/// Contains the `Parser` type, its public entry points, and the helpers used
/// by every grammar rule to advance and check tokens.
pub mod core;

/// Prefix parse functions.
///
/// Handles tokens that begin an expression: identifiers, literals, prefix
/// operators, grouped expressions and `if` expressions.
pub mod unary;

/// Infix parse functions and operator precedence.
///
/// Handles tokens that continue an expression, and defines how tightly each
/// operator binds.
pub mod binary;

/// Block statement parsing.
pub mod block;

/// Statement parsing.
///
/// Dispatches between `let`, `return` and expression statements.
pub mod statement;

pub use core::Parser;
