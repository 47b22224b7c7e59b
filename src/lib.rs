//! # maron
//!
//! maron is a small C-like scripting language with a tree-walking
//! interpreter written in Rust. Source text is tokenized, parsed with a
//! precedence-climbing (Pratt) parser into a syntax tree, and evaluated
//! directly from that tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseErrors,
    interpreter::{evaluator::core::eval, lexer::Lexer, parser::Parser, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expression` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Keeps the originating token of every node for diagnostics.
/// - Renders every node back to a stable, fully parenthesized text form.
pub mod ast;
/// Provides error types for parsing.
///
/// This module defines the errors recorded while parsing code. Each error
/// carries the line it occurred on and a human-readable message.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// The interactive read loop.
///
/// Reads source one line at a time and either prints its tokens or evaluates
/// it and prints the result.
pub mod repl;
/// General utilities.
///
/// Currently holds the integer literal conversion used by the parser.
pub mod util;

/// Parses and evaluates a whole source string.
///
/// # Errors
/// Returns every parse error, in order, if the source does not parse
/// cleanly. Nothing is evaluated in that case.
///
/// # Returns
/// The value of the last statement, or `None` if it has no runtime value.
///
/// # Examples
/// ```
/// use maron::{interpreter::value::core::Value, run};
///
/// assert_eq!(run("1; 2; 3").unwrap(), Some(Value::Integer(3)));
/// assert_eq!(run("false").unwrap(), Some(Value::Boolean(false)));
///
/// // `=` is missing.
/// assert!(run("let x 5;").is_err());
/// ```
pub fn run(source: &str) -> Result<Option<Value>, ParseErrors> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(ParseErrors(parser.errors().to_vec()));
    }

    Ok(eval(&program))
}
