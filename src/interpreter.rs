/// The evaluator module turns syntax trees into runtime values.
///
/// The evaluator traverses the AST depth-first and dispatches on each node's
/// variant. It is a pure function of the tree: no state survives between
/// calls.
///
/// # Responsibilities
/// - Evaluates programs with value-of-last-statement semantics.
/// - Produces integer and boolean values from literals.
/// - Yields no value for constructs that have no runtime meaning yet.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a meaningful language element such as an
/// integer, identifier, operator, delimiter or keyword. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, literal text
///   and source line.
/// - Resolves keywords against identifiers.
/// - Passes unrecognized characters on as `ILLEGAL` tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a precedence-climbing (Pratt) parser: each token kind maps to
/// a prefix handler, an infix handler, or both, and operator precedence
/// decides how far an expression extends.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Records every syntax error without stopping the parse.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integers, booleans and null.
/// - Reports each value's type tag and inspect string.
pub mod value;
