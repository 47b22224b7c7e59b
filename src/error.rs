/// Parsing errors.
///
/// Defines all error types that can be recorded while parsing a token stream:
/// expected-token mismatches, tokens that cannot begin an expression, and
/// integer literals that do not fit in 64 bits.
pub mod parse_error;

pub use parse_error::{ParseError, ParseErrors};
