use crate::interpreter::lexer::TokenKind;

/// Represents all errors that can be recorded during parsing.
///
/// The parser never stops at the first error. Each failure is appended to the
/// parser's error list and the offending production yields no node.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The next token was not of the kind the grammar requires.
    #[error("Error on line {line}: expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        /// The token kind the grammar requires.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression can begin with a token of this kind.
    #[error("Error on line {line}: no prefix parse function for {kind} found")]
    NoPrefixParseFn {
        /// The kind of the token that began the expression.
        kind: TokenKind,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal could not be converted to a 64-bit integer.
    #[error("Error on line {line}: could not parse {literal:?} as integer")]
    InvalidInteger {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixParseFn { line, .. }
            | Self::InvalidInteger { line, .. } => *line,
        }
    }
}

/// Every error recorded while parsing one source, in the order encountered.
///
/// Displays one message per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    /// Returns the recorded errors.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.0
    }
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }

            write!(f, "{error}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
