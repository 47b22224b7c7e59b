use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, TokenSource},
        parser::binary::Precedence,
    },
};

/// A handler for a token that begins an expression.
///
/// Every handler in the prefix table shares this signature, including the
/// ones that can never fail and always return `Some`.
pub type PrefixParseFn<S> = fn(&mut Parser<S>) -> Option<Expression>;
/// A handler for a token that continues an expression. It receives the
/// already parsed left operand, which is `None` if that operand failed to
/// parse.
pub type InfixParseFn<S> = fn(&mut Parser<S>, Option<Expression>) -> Option<Expression>;

/// Builds a [`Program`] from a [`TokenSource`].
///
/// The parser keeps two tokens of lookahead: the token being parsed and the
/// one after it. Errors never stop the parse. They are collected in order and
/// can be read back with [`Parser::errors`] once parsing is done.
///
/// ## Example
/// ```
/// use maron::interpreter::{lexer::Lexer, parser::Parser};
///
/// let mut parser = Parser::new(Lexer::new("1 + 2 * 3"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "(1 + (2 * 3))");
/// ```
pub struct Parser<S> {
    source: S,
    /// The token being parsed.
    pub(in crate::interpreter::parser) cur_token: Token,
    /// The token after `cur_token`.
    pub(in crate::interpreter::parser) peek_token: Token,
    errors: Vec<ParseError>,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser and primes both lookahead tokens.
    pub fn new(mut source: S) -> Self {
        let cur_token = source.next_token();
        let peek_token = source.next_token();

        Self { source,
               cur_token,
               peek_token,
               errors: Vec::new() }
    }

    /// Parses statements until the end of input.
    ///
    /// Statements that fail to parse are left out of the program; parsing
    /// resumes at the following token.
    ///
    /// # Returns
    /// The program root. Check [`Parser::errors`] before trusting it.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        program
    }

    /// Returns every error recorded so far, in the order encountered.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Parses an expression whose operators bind tighter than `precedence`.
    ///
    /// The prefix function registered for the current token produces the
    /// initial left operand. While the next token is an infix operator that
    /// binds tighter than `precedence`, the parser advances onto it and lets
    /// its infix function extend the left operand. Operators of equal
    /// precedence are therefore left-associative.
    ///
    /// # Parameters
    /// - `precedence`: The binding strength of the operator to the left of
    ///   this expression, or [`Precedence::Lowest`].
    ///
    /// A prefix function that fails still lets the loop run: the absent
    /// operand is handed to the infix function, so the rest of the
    /// expression is consumed here instead of being parsed again as new
    /// statements.
    ///
    /// # Returns
    /// The parsed expression, or `None` if the current token cannot begin one
    /// or its operand failed to parse and no operator followed.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self,
                                                           precedence: Precedence)
                                                           -> Option<Expression> {
        let Some(prefix) = Self::prefix_parse_fn(self.cur_token.kind) else {
            self.no_prefix_parse_fn_error(self.cur_token.kind);
            return None;
        };
        let mut left = prefix(self);

        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = Self::infix_parse_fn(self.peek_token.kind) else {
                return left;
            };

            self.next_token();
            left = infix(self, left);
        }

        left
    }

    /// Shifts the lookahead window by one token.
    pub(in crate::interpreter::parser) fn next_token(&mut self) {
        let next = self.source.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub(in crate::interpreter::parser) fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    pub(in crate::interpreter::parser) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances if the next token is of the given kind.
    ///
    /// # Returns
    /// `true` if the parser advanced. Otherwise an
    /// [`ParseError::UnexpectedToken`] is recorded and `false` is returned.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    pub(in crate::interpreter::parser) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    pub(in crate::interpreter::parser) fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur_token.kind)
    }

    pub(in crate::interpreter::parser) fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.push_error(ParseError::UnexpectedToken { expected,
                                                      found: self.peek_token.kind,
                                                      line: self.peek_token.line });
    }

    fn no_prefix_parse_fn_error(&mut self, kind: TokenKind) {
        self.push_error(ParseError::NoPrefixParseFn { kind,
                                                      line: self.cur_token.line });
    }
}
