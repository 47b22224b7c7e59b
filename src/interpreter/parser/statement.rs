use crate::{
    ast::{Identifier, Statement},
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::{binary::Precedence, core::Parser},
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a single statement starting at the current token.
    ///
    /// A statement may be one of:
    /// - a `let` statement,
    /// - a `return` statement,
    /// - an expression used as a statement.
    ///
    /// # Returns
    /// The statement, or `None` if it was malformed. The error has already
    /// been recorded in that case.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => Some(self.parse_return_statement()),
            _ => Some(self.parse_expression_statement()),
        }
    }

    /// Parses `let <identifier> = ...;`.
    ///
    /// The bound expression is not parsed: its tokens are skipped up to the
    /// terminating `;`, and the statement's value stays empty.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier { token: self.cur_token.clone(),
                                value: self.cur_token.literal.clone(), };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.skip_to_semicolon();

        Some(Statement::Let { token,
                              name,
                              value: None })
    }

    /// Parses `return ...;`, skipping the returned expression like `let`.
    fn parse_return_statement(&mut self) -> Statement {
        let token = self.cur_token.clone();

        self.skip_to_semicolon();

        Statement::Return { token,
                            return_value: None }
    }

    /// Parses an expression statement with an optional trailing `;`.
    fn parse_expression_statement(&mut self) -> Statement {
        let token = self.cur_token.clone();
        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Statement::Expression { token, expression }
    }

    /// Advances until the current token is `;` or the end of input.
    fn skip_to_semicolon(&mut self) {
        while !self.cur_token_is(TokenKind::Semicolon) && !self.cur_token_is(TokenKind::Eof) {
            self.next_token();
        }
    }
}
