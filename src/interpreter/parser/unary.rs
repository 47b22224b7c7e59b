use crate::{
    ast::{Expression, Identifier},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::{binary::Precedence, core::{Parser, PrefixParseFn}},
    },
    util::num::parse_integer_literal,
};

impl<S: TokenSource> Parser<S> {
    /// Looks up the prefix parse function for a token kind.
    ///
    /// Grammar (simplified):
    /// ```text
    ///     prefix := identifier
    ///             | integer
    ///             | "true" | "false"
    ///             | ("!" | "-") expression
    ///             | "(" expression ")"
    ///             | if_expression
    /// ```
    pub(in crate::interpreter::parser) fn prefix_parse_fn(kind: TokenKind)
                                                          -> Option<PrefixParseFn<S>> {
        let parse_fn: PrefixParseFn<S> = match kind {
            TokenKind::Ident => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::If => Self::parse_if_expression,
            _ => return None,
        };

        Some(parse_fn)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier { token: self.cur_token.clone(),
                                                 value: self.cur_token.literal.clone(), }))
    }

    /// Converts the current `INT` token into an integer literal.
    ///
    /// Records [`ParseError::InvalidInteger`] and yields `None` when the text
    /// does not fit in an `i64`.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        match parse_integer_literal(&token.literal) {
            Some(value) => Some(Expression::IntegerLiteral { token, value }),
            None => {
                self.push_error(ParseError::InvalidInteger { literal: token.literal,
                                                             line:    token.line, });
                None
            },
        }
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean { token: self.cur_token.clone(),
                                   value: self.cur_token_is(TokenKind::True), })
    }

    /// Parses `!x` or `-x`.
    ///
    /// The operand is parsed at [`Precedence::Prefix`], so `-a * b` groups as
    /// `((-a) * b)`.
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix).map(Box::new);

        Some(Expression::Prefix { token,
                                  operator,
                                  right })
    }

    /// Parses a parenthesized expression. The parentheses leave no node of
    /// their own behind.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest);
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        expression
    }

    /// Parses an `if` expression with an optional `else` branch.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) { <statements> }
    ///     if (<condition>) { <statements> } else { <statements> }
    /// ```
    ///
    /// Any missing delimiter records an error and discards the whole
    /// expression.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest).map(Box::new);

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();

            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }

            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If { token,
                              condition,
                              consequence,
                              alternative })
    }
}
