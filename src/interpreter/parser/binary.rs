use crate::{
    ast::Expression,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{InfixParseFn, Parser},
    },
};

/// Binding strength of an operator, from loosest to tightest.
///
/// The derived ordering follows declaration order, so `Lowest < Equals <
/// LessGreater < Sum < Product < Prefix < Call`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything that is not an infix operator.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `-x` and `!x`
    Prefix,
    /// `f(x)`
    Call,
}

impl Precedence {
    /// Returns the precedence of a token used as an infix operator.
    ///
    /// ## Example
    /// ```
    /// use maron::interpreter::{lexer::TokenKind, parser::binary::Precedence};
    ///
    /// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            _ => Self::Lowest,
        }
    }
}

impl<S: TokenSource> Parser<S> {
    /// Looks up the infix parse function for a token kind.
    ///
    /// `None` means the token cannot continue an expression, which ends the
    /// current expression without an error.
    pub(in crate::interpreter::parser) fn infix_parse_fn(kind: TokenKind)
                                                         -> Option<InfixParseFn<S>> {
        let parse_fn: InfixParseFn<S> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt => Self::parse_infix_expression,
            _ => return None,
        };

        Some(parse_fn)
    }

    /// Parses the right operand of a binary operator.
    ///
    /// The current token is the operator. The right operand is parsed with the
    /// operator's own precedence, so an operator of the same strength further
    /// right is left for the caller's loop and groups to the left.
    ///
    /// Grammar: `infix := expression operator expression`
    fn parse_infix_expression(&mut self, left: Option<Expression>) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence).map(Box::new);

        Some(Expression::Infix { token,
                                 left: left.map(Box::new),
                                 operator,
                                 right })
    }
}
