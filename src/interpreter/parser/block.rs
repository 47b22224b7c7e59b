use crate::{
    ast::BlockStatement,
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::Parser,
    },
};

impl<S: TokenSource> Parser<S> {
    /// Parses a block statement delimited by braces.
    ///
    /// The current token must be the opening `{`. Statements are parsed until
    /// the closing `}` or the end of input, whichever comes first; the parser
    /// is left on that token.
    ///
    /// Grammar: `block := "{" statement* "}"`
    pub(in crate::interpreter::parser) fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.cur_token.clone();
        let mut statements = Vec::new();

        self.next_token();

        while !self.cur_token_is(TokenKind::RBrace) && !self.cur_token_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { token, statements }
    }
}
