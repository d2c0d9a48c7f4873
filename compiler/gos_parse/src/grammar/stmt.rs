//! Statement parsing.
//!
//! Convention shared with expression parsing: a production starts with the
//! cursor on its first token and returns with the cursor on its last one.

use gos_ir::{BlockStatement, Identifier, Stmt, Token, TokenKind};

use super::Precedence;
use crate::{ParseError, Parser};

impl<I: Iterator<Item = Token>> Parser<I> {
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr> [;]`
    fn parse_let_statement(&mut self) -> Result<Stmt, ParseError> {
        let location = self.cursor.current().location.clone();

        self.cursor.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(
            self.cursor.current().literal.clone(),
            self.cursor.current().location.clone(),
        );

        self.cursor.expect_peek(TokenKind::Assign)?;
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Stmt::Let {
            name,
            value,
            location,
        })
    }

    /// `return <expr> [;]`
    fn parse_return_statement(&mut self) -> Result<Stmt, ParseError> {
        let location = self.cursor.current().location.clone();

        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Stmt::Return { value, location })
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Ok(Stmt::Expression(expr))
    }

    /// `{ <stmt>* }`, entered on `{` and left on `}`.
    pub(crate) fn parse_block_statement(&mut self) -> Result<BlockStatement, ParseError> {
        let location = self.cursor.current().location.clone();
        let mut statements = Vec::new();

        self.open_blocks += 1;
        self.cursor.advance();
        while !self.cursor.check(TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(ParseError::unexpected(
                    TokenKind::RBrace,
                    self.cursor.current(),
                ));
            }
            statements.push(self.parse_statement()?);
            self.cursor.advance();
        }
        self.open_blocks = self.open_blocks.saturating_sub(1);

        Ok(BlockStatement {
            statements,
            location,
        })
    }

    fn skip_optional_semicolon(&mut self) {
        if self.cursor.check_peek(TokenKind::Semicolon) {
            self.cursor.advance();
        }
    }
}
