//! Expression parsing (precedence climbing).
//!
//! Each token kind has at most one prefix rule (selected in
//! `parse_prefix`) and at most one infix rule (selected in `parse_infix`,
//! with its binding power from [`Precedence::of`]). `parse_expression`
//! keeps folding infix operators into the left operand while the next
//! operator binds tighter than the floor it was called with. Passing the
//! operator's own level as the floor for its right operand makes every
//! binary operator left-associative.

mod operators;

pub use operators::Precedence;

use std::rc::Rc;

use gos_ir::{Expr, ExprKind, FunctionLiteral, Identifier, Token, TokenKind};
use gos_stack::ensure_sufficient_stack;

use crate::{ParseError, ParseErrorKind, Parser};
use operators::{match_infix_op, match_prefix_op};

impl<I: Iterator<Item = Token>> Parser<I> {
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            let mut left = self.parse_prefix()?;

            while !self.cursor.check_peek(TokenKind::Semicolon)
                && precedence < Precedence::of(self.cursor.peek_kind())
            {
                self.cursor.advance();
                left = self.parse_infix(left)?;
            }

            Ok(left)
        })
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Bang | TokenKind::Minus => return self.parse_prefix_operator(),
            TokenKind::LParen => return self.parse_grouped(),
            TokenKind::If => return self.parse_if(),
            TokenKind::Function => return self.parse_function_literal(),
            _ => {}
        }

        let token = self.cursor.current();
        let location = token.location.clone();
        let kind = match token.kind {
            TokenKind::Ident => ExprKind::Ident(token.literal.clone()),
            TokenKind::Int => match token.literal.parse::<i64>() {
                Ok(value) => ExprKind::Int(value),
                Err(_) => {
                    return Err(ParseError::new(
                        ParseErrorKind::InvalidInteger(token.literal.clone()),
                        location,
                    ))
                }
            },
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::String => ExprKind::Str(token.literal.clone()),
            _ => return Err(ParseError::no_prefix_rule(token)),
        };

        Ok(Expr::new(kind, location))
    }

    /// Entered with the cursor on the operator token.
    fn parse_infix(&mut self, left: Expr) -> Result<Expr, ParseError> {
        let kind = self.cursor.current_kind();
        let location = self.cursor.current().location.clone();

        if kind == TokenKind::LParen {
            let arguments = self.parse_call_arguments()?;
            return Ok(Expr::new(
                ExprKind::Call {
                    callee: Box::new(left),
                    arguments,
                },
                location,
            ));
        }

        let Some(op) = match_infix_op(kind) else {
            return Err(ParseError::no_prefix_rule(self.cursor.current()));
        };

        self.cursor.advance();
        let right = self.parse_expression(Precedence::of(kind))?;

        Ok(Expr::new(
            ExprKind::Infix {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            location,
        ))
    }

    /// `!<expr>` or `-<expr>`
    fn parse_prefix_operator(&mut self) -> Result<Expr, ParseError> {
        let location = self.cursor.current().location.clone();
        let Some(op) = match_prefix_op(self.cursor.current_kind()) else {
            return Err(ParseError::no_prefix_rule(self.cursor.current()));
        };

        self.cursor.advance();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Ok(Expr::new(
            ExprKind::Prefix {
                op,
                operand: Box::new(operand),
            },
            location,
        ))
    }

    /// `( <expr> )`
    fn parse_grouped(&mut self) -> Result<Expr, ParseError> {
        self.cursor.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect_peek(TokenKind::RParen)?;
        Ok(expr)
    }

    /// `if <cond> { ... } [else { ... }]`
    ///
    /// The condition is an ordinary expression, so the customary
    /// `if (cond)` form parses as a grouped expression.
    fn parse_if(&mut self) -> Result<Expr, ParseError> {
        let location = self.cursor.current().location.clone();

        self.cursor.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        self.cursor.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.cursor.check_peek(TokenKind::Else) {
            self.cursor.advance();
            self.cursor.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            location,
        ))
    }

    /// `fn ( <params> ) { ... }`
    fn parse_function_literal(&mut self) -> Result<Expr, ParseError> {
        let location = self.cursor.current().location.clone();

        self.cursor.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.cursor.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expr::new(
            ExprKind::Function(FunctionLiteral {
                parameters: Rc::from(parameters),
                body: Rc::new(body),
            }),
            location,
        ))
    }

    /// Entered on `(`, left on `)`.
    fn parse_function_parameters(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut parameters = Vec::new();

        if self.cursor.check_peek(TokenKind::RParen) {
            self.cursor.advance();
            return Ok(parameters);
        }

        loop {
            self.cursor.expect_peek(TokenKind::Ident)?;
            let token = self.cursor.current();
            parameters.push(Identifier::new(
                token.literal.clone(),
                token.location.clone(),
            ));

            if !self.cursor.check_peek(TokenKind::Comma) {
                break;
            }
            self.cursor.advance();
        }

        self.cursor.expect_peek(TokenKind::RParen)?;
        Ok(parameters)
    }

    /// Entered on `(`, left on `)`.
    fn parse_call_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut arguments = Vec::new();

        if self.cursor.check_peek(TokenKind::RParen) {
            self.cursor.advance();
            return Ok(arguments);
        }

        self.cursor.advance();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.cursor.check_peek(TokenKind::Comma) {
            self.cursor.advance();
            self.cursor.advance();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.cursor.expect_peek(TokenKind::RParen)?;
        Ok(arguments)
    }
}
