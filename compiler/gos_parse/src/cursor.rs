//! Two-token window over a pull-based token source.

use std::mem;

use gos_ir::{Token, TokenKind};
use tracing::trace;

use super::ParseError;

/// Cursor holding the current and the next ("peek") token.
///
/// Tokens are pulled from the source one at a time; nothing is buffered
/// beyond the peek token. Once the source is exhausted the cursor keeps
/// yielding `Eof`, so callers never observe a missing token.
pub struct Cursor<I> {
    tokens: I,
    current: Token,
    peek: Token,
    /// Number of tokens consumed so far, used to detect progress.
    pos: usize,
}

impl<I: Iterator<Item = Token>> Cursor<I> {
    pub fn new(mut tokens: I) -> Self {
        let current = tokens.next().unwrap_or_else(missing_eof);
        let peek = tokens.next().unwrap_or_else(|| eof_after(&current));
        Cursor {
            tokens,
            current,
            peek,
            pos: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Position in the token stream, for progress tracking.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    #[inline]
    pub fn check_peek(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Move the window one token forward.
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        let next = self
            .tokens
            .next()
            .unwrap_or_else(|| eof_after(&self.peek));
        self.current = mem::replace(&mut self.peek, next);
        self.pos += 1;
        trace!(
            kind = %self.current.kind,
            line = self.current.location.line,
            column = self.current.location.column,
            "advance"
        );
    }

    /// Advance only if the peek token has the expected kind.
    pub fn expect_peek(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.check_peek(kind) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::unexpected(kind, &self.peek))
        }
    }
}

fn missing_eof() -> Token {
    Token::new(TokenKind::Eof, "", gos_ir::Location::unknown())
}

fn eof_after(token: &Token) -> Token {
    Token::new(TokenKind::Eof, "", token.location.clone())
}
