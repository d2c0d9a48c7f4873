//! Lexer for Gosling using logos.
//!
//! [`Lexer`] is a pull-based token source: it produces one [`Token`] per
//! `next()` call, ends with a single `Eof` token, and then returns `None`.
//! Lines and columns are tracked incrementally as tokens are pulled, so no
//! line table is built up front.

use std::sync::Arc;

use gos_ir::{Location, Token, TokenKind};
use logos::Logos;

/// Raw token from logos, before location tracking.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")]
enum RawToken {
    #[token("\n")]
    Newline,

    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("!")]
    Bang,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Integer literal; conversion (and overflow) is left to the parser.
    #[regex(r"[0-9]+")]
    Int,

    // String literal, no escapes, may span lines.
    #[regex(r#""[^"]*""#)]
    String,

    // Opening quote with no closing quote before end of input.
    #[regex(r#""[^"]*"#)]
    UnterminatedString,

    // Identifier or keyword.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,
}

/// Pull-based token source over one input.
pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, RawToken>,
    filename: Arc<str>,
    /// Current 1-based line.
    line: u32,
    /// Byte offset where the current line starts.
    line_start: usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Lex input that did not come from a file (REPL lines, tests).
    pub fn new(source: &'src str) -> Self {
        Self::with_filename(source, "")
    }

    /// Lex the contents of `filename`; every token location carries the name.
    pub fn with_filename(source: &'src str, filename: impl Into<Arc<str>>) -> Self {
        Lexer {
            source,
            inner: RawToken::lexer(source),
            filename: filename.into(),
            line: 1,
            line_start: 0,
            finished: false,
        }
    }

    fn location_at(&self, offset: usize) -> Location {
        let column = self.source[self.line_start..offset].chars().count() + 1;
        Location::new(
            self.line,
            u32::try_from(column).unwrap_or(u32::MAX),
            Arc::clone(&self.filename),
        )
    }

    /// Account for newlines inside a token that spans lines.
    fn advance_lines(&mut self, start: usize, text: &str) {
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                self.line = self.line.saturating_add(1);
                self.line_start = start + offset + 1;
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        while let Some(result) = self.inner.next() {
            let span = self.inner.span();
            let slice = self.inner.slice();
            let location = self.location_at(span.start);

            let token = match result {
                Ok(RawToken::Newline) => {
                    self.advance_lines(span.start, slice);
                    continue;
                }
                Ok(RawToken::String) => {
                    let content = &slice[1..slice.len() - 1];
                    let token = Token::new(TokenKind::String, content, location);
                    self.advance_lines(span.start, slice);
                    token
                }
                Ok(RawToken::UnterminatedString) => {
                    tracing::debug!(
                        line = location.line,
                        column = location.column,
                        "unterminated string literal"
                    );
                    let token = Token::new(TokenKind::Illegal, slice, location);
                    self.advance_lines(span.start, slice);
                    token
                }
                Ok(RawToken::Word) => {
                    let kind = TokenKind::keyword(slice).unwrap_or(TokenKind::Ident);
                    Token::new(kind, slice, location)
                }
                Ok(raw) => Token::new(convert_token(raw), slice, location),
                Err(()) => {
                    tracing::debug!(
                        line = location.line,
                        column = location.column,
                        text = slice,
                        "illegal character"
                    );
                    let token = Token::new(TokenKind::Illegal, slice, location);
                    self.advance_lines(span.start, slice);
                    token
                }
            };
            return Some(token);
        }

        self.finished = true;
        Some(Token::new(
            TokenKind::Eof,
            "",
            self.location_at(self.source.len()),
        ))
    }
}

/// Lex a whole input into a vector, `Eof` included.
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Map a raw operator or delimiter to its `TokenKind`.
fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Int => TokenKind::Int,
        // Handled by the caller before conversion.
        RawToken::Newline
        | RawToken::String
        | RawToken::UnterminatedString
        | RawToken::Word => TokenKind::Illegal,
    }
}
