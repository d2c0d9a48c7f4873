//! Parse errors.

use gos_ir::{Location, Token, TokenKind};

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("no prefix parse function for {0} found")]
    NoPrefixRule(TokenKind),
    #[error("could not parse \"{0}\" as integer")]
    InvalidInteger(String),
    #[error("illegal character \"{0}\"")]
    IllegalCharacter(String),
    #[error("unterminated string literal")]
    UnterminatedString,
}

/// A parse error and where it happened.
///
/// Renders as `file: <f> line: <l> char: <c> <message>`, the same shape as
/// runtime errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{location} {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: Location,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, location: Location) -> Self {
        ParseError { kind, location }
    }

    /// `found` was seen where `expected` was required.
    #[cold]
    pub fn unexpected(expected: TokenKind, found: &Token) -> Self {
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: found.kind,
            },
            found.location.clone(),
        )
    }

    /// `token` cannot start an expression.
    #[cold]
    pub fn no_prefix_rule(token: &Token) -> Self {
        let kind = match token.kind {
            // The lexer keeps the opening quote of an unclosed string.
            TokenKind::Illegal if token.literal.starts_with('"') => {
                ParseErrorKind::UnterminatedString
            }
            TokenKind::Illegal => ParseErrorKind::IllegalCharacter(token.literal.clone()),
            other => ParseErrorKind::NoPrefixRule(other),
        };
        ParseError::new(kind, token.location.clone())
    }

    /// Message without the location prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
