//! Error recovery for the parser.
//!
//! After a statement fails to parse, the parser skips ahead to a statement
//! boundary and carries on, so one malformed statement costs exactly one
//! error and the rest of the input still parses.

use gos_ir::{Token, TokenKind};

use super::cursor::Cursor;

/// A set of token kinds as a bitset over `TokenKind` discriminants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a kind (builder form, usable in `const`).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

// Every kind must fit in the bitset.
const _: () = assert!(TokenKind::COUNT <= u64::BITS as usize);

/// Tokens where a new statement can begin (or the input ends).
/// A `;` ends the broken statement and is consumed.
pub const STMT_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::Semicolon)
    .with(TokenKind::Let)
    .with(TokenKind::Return)
    .with(TokenKind::Eof);

/// Advance until the current token is in `recovery`, consuming a `;` if
/// that is where the scan stopped.
///
/// Returns `true` if a boundary was found, `false` if input ran out.
pub fn synchronize<I>(cursor: &mut Cursor<I>, recovery: TokenSet) -> bool
where
    I: Iterator<Item = Token>,
{
    while !cursor.is_at_end() {
        if recovery.contains(cursor.current_kind()) {
            if cursor.check(TokenKind::Semicolon) {
                cursor.advance();
            }
            return true;
        }
        cursor.advance();
    }
    false
}

/// Advance past the `}` that closes each of `depth` blocks the cursor is
/// inside, counting any nested `{ … }` pairs on the way.
///
/// Returns `false` if input ran out first.
pub fn skip_open_blocks<I>(cursor: &mut Cursor<I>, mut depth: usize) -> bool
where
    I: Iterator<Item = Token>,
{
    while depth > 0 {
        match cursor.current_kind() {
            TokenKind::Eof => return false,
            TokenKind::LBrace => depth += 1,
            TokenKind::RBrace => depth -= 1,
            _ => {}
        }
        cursor.advance();
    }
    true
}
