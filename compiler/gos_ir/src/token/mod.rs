//! Token types for the Gosling lexer.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use super::Location;

/// A classified lexical unit: its kind, the literal text it was read from,
/// and where it starts.
///
/// For string tokens `literal` is the text between the quotes; for `Eof` it
/// is empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub location: Location,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>, location: Location) -> Self {
        Token {
            kind,
            literal: literal.into(),
            location,
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} @ {}:{}",
            self.kind, self.literal, self.location.line, self.location.column
        )
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::TokenKind;
    crate::static_assert_size!(TokenKind, 1);
}
