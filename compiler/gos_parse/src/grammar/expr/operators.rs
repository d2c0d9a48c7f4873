//! Operator tables: binding power and operator mapping per token kind.

use gos_ir::{InfixOp, PrefixOp, TokenKind};

/// Binding power, lowest first. Derives `Ord` so the climbing loop can
/// compare levels directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/` `%`
    Product,
    /// unary `!` `-`
    Prefix,
    /// `f(...)`
    Call,
}

impl Precedence {
    /// Infix binding power of a token; `Lowest` for tokens with no infix rule.
    pub fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::EqEq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

/// Binary operator for an infix token.
pub(super) fn match_infix_op(kind: TokenKind) -> Option<InfixOp> {
    let op = match kind {
        TokenKind::Plus => InfixOp::Add,
        TokenKind::Minus => InfixOp::Sub,
        TokenKind::Star => InfixOp::Mul,
        TokenKind::Slash => InfixOp::Div,
        TokenKind::Percent => InfixOp::Mod,
        TokenKind::Lt => InfixOp::Lt,
        TokenKind::Gt => InfixOp::Gt,
        TokenKind::EqEq => InfixOp::Eq,
        TokenKind::NotEq => InfixOp::NotEq,
        _ => return None,
    };
    Some(op)
}

/// Unary operator for a prefix token.
pub(super) fn match_prefix_op(kind: TokenKind) -> Option<PrefixOp> {
    match kind {
        TokenKind::Bang => Some(PrefixOp::Not),
        TokenKind::Minus => Some(PrefixOp::Neg),
        _ => None,
    }
}
