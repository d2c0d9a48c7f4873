//! Gosling IR - shared front-end data structures.
//!
//! This crate contains the types every other Gosling crate agrees on:
//! - `Location` for source positions
//! - `Token` and `TokenKind` produced by the lexer
//! - AST nodes (`Program`, `Stmt`, `Expr`, ...) produced by the parser
//!
//! AST nodes render back to source-like text through `Display`. That
//! rendering is what `gos parse` prints and what function values show.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod location;
mod token;

pub use ast::{
    BlockStatement, Expr, ExprKind, FunctionLiteral, Identifier, InfixOp, PrefixOp, Program, Stmt,
};
pub use location::Location;
pub use token::{Token, TokenKind};
