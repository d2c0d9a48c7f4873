//! Grammar productions.

mod expr;
mod stmt;

pub use expr::Precedence;
