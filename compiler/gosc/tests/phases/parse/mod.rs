//! Front-end phase tests: lexer and parser working together.

mod lexer;
mod precedence;
mod recovery;
