//! Parser for Gosling.
//!
//! Recursive descent for statements and precedence climbing (Pratt parsing)
//! for expressions, over a two-token window on a pull-based token source.
//!
//! Parsing never stops at the first problem: each error is recorded, the
//! parser resynchronizes at the next statement boundary, and the result is
//! always a (possibly partial) [`Program`] together with every error found.
//! Callers should not evaluate a program whose [`ParseOutput`] has errors.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use error::{ParseError, ParseErrorKind};
pub use grammar::Precedence;

use cursor::Cursor;
use gos_ir::{Program, Token};
use gos_lexer::Lexer;
use tracing::debug;

/// Result of parsing one input.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state: the token window and the errors collected so far.
pub struct Parser<I> {
    cursor: Cursor<I>,
    errors: Vec<ParseError>,
    /// Blocks entered but not yet closed by the statement being parsed.
    open_blocks: usize,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new(tokens: I) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
            open_blocks: 0,
        }
    }

    /// Parse statements until end of input.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();

        while !self.cursor.is_at_end() {
            let start = self.cursor.position();
            self.open_blocks = 0;
            match self.parse_statement() {
                Ok(stmt) => {
                    statements.push(stmt);
                    self.cursor.advance();
                }
                Err(error) => {
                    debug!(%error, "parse error, resynchronizing");
                    self.errors.push(error);
                    self.recover(start);
                }
            }
        }

        ParseOutput {
            program: Program::new(statements),
            errors: self.errors,
        }
    }

    /// Skip to the next statement boundary, always consuming at least the
    /// token the failed statement started on.
    ///
    /// A failure inside a block first skips to the end of every block still
    /// open, so the block's own statements are not parsed again at top level.
    fn recover(&mut self, start: usize) {
        if self.cursor.position() == start {
            self.cursor.advance();
        }
        if self.open_blocks > 0 {
            recovery::skip_open_blocks(&mut self.cursor, self.open_blocks);
            self.open_blocks = 0;
        }
        recovery::synchronize(&mut self.cursor, recovery::STMT_BOUNDARY);
    }
}

/// Parse source text that did not come from a file.
pub fn parse(source: &str) -> ParseOutput {
    Parser::new(Lexer::new(source)).parse_program()
}

/// Parse the contents of `filename`; locations carry the file name.
pub fn parse_with_filename(source: &str, filename: &str) -> ParseOutput {
    Parser::new(Lexer::with_filename(source, filename)).parse_program()
}
