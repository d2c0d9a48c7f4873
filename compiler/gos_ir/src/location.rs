//! Source locations.

use std::fmt;
use std::sync::Arc;

/// Position of a token in its source.
///
/// `line` and `column` are 1-based and `column` counts characters, not
/// bytes. The file name is shared by every token lexed from the same input;
/// input that did not come from a file carries the empty name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: u32,
    pub column: u32,
    pub filename: Arc<str>,
}

impl Location {
    #[inline]
    pub fn new(line: u32, column: u32, filename: Arc<str>) -> Self {
        Location {
            line,
            column,
            filename,
        }
    }

    /// Location for values that were not produced from source text.
    pub fn unknown() -> Self {
        Location {
            line: 0,
            column: 0,
            filename: Arc::from(""),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Renders as `file: <name> line: <line> char: <column>`, the prefix shared
/// by parse and runtime error messages.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "file: {} line: {} char: {}",
            self.filename, self.line, self.column
        )
    }
}
