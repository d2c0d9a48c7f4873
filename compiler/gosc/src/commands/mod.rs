//! Command handlers for the `gos` CLI.
//!
//! Each submodule implements one command. The `*_source` functions do the
//! work on an in-memory string and return what the command would print;
//! the `*_file` functions read a file, print, and set the exit code.

mod debug;
mod options;
mod run;

use std::io;
use std::path::Path;

pub use debug::{lex_file, parse_file, render_parse, render_tokens};
pub use options::{parse_run_options, RunOptions};
pub use run::{run_file, run_source, RunOutcome};

/// Source file extension accepted by `gos run` and friends.
pub const SOURCE_EXTENSION: &str = "gos";

/// Failures of the CLI itself, as opposed to errors in the program it runs.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("'{0}' contains invalid UTF-8 data")]
    InvalidUtf8(String),
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("'{0}' is not a .gos file")]
    WrongExtension(String),
    #[error("invalid value for --max-depth: '{0}'")]
    InvalidMaxDepth(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("missing file path")]
    MissingPath,
}

/// Whether `path` names a Gosling source file.
pub fn has_source_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
}

/// Read a `.gos` file into memory.
pub fn read_source(path: &str) -> Result<String, CommandError> {
    if !has_source_extension(path) {
        return Err(CommandError::WrongExtension(path.to_string()));
    }
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CommandError::NotFound(path.to_string()),
        io::ErrorKind::PermissionDenied => CommandError::PermissionDenied(path.to_string()),
        io::ErrorKind::InvalidData => CommandError::InvalidUtf8(path.to_string()),
        _ => CommandError::Io {
            path: path.to_string(),
            source: e,
        },
    })
}

/// Read a file or exit with its one-line error message.
pub(crate) fn read_file(path: &str) -> String {
    match read_source(path) {
        Ok(content) => content,
        Err(e) => exit_with(&e),
    }
}

/// Print `error` on stderr and exit with status 1.
pub fn exit_with(error: &CommandError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}
