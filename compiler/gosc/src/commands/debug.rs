//! Debug commands: `parse` and `lex` for inspecting the front end.

use std::fmt::Write as _;

use gos_lexer::Lexer;

use super::read_file;

/// The rendered program followed by any parse errors, one per line.
pub fn render_parse(source: &str, filename: &str) -> String {
    let output = gos_parse::parse_with_filename(source, filename);
    let mut out = String::new();

    for stmt in &output.program.statements {
        let _ = writeln!(out, "{stmt}");
    }
    if output.has_errors() {
        let _ = writeln!(out, "Errors:");
        for error in &output.errors {
            let _ = writeln!(out, "\t{error}");
        }
    }
    out
}

/// One token per line: kind, literal and position.
pub fn render_tokens(source: &str, filename: &str) -> String {
    let mut out = String::new();
    for token in Lexer::with_filename(source, filename) {
        let literal = format!("{:?}", token.literal);
        let _ = writeln!(
            out,
            "{:<8} {literal:<12} {}:{}",
            token.kind.display_name(),
            token.location.line,
            token.location.column,
        );
    }
    out
}

/// Parse a file and display the rendered program.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    print!("{}", render_parse(&content, path));
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    println!("Tokens for '{path}':");
    print!("{}", render_tokens(&content, path));
}
