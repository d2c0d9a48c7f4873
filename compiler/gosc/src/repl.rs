//! The interactive read-eval-print loop.
//!
//! Each line is parsed on its own and evaluated against one interpreter, so
//! `let` bindings and functions carry over from line to line.

use std::io::{self, BufRead, Write};

use gos_eval::{Interpreter, InterpreterBuilder, SharedPrintHandler, Value};
use gos_parse::ParseError;

pub const PROMPT: &str = "$ ";
pub const BANNER: &str = "Welcome to Gosling";
pub const MODE_LINE: &str = "Gosling REPL (basic mode)";

/// What one line of input produced.
#[derive(Debug)]
pub enum LineOutcome {
    /// `\exit` or `\quit`.
    Exit,
    /// Blank line.
    Skipped,
    ParseErrors(Vec<ParseError>),
    Evaluated(Value),
}

/// REPL state: the interpreter whose globals persist across lines.
pub struct Repl {
    interpreter: Interpreter,
}

impl Repl {
    /// A REPL whose `puts` output goes to `print_handler`.
    pub fn new(print_handler: SharedPrintHandler) -> Self {
        Repl {
            interpreter: InterpreterBuilder::new()
                .print_handler(print_handler)
                .build(),
        }
    }

    pub fn eval_line(&mut self, line: &str) -> LineOutcome {
        let line = line.trim();
        if line == "\\exit" || line == "\\quit" {
            return LineOutcome::Exit;
        }
        if line.is_empty() {
            return LineOutcome::Skipped;
        }

        let output = gos_parse::parse(line);
        if output.has_errors() {
            return LineOutcome::ParseErrors(output.errors);
        }
        LineOutcome::Evaluated(self.interpreter.eval_program(&output.program))
    }
}

/// Run the loop until end of input or an exit command.
pub fn start<R: BufRead, W: Write>(input: R, out: &mut W, mut repl: Repl) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{MODE_LINE}")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        match repl.eval_line(&line?) {
            LineOutcome::Exit => return Ok(()),
            LineOutcome::Skipped | LineOutcome::Evaluated(Value::Null) => {}
            LineOutcome::ParseErrors(errors) => {
                for error in &errors {
                    writeln!(out, "\t{error}")?;
                }
            }
            LineOutcome::Evaluated(value) => writeln!(out, "{value}")?,
        }
    }
}
