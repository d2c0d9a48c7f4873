//! `gos run`: parse and evaluate a file.

use gos_eval::{EvalMode, InterpreterBuilder, SharedPrintHandler, Value};
use gos_parse::{parse_with_filename, ParseError};
use tracing::debug;

use super::{read_file, RunOptions};

/// What running a source text produced.
#[derive(Debug)]
pub enum RunOutcome {
    /// The program did not parse; nothing was evaluated.
    ParseErrors(Vec<ParseError>),
    /// The program ran; the value may be `Value::Error`.
    Evaluated(Value),
}

/// Parse `source` and, if it parsed cleanly, evaluate it.
pub fn run_source(
    source: &str,
    filename: &str,
    mode: EvalMode,
    print_handler: SharedPrintHandler,
) -> RunOutcome {
    let output = parse_with_filename(source, filename);
    if output.has_errors() {
        debug!(count = output.errors.len(), "refusing to evaluate");
        return RunOutcome::ParseErrors(output.errors);
    }

    let mut interpreter = InterpreterBuilder::new()
        .mode(mode)
        .print_handler(print_handler)
        .build();
    let value = interpreter.eval_program(&output.program);
    if value.is_error() {
        debug!(%value, "program stopped on a runtime error");
    }
    RunOutcome::Evaluated(value)
}

/// Run the file named by `options`, printing the result.
///
/// Exits with status 1 on parse errors and on a runtime error.
pub fn run_file(options: &RunOptions) {
    let Some(path) = options.path.as_deref() else {
        super::exit_with(&super::CommandError::MissingPath);
    };
    let source = read_file(path);

    match run_source(&source, path, options.mode(), gos_eval::stdout_handler()) {
        RunOutcome::ParseErrors(errors) => {
            for error in &errors {
                eprintln!("\t{error}");
            }
            std::process::exit(1);
        }
        RunOutcome::Evaluated(Value::Error(error)) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
        RunOutcome::Evaluated(Value::Null) => {}
        RunOutcome::Evaluated(value) => println!("{value}"),
    }
}
