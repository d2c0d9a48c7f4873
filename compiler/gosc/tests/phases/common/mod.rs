//! Shared helpers for phase tests.

use gos_eval::{buffer_handler, EvalMode, Value};
use gos_parse::ParseError;
use gosc::commands::{run_source, RunOutcome};

/// Parse `source`, panicking with the errors if there are any, and return
/// the rendered program.
pub fn render(source: &str) -> String {
    let output = gos_parse::parse(source);
    assert!(
        !output.has_errors(),
        "parse errors in {source:?}: {:?}",
        output.errors
    );
    output.program.to_string()
}

/// Parse errors for `source`, rendered without locations.
pub fn parse_messages(source: &str) -> Vec<String> {
    gos_parse::parse(source)
        .errors
        .iter()
        .map(ParseError::message)
        .collect()
}

/// Run `source` the way `gos run` does, capturing `puts` output.
pub fn run(source: &str) -> (Value, String) {
    run_with_mode(source, EvalMode::Interpret)
}

pub fn run_with_mode(source: &str, mode: EvalMode) -> (Value, String) {
    let handler = buffer_handler();
    match run_source(source, "test.gos", mode, handler.clone()) {
        RunOutcome::Evaluated(value) => (value, handler.get_output()),
        RunOutcome::ParseErrors(errors) => panic!("parse errors in {source:?}: {errors:?}"),
    }
}

/// Run `source` and return just the value.
pub fn eval(source: &str) -> Value {
    run(source).0
}

/// Run `source`, which must fail at runtime, and return the full rendered
/// error.
pub fn runtime_error(source: &str) -> String {
    match eval(source) {
        Value::Error(error) => error.to_string(),
        other => panic!("expected a runtime error from {source:?}, got {other}"),
    }
}
