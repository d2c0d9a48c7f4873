//! Interpreter tests driven by parsed source.

mod error_tests;

use crate::{buffer_handler, EvalMode, Interpreter, InterpreterBuilder, SharedPrintHandler, Value};

/// Parse `source`, failing the test on any parse error.
fn parse(source: &str) -> gos_ir::Program {
    let output = gos_parse::parse(source);
    assert!(
        output.errors.is_empty(),
        "unexpected parse errors in {source:?}: {:?}",
        output.errors
    );
    output.program
}

/// Evaluate `source` on a fresh interpreter whose output is discarded.
fn run(source: &str) -> Value {
    InterpreterBuilder::new()
        .print_handler(crate::silent_handler())
        .build()
        .eval_program(&parse(source))
}

/// Evaluate `source` and return the result together with everything `puts`
/// printed.
fn run_capturing(source: &str) -> (Value, String) {
    let handler: SharedPrintHandler = buffer_handler();
    let mut interpreter = InterpreterBuilder::new()
        .print_handler(handler.clone())
        .build();
    let value = interpreter.eval_program(&parse(source));
    (value, handler.get_output())
}

/// Evaluate `source` with a recursion limit of `max_depth`.
fn run_limited(source: &str, max_depth: usize) -> Value {
    InterpreterBuilder::new()
        .mode(EvalMode::Limited { max_depth })
        .print_handler(crate::silent_handler())
        .build()
        .eval_program(&parse(source))
}

/// The message of the runtime error `source` stops with.
fn error_message(source: &str) -> String {
    match run(source) {
        Value::Error(error) => error.message(),
        other => panic!("expected an error from {source:?}, got {other:?}"),
    }
}

#[test]
fn interpreter_new_uses_defaults() {
    let interpreter = Interpreter::new();
    assert_eq!(interpreter.mode(), &EvalMode::Interpret);
    assert!(interpreter.globals().local_names().is_empty());
}
