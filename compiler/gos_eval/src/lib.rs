#![deny(clippy::arithmetic_side_effects)]
//! Gos Eval - tree-walking interpreter for Gosling.
//!
//! # Architecture
//!
//! - `Value`: closed sum of runtime values; booleans and `Null` are plain
//!   variants, so "the same instance" is simply "the same variant"
//! - `Environment`: chained scopes shared through `LocalScope`
//! - `evaluate_binary` / `evaluate_unary`: enum dispatch on operand types
//! - `builtins`: fixed registry consulted after the environment chain
//! - `Interpreter`: evaluates a `Program` against its global environment
//!
//! Evaluation returns `EvalResult = Result<Value, ControlFlow>`. `?` is the
//! check-and-propagate step: runtime errors and `return` both travel on the
//! `Err` side, and only function calls and the program boundary catch
//! `ControlFlow::Return`. At the public boundary an error becomes
//! `Value::Error`.

mod builtins;
mod environment;
pub mod errors;
mod eval_mode;
pub mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use builtins::{lookup_builtin, Builtin, BuiltinFn, BUILTINS};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{ControlFlow, EvalError, EvalErrorKind, EvalResult};
pub use eval_mode::{EvalMode, DEFAULT_MAX_DEPTH};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::{evaluate_unary, is_truthy};
pub use value::{Function, Value};

use gos_ir::Program;

/// Evaluate `program` against `env` with default settings.
///
/// `env` keeps every top-level binding the program makes, so repeated calls
/// with the same environment behave like successive REPL lines.
pub fn evaluate(program: &Program, env: &Environment) -> Value {
    InterpreterBuilder::new()
        .env(env.clone())
        .build()
        .eval_program(program)
}

#[cfg(test)]
mod tests;
