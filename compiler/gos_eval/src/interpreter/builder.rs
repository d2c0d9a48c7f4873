//! `InterpreterBuilder` for creating `Interpreter` instances.

use super::Interpreter;
use crate::environment::Environment;
use crate::eval_mode::EvalMode;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for `Interpreter`.
///
/// Defaults: a fresh global environment, `EvalMode::Interpret`, and `puts`
/// writing to stdout.
#[derive(Default)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    mode: EvalMode,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the evaluation mode.
    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Use `env` as the global environment. The caller keeps its handle and
    /// sees every top-level binding the interpreter makes.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Where `puts` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        let globals = self.env.unwrap_or_default();
        Interpreter {
            env: globals.clone(),
            globals,
            mode: self.mode,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_depth: 0,
        }
    }
}
