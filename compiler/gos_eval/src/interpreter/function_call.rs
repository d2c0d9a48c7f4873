//! Function application.

use gos_ir::Location;

use super::Interpreter;
use crate::environment::Environment;
use crate::errors::{
    not_callable, recursion_limit_exceeded, wrong_function_args, ControlFlow, EvalError,
    EvalResult,
};
use crate::value::{Function, Value};

impl Interpreter {
    /// Apply `callee` to already evaluated arguments.
    ///
    /// `location` is the call site; errors raised by the call itself
    /// (arity, depth, builtin argument checks) report it.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn apply_function(
        &mut self,
        callee: &Value,
        args: &[Value],
        location: &Location,
    ) -> EvalResult {
        match callee {
            Value::Function(func) => self.call_user_function(func, args, location),
            Value::Builtin(builtin) => (builtin.func)(args, &self.print_handler)
                .map_err(|kind| EvalError::new(kind, location.clone()).into()),
            other => Err(not_callable(other, location).into()),
        }
    }

    fn call_user_function(
        &mut self,
        func: &Function,
        args: &[Value],
        location: &Location,
    ) -> EvalResult {
        if args.len() != func.arity() {
            return Err(wrong_function_args(args.len(), func.arity(), location).into());
        }
        self.check_recursion_limit(location)?;

        let call_env = Environment::enclosed(&func.env);
        for (param, arg) in func.parameters.iter().zip(args) {
            call_env.define(param.name.as_str(), arg.clone());
        }

        let caller_env = std::mem::replace(&mut self.env, call_env);
        self.call_depth = self.call_depth.saturating_add(1);
        let result = self.eval_block(&func.body);
        self.call_depth = self.call_depth.saturating_sub(1);
        self.env = caller_env;

        match result {
            Ok(value) | Err(ControlFlow::Return(value)) => Ok(value),
            Err(error @ ControlFlow::Error(_)) => Err(error),
        }
    }

    /// Fail once the number of active user-function calls reaches the
    /// mode's limit.
    #[inline]
    fn check_recursion_limit(&self, location: &Location) -> Result<(), EvalError> {
        let max_depth = self.mode.max_recursion_depth();
        if self.call_depth >= max_depth {
            return Err(recursion_limit_exceeded(max_depth, location));
        }
        Ok(())
    }
}
