//! The tree-walking interpreter.
//!
//! `Interpreter` walks a `Program` directly. It owns the global environment
//! and a handle to the environment currently in scope; a function call swaps
//! in a fresh scope enclosed by the callee's captured environment and
//! restores the caller's afterwards.

mod builder;
mod function_call;

pub use builder::InterpreterBuilder;

use gos_ir::{BlockStatement, Expr, ExprKind, Program, Stmt};
use gos_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::builtins::lookup_builtin;
use crate::environment::Environment;
use crate::errors::{identifier_not_found, ControlFlow, EvalError, EvalResult};
use crate::eval_mode::EvalMode;
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::unary_operators::{evaluate_unary, is_truthy};
use crate::value::{Function, Value};

/// Evaluates programs against a persistent global environment.
pub struct Interpreter {
    /// Top-level bindings; outlive every program run on this interpreter.
    globals: Environment,
    /// Innermost scope of the code being evaluated.
    env: Environment,
    mode: EvalMode,
    print_handler: SharedPrintHandler,
    /// Number of user-function calls currently active.
    call_depth: usize,
}

impl Interpreter {
    /// Interpreter with a fresh global environment, default mode, and
    /// `puts` writing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// The global environment. Bindings made by one program stay visible
    /// to the next.
    #[inline]
    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    #[inline]
    pub fn mode(&self) -> &EvalMode {
        &self.mode
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Evaluate every statement of `program` and return the last value.
    ///
    /// A top-level `return` stops the program and yields its value. A
    /// runtime error stops the program and is returned as `Value::Error`.
    /// An empty program yields `Null`.
    pub fn eval_program(&mut self, program: &Program) -> Value {
        self.env = self.globals.clone();
        self.call_depth = 0;
        match self.eval_statements(&program.statements) {
            Ok(value) | Err(ControlFlow::Return(value)) => value,
            Err(ControlFlow::Error(error)) => {
                trace!(%error, "program stopped on runtime error");
                Value::Error(Box::new(error))
            }
        }
    }

    /// Evaluate statements in order. `return` and errors propagate past the
    /// remaining statements; blocks do not catch either.
    fn eval_statements(&mut self, statements: &[Stmt]) -> EvalResult {
        let mut result = Value::Null;
        for stmt in statements {
            result = self.eval_stmt(stmt)?;
        }
        Ok(result)
    }

    #[inline]
    fn eval_block(&mut self, block: &BlockStatement) -> EvalResult {
        self.eval_statements(&block.statements)
    }

    fn eval_stmt(&mut self, stmt: &Stmt) -> EvalResult {
        match stmt {
            Stmt::Let { name, value, .. } => {
                let value = self.eval_expr(value)?;
                self.env.define(name.name.as_str(), value);
                Ok(Value::Null)
            }
            Stmt::Return { value, .. } => {
                let value = self.eval_expr(value)?;
                Err(ControlFlow::Return(value))
            }
            Stmt::Expression(expr) => self.eval_expr(expr),
        }
    }

    /// Evaluate an expression.
    ///
    /// Grows the host stack on demand so deeply nested input cannot
    /// overflow it.
    pub(crate) fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Str(s) => Ok(Value::string(s.as_str())),
            ExprKind::Ident(name) => self.eval_ident(name, expr),
            ExprKind::Prefix { op, operand } => {
                let operand = self.eval_expr(operand)?;
                evaluate_unary(*op, operand)
                    .map_err(|kind| EvalError::new(kind, expr.location.clone()).into())
            }
            ExprKind::Infix { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(left, right, *op)
                    .map_err(|kind| EvalError::new(kind, expr.location.clone()).into())
            }
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.eval_expr(condition)?;
                if is_truthy(&condition) {
                    self.eval_block(consequence)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative)
                } else {
                    Ok(Value::Null)
                }
            }
            ExprKind::Function(literal) => Ok(Value::Function(std::rc::Rc::new(Function {
                parameters: literal.parameters.clone(),
                body: literal.body.clone(),
                env: self.env.clone(),
            }))),
            ExprKind::Call { callee, arguments } => {
                let callee = self.eval_expr(callee)?;
                let args = arguments
                    .iter()
                    .map(|arg| self.eval_expr(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                self.apply_function(&callee, &args, &expr.location)
            }
        }
    }

    /// Environment chain first, then the builtin registry.
    fn eval_ident(&self, name: &str, expr: &Expr) -> EvalResult {
        if let Some(value) = self.env.lookup(name) {
            return Ok(value);
        }
        if let Some(builtin) = lookup_builtin(name) {
            return Ok(Value::Builtin(builtin));
        }
        Err(identifier_not_found(name, &expr.location).into())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
