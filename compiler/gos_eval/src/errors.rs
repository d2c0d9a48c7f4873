//! Runtime errors and control-flow signals.
//!
//! `EvalErrorKind` names every runtime failure; its `Display` output is the
//! user-facing message. Factory functions below attach a location and are
//! the public way to build errors.

use gos_ir::{InfixOp, Location, PrefixOp};

use crate::value::Value;

/// Result of evaluating a node.
pub type EvalResult = Result<Value, ControlFlow>;

/// Non-local exits that travel up the evaluation stack.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlFlow {
    /// `return`: caught by the nearest function call or the program.
    Return(Value),
    /// Runtime error: never caught, ends the program.
    Error(EvalError),
}

impl From<EvalError> for ControlFlow {
    #[inline]
    fn from(error: EvalError) -> Self {
        ControlFlow::Error(error)
    }
}

/// Typed runtime error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("identifier not found: {0}")]
    IdentifierNotFound(String),
    #[error("unknown operator: {op}{operand}")]
    InvalidUnaryOp {
        op: PrefixOp,
        operand: &'static str,
    },
    #[error("unknown operator: {left} {op} {right}")]
    InvalidBinaryOp {
        left: &'static str,
        op: InfixOp,
        right: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("integer overflow in {0}")]
    IntegerOverflow(&'static str),
    #[error("not a function: {0}")]
    NotCallable(&'static str),
    #[error("wrong number of arguments: got={got}, want={want}")]
    ArityMismatch { got: usize, want: usize },
    #[error("wrong number of arguments. got={got}, want={want}")]
    BuiltinArity { got: usize, want: usize },
    #[error("argument to `{builtin}` not supported, got {got}")]
    UnsupportedArgument {
        builtin: &'static str,
        got: &'static str,
    },
    #[error("maximum recursion depth exceeded (limit: {0})")]
    RecursionLimit(usize),
}

/// A runtime error at a source location.
///
/// Renders as `file: <f> line: <l> char: <c> <message>`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{location} {kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub location: Location,
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind, location: Location) -> Self {
        EvalError { kind, location }
    }

    /// The message without the location prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[cold]
pub fn identifier_not_found(name: &str, location: &Location) -> EvalError {
    EvalError::new(
        EvalErrorKind::IdentifierNotFound(name.to_string()),
        location.clone(),
    )
}

#[cold]
pub fn not_callable(callee: &Value, location: &Location) -> EvalError {
    EvalError::new(
        EvalErrorKind::NotCallable(callee.type_name()),
        location.clone(),
    )
}

#[cold]
pub fn wrong_function_args(got: usize, want: usize, location: &Location) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch { got, want }, location.clone())
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize, location: &Location) -> EvalError {
    EvalError::new(EvalErrorKind::RecursionLimit(limit), location.clone())
}

/// Division by zero.
#[cold]
pub fn division_by_zero() -> EvalErrorKind {
    EvalErrorKind::DivisionByZero
}

/// Modulo by zero.
#[cold]
pub fn modulo_by_zero() -> EvalErrorKind {
    EvalErrorKind::ModuloByZero
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalErrorKind {
    EvalErrorKind::IntegerOverflow(operation)
}

#[cold]
pub fn invalid_binary_op(left: &Value, op: InfixOp, right: &Value) -> EvalErrorKind {
    EvalErrorKind::InvalidBinaryOp {
        left: left.type_name(),
        op,
        right: right.type_name(),
    }
}

#[cold]
pub fn invalid_unary_op(op: PrefixOp, operand: &Value) -> EvalErrorKind {
    EvalErrorKind::InvalidUnaryOp {
        op,
        operand: operand.type_name(),
    }
}

#[cold]
pub fn wrong_builtin_args(got: usize, want: usize) -> EvalErrorKind {
    EvalErrorKind::BuiltinArity { got, want }
}

#[cold]
pub fn unsupported_argument(builtin: &'static str, got: &Value) -> EvalErrorKind {
    EvalErrorKind::UnsupportedArgument {
        builtin,
        got: got.type_name(),
    }
}
