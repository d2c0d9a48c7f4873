//! Runtime values.
//!
//! `Value` is a closed enum; every consumer matches it exhaustively.
//! Booleans and `Null` carry no identity beyond their variant, which is
//! what makes identity comparison for them well defined.

use std::fmt;
use std::rc::Rc;

use gos_ir::{BlockStatement, Identifier};

use crate::builtins::Builtin;
use crate::environment::Environment;
use crate::errors::EvalError;

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Str(Rc<str>),
    /// The "no value" marker: result of `let`, of an `if` without a taken
    /// branch, and of `puts`.
    Null,
    Function(Rc<Function>),
    Builtin(&'static Builtin),
    /// A runtime error surfaced at the program boundary.
    Error(Box<EvalError>),
}

/// A closure: parameters and body shared with the AST, plus the
/// environment that was current where the `fn` literal was evaluated.
pub struct Function {
    pub parameters: Rc<[Identifier]>,
    pub body: Rc<BlockStatement>,
    pub env: Environment,
}

impl Function {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

impl Value {
    #[inline]
    pub fn string(text: impl Into<Rc<str>>) -> Self {
        Value::Str(text.into())
    }

    /// Type name used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "INTEGER",
            Value::Bool(_) => "BOOLEAN",
            Value::Str(_) => "STRING",
            Value::Null => "NULL",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Error(_) => "ERROR",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Identity comparison.
    ///
    /// Booleans and `Null` are identical to any equal value of their kind,
    /// functions only to the same closure, builtins only to the same registry
    /// entry. Integers and strings are never identical: they are compared by
    /// value before identity is ever consulted.
    pub fn is_same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            _ => self.is_same(other),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => f.write_str(s),
            Value::Null => f.write_str("null"),
            Value::Function(func) => {
                let params: Vec<_> = func.parameters.iter().map(|p| p.name.as_str()).collect();
                write!(f, "fn({}) {{\n{}\n}}", params.join(", "), func.body)
            }
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Error(error) => write!(f, "{error}"),
        }
    }
}

// Hand-written so that a closure stored in the environment it captured does
// not send `Debug` around the cycle.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Null => f.write_str("Null"),
            Value::Function(func) => write!(f, "Function(arity {})", func.arity()),
            Value::Builtin(builtin) => write!(f, "Builtin({})", builtin.name),
            Value::Error(error) => write!(f, "Error({error})"),
        }
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Value;
    gos_ir::static_assert_size!(Value, 24);
}
