//! Unary operator evaluation and truthiness.

use gos_ir::PrefixOp;

use crate::errors::{integer_overflow, invalid_unary_op, EvalErrorKind};
use crate::value::Value;

/// `Null` and `false` are falsy; every other value, `0` included, is truthy.
#[inline]
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

/// Apply a prefix operator.
///
/// `!` accepts only booleans and `Null`; `-` accepts only integers.
pub fn evaluate_unary(op: PrefixOp, operand: Value) -> Result<Value, EvalErrorKind> {
    match (op, &operand) {
        (PrefixOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (PrefixOp::Not, Value::Null) => Ok(Value::Bool(true)),
        (PrefixOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        _ => Err(invalid_unary_op(op, &operand)),
    }
}
