//! Binary operator evaluation.
//!
//! Dispatch is on the pair of operand types:
//! - `INTEGER × INTEGER`: arithmetic and comparisons
//! - `BOOLEAN × BOOLEAN`: `==` and `!=` only
//! - `STRING × STRING`: `+` concatenation, `==` and `!=` by content
//! - anything else: `==` and `!=` by identity, every other operator fails
//!
//! Integer arithmetic is checked: division and modulo by zero and results
//! outside `i64` are errors, never panics.

use gos_ir::InfixOp;

use crate::errors::{
    division_by_zero, integer_overflow, invalid_binary_op, modulo_by_zero, EvalErrorKind,
};
use crate::value::Value;

/// Apply `op` to two already evaluated operands.
pub fn evaluate_binary(left: Value, right: Value, op: InfixOp) -> Result<Value, EvalErrorKind> {
    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Bool(a), Value::Bool(b)) => match op {
            InfixOp::Eq => Ok(Value::Bool(a == b)),
            InfixOp::NotEq => Ok(Value::Bool(a != b)),
            _ => Err(invalid_binary_op(&left, op, &right)),
        },
        (Value::Str(a), Value::Str(b)) => match op {
            InfixOp::Add => {
                let mut joined = String::with_capacity(a.len().saturating_add(b.len()));
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::string(joined))
            }
            InfixOp::Eq => Ok(Value::Bool(a == b)),
            InfixOp::NotEq => Ok(Value::Bool(a != b)),
            _ => Err(invalid_binary_op(&left, op, &right)),
        },
        _ => match op {
            InfixOp::Eq => Ok(Value::Bool(left.is_same(&right))),
            InfixOp::NotEq => Ok(Value::Bool(!left.is_same(&right))),
            _ => Err(invalid_binary_op(&left, op, &right)),
        },
    }
}

fn eval_int_binary(a: i64, b: i64, op: InfixOp) -> Result<Value, EvalErrorKind> {
    let value = match op {
        InfixOp::Add => Value::Int(a.checked_add(b).ok_or_else(|| integer_overflow("addition"))?),
        InfixOp::Sub => Value::Int(
            a.checked_sub(b)
                .ok_or_else(|| integer_overflow("subtraction"))?,
        ),
        InfixOp::Mul => Value::Int(
            a.checked_mul(b)
                .ok_or_else(|| integer_overflow("multiplication"))?,
        ),
        InfixOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            // Only `i64::MIN / -1` can fail past the zero check.
            Value::Int(a.checked_div(b).ok_or_else(|| integer_overflow("division"))?)
        }
        InfixOp::Mod => {
            if b == 0 {
                return Err(modulo_by_zero());
            }
            // `i64::MIN % -1` is 0; the wrapping form says so without trapping.
            Value::Int(a.wrapping_rem(b))
        }
        InfixOp::Lt => Value::Bool(a < b),
        InfixOp::Gt => Value::Bool(a > b),
        InfixOp::Eq => Value::Bool(a == b),
        InfixOp::NotEq => Value::Bool(a != b),
    };
    Ok(value)
}
