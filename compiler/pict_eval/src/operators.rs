//! Binary and unary operator evaluation.
//!
//! Operands arrive already evaluated. `🤝` and `🙌` short-circuit in the
//! interpreter before reaching [`evaluate_binary`]; when both operands were
//! evaluated anyway they still go through here so the type checks live in
//! one place.
//!
//! Numeric rules: int op int stays int (checked, overflow is fatal), any
//! real operand promotes the result to real, and `➗` always yields a real.

use pict_diagnostic::Diagnostic;
use pict_ir::{BinaryOp, UnaryOp};

use crate::{errors, Value};

/// Apply a binary operator to two evaluated operands.
pub fn evaluate_binary(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value, Diagnostic> {
    match op {
        BinaryOp::Add => add(lhs, rhs),
        BinaryOp::Sub => arithmetic(op, lhs, rhs, i64::checked_sub, |a, b| a - b),
        BinaryOp::Mul => arithmetic(op, lhs, rhs, i64::checked_mul, |a, b| a * b),
        BinaryOp::Div => divide(lhs, rhs),
        BinaryOp::Eq => equals(lhs, rhs),
        BinaryOp::Gt => ordering(op, lhs, rhs),
        BinaryOp::Lt => ordering(op, lhs, rhs),
        BinaryOp::And | BinaryOp::Or => logical(op, lhs, rhs),
    }
}

/// Apply a unary operator to an evaluated operand.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> Result<Value, Diagnostic> {
    match op {
        UnaryOp::Neg => match operand {
            Value::Int(v) => v
                .checked_neg()
                .map(Value::Int)
                .ok_or_else(|| errors::integer_overflow(BinaryOp::Sub)),
            Value::Real(v) => Ok(Value::Real(-v)),
            other => Err(errors::unary_type_mismatch(op, other)),
        },
        UnaryOp::Not => match operand {
            Value::Bool(b) => Ok(Value::Bool(!b)),
            other => Err(errors::unary_type_mismatch(op, other)),
        },
    }
}

/// `➕`: string concatenation when either side is a string, numeric addition
/// otherwise.
fn add(lhs: &Value, rhs: &Value) -> Result<Value, Diagnostic> {
    if matches!(lhs, Value::Str(_)) || matches!(rhs, Value::Str(_)) {
        return Ok(Value::Str(format!("{lhs}{rhs}")));
    }
    arithmetic(BinaryOp::Add, lhs, rhs, i64::checked_add, |a, b| a + b)
}

fn arithmetic(
    op: BinaryOp,
    lhs: &Value,
    rhs: &Value,
    int_op: fn(i64, i64) -> Option<i64>,
    real_op: fn(f64, f64) -> f64,
) -> Result<Value, Diagnostic> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => int_op(*a, *b)
            .map(Value::Int)
            .ok_or_else(|| errors::integer_overflow(op)),
        _ => match (lhs.as_real(), rhs.as_real()) {
            (Some(a), Some(b)) => Ok(Value::Real(real_op(a, b))),
            _ => Err(errors::binary_type_mismatch(op, lhs, rhs)),
        },
    }
}

/// `➗`: always real, zero divisor is fatal.
fn divide(lhs: &Value, rhs: &Value) -> Result<Value, Diagnostic> {
    match (lhs.as_real(), rhs.as_real()) {
        (Some(a), Some(b)) => {
            if b == 0.0 {
                return Err(errors::division_by_zero());
            }
            Ok(Value::Real(a / b))
        }
        _ => Err(errors::binary_type_mismatch(BinaryOp::Div, lhs, rhs)),
    }
}

/// `⚖️`: operands must be in the same comparable category.
fn equals(lhs: &Value, rhs: &Value) -> Result<Value, Diagnostic> {
    let comparable = (lhs.is_numeric() && rhs.is_numeric())
        || matches!((lhs, rhs), (Value::Str(_), Value::Str(_)))
        || matches!((lhs, rhs), (Value::Bool(_), Value::Bool(_)))
        || matches!((lhs, rhs), (Value::List(_), Value::List(_)));
    if !comparable {
        return Err(errors::binary_type_mismatch(BinaryOp::Eq, lhs, rhs));
    }
    Ok(Value::Bool(lhs == rhs))
}

/// `⬆️` / `⬇️`: numeric ordering, or lexicographic on two strings.
fn ordering(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value, Diagnostic> {
    let greater = match (lhs, rhs) {
        (Value::Str(a), Value::Str(b)) => a > b,
        _ => match (lhs.as_real(), rhs.as_real()) {
            (Some(a), Some(b)) => a > b,
            _ => return Err(errors::binary_type_mismatch(op, lhs, rhs)),
        },
    };
    // Equal operands satisfy neither direction.
    let result = match op {
        BinaryOp::Gt => greater,
        _ => !greater && lhs != rhs,
    };
    Ok(Value::Bool(result))
}

fn logical(op: BinaryOp, lhs: &Value, rhs: &Value) -> Result<Value, Diagnostic> {
    let (Value::Bool(a), Value::Bool(b)) = (lhs, rhs) else {
        let offender = if matches!(lhs, Value::Bool(_)) { rhs } else { lhs };
        return Err(errors::logical_operand_not_bool(op, offender));
    };
    Ok(Value::Bool(match op {
        BinaryOp::And => *a && *b,
        _ => *a || *b,
    }))
}

#[cfg(test)]
mod tests;
