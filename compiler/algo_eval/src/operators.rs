//! Operator semantics.
//!
//! Arithmetic needs both operands of the same numeric type. Comparisons
//! also accept mixed `entier`/`réel` operands, promoting the integer side
//! for the comparison only.

use std::cmp::Ordering;

use algo_ir::{BoolOp, Operator};

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, unary_type_mismatch, EvalResult,
};
use crate::value::Value;

#[inline]
fn checked_arith(result: Option<i64>, operation: &'static str) -> EvalResult<Value> {
    result.map(Value::Int).ok_or_else(|| integer_overflow(operation))
}

/// Apply an arithmetic or comparison operator.
pub fn evaluate_binary(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
    match op {
        Operator::Plus | Operator::Minus | Operator::Star | Operator::Slash => {
            arithmetic(op, left, right)
        }
        Operator::Eq => equal(op, left, right).map(Value::Bool),
        Operator::NotEq => equal(op, left, right).map(|eq| Value::Bool(!eq)),
        Operator::Lt | Operator::LtEq | Operator::Gt | Operator::GtEq => {
            let ordering = compare(op, left, right)?;
            Ok(Value::Bool(match op {
                Operator::Lt => ordering == Ordering::Less,
                Operator::LtEq => ordering != Ordering::Greater,
                Operator::Gt => ordering == Ordering::Greater,
                _ => ordering != Ordering::Less,
            }))
        }
        Operator::Assign | Operator::Colon => Err(binary_type_mismatch(
            op.as_str(),
            left.type_name(),
            right.type_name(),
        )),
    }
}

fn arithmetic(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => match op {
            Operator::Plus => checked_arith(a.checked_add(*b), "addition"),
            Operator::Minus => checked_arith(a.checked_sub(*b), "subtraction"),
            Operator::Star => checked_arith(a.checked_mul(*b), "multiplication"),
            _ if *b == 0 => Err(division_by_zero()),
            _ => checked_arith(a.checked_div(*b), "division"),
        },
        (Value::Float(a), Value::Float(b)) => match op {
            Operator::Plus => Ok(Value::Float(a + b)),
            Operator::Minus => Ok(Value::Float(a - b)),
            Operator::Star => Ok(Value::Float(a * b)),
            _ if *b == 0.0 => Err(division_by_zero()),
            _ => Ok(Value::Float(a / b)),
        },
        _ => Err(binary_type_mismatch(
            op.as_str(),
            left.type_name(),
            right.type_name(),
        )),
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "integer side is promoted to réel for mixed comparisons"
)]
fn numeric_pair(left: &Value, right: &Value) -> Option<(f64, f64)> {
    match (left, right) {
        (Value::Int(a), Value::Float(b)) => Some((*a as f64, *b)),
        (Value::Float(a), Value::Int(b)) => Some((*a, *b as f64)),
        (Value::Float(a), Value::Float(b)) => Some((*a, *b)),
        _ => None,
    }
}

#[expect(clippy::float_cmp, reason = "language equality on réel is exact")]
fn equal(op: Operator, left: &Value, right: &Value) -> EvalResult<bool> {
    if let Some((a, b)) = numeric_pair(left, right) {
        return Ok(a == b);
    }
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(a == b),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Char(a), Value::Char(b)) => Ok(a == b),
        (Value::Str(a), Value::Str(b)) => Ok(a == b),
        (Value::Array(_), Value::Array(_)) => Ok(left == right),
        _ => Err(binary_type_mismatch(
            op.as_str(),
            left.type_name(),
            right.type_name(),
        )),
    }
}

fn compare(op: Operator, left: &Value, right: &Value) -> EvalResult<Ordering> {
    let mismatch = || binary_type_mismatch(op.as_str(), left.type_name(), right.type_name());
    if let Some((a, b)) = numeric_pair(left, right) {
        return a.partial_cmp(&b).ok_or_else(mismatch);
    }
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
        (Value::Char(a), Value::Char(b)) => Ok(a.cmp(b)),
        (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
        _ => Err(mismatch()),
    }
}

/// `ET` / `OU` on two booleans.
pub fn evaluate_connective(op: BoolOp, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left.as_bool(), right.as_bool()) {
        (Some(a), Some(b)) => Ok(Value::Bool(match op {
            BoolOp::Et => a && b,
            BoolOp::Ou => a || b,
        })),
        _ => Err(binary_type_mismatch(
            op.as_str(),
            left.type_name(),
            right.type_name(),
        )),
    }
}

/// Unary `-`.
pub fn negate(value: &Value) -> EvalResult<Value> {
    match value {
        Value::Int(n) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        Value::Float(x) => Ok(Value::Float(-x)),
        _ => Err(unary_type_mismatch("-", value.type_name())),
    }
}
