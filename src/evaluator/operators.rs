//! Binary and unary operator kernels.
//!
//! Integer arithmetic wraps instead of panicking; float arithmetic follows
//! IEEE 754 (division by zero yields an infinity, not an error).

use crate::evaluator::EvalError;
use crate::parser::{BinaryOp, UnaryOp};
use crate::values::Value;

pub(super) fn eval_binary(op: BinaryOp, left: Value, right: Value) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => arithmetic(op, left, right, i64::wrapping_add, |a, b| a + b),
        BinaryOp::Sub => arithmetic(op, left, right, i64::wrapping_sub, |a, b| a - b),
        BinaryOp::Mul => arithmetic(op, left, right, i64::wrapping_mul, |a, b| a * b),

        // True division: always a float, even for two integers.
        BinaryOp::Div => {
            let (a, b) = numbers(op, &left, &right)?;
            Ok(Value::Float(a / b))
        }

        // Power is floating exponentiation regardless of operand kinds.
        BinaryOp::Pow => {
            let (a, b) = numbers(op, &left, &right)?;
            Ok(Value::Float(a.powf(b)))
        }

        BinaryOp::BitAnd => bitwise(op, &left, &right, |a, b| a & b),
        BinaryOp::BitOr => bitwise(op, &left, &right, |a, b| a | b),
        BinaryOp::BitXor => bitwise(op, &left, &right, |a, b| a ^ b),
        // Shift amounts are taken modulo the word size rather than panicking.
        BinaryOp::Shl => bitwise(op, &left, &right, |a, b| a.wrapping_shl(b as u32)),
        BinaryOp::Shr => bitwise(op, &left, &right, |a, b| a.wrapping_shr(b as u32)),

        BinaryOp::Eq => Ok(Value::Bool(values_equal(&left, &right))),
        BinaryOp::Neq => Ok(Value::Bool(!values_equal(&left, &right))),

        // Ordering deliberately carries no type guard: it delegates to the
        // host's partial ordering, and only an incomparable pair fails, as
        // the catch-all error rather than an invalid-operand error.
        BinaryOp::Gt | BinaryOp::Gte | BinaryOp::Lt | BinaryOp::Lte => {
            match left.partial_cmp(&right) {
                Some(ordering) => Ok(Value::Bool(match op {
                    BinaryOp::Gt => ordering.is_gt(),
                    BinaryOp::Gte => ordering.is_ge(),
                    BinaryOp::Lt => ordering.is_lt(),
                    BinaryOp::Lte => ordering.is_le(),
                    _ => unreachable!(),
                })),
                None => Err(EvalError::Unsupported {
                    detail: format!(
                        "cannot order {} against {}",
                        left.kind(),
                        right.kind()
                    ),
                }),
            }
        }

        // Strict booleans only; there is no truthiness for `&&`/`||`.
        BinaryOp::And | BinaryOp::Or => {
            let (Some(a), Some(b)) = (left.as_bool(), right.as_bool()) else {
                return Err(EvalError::invalid_operand(
                    op.symbol(),
                    format!("expected booleans, got {} and {}", left.kind(), right.kind()),
                ));
            };
            Ok(Value::Bool(if op == BinaryOp::And { a && b } else { a || b }))
        }
    }
}

pub(super) fn eval_unary(op: UnaryOp, operand: Value) -> Result<Value, EvalError> {
    match op {
        UnaryOp::Not => match operand.as_bool() {
            Some(b) => Ok(Value::Bool(!b)),
            None => Err(EvalError::invalid_operand(
                op.symbol(),
                format!("expected a boolean, got {}", operand.kind()),
            )),
        },
        UnaryOp::BitNot => match operand.as_int() {
            Some(n) => Ok(Value::Int(!n)),
            None => Err(EvalError::invalid_operand(
                op.symbol(),
                format!("expected an integer, got {}", operand.kind()),
            )),
        },
        UnaryOp::Factorial => factorial(&operand),
    }
}

/// Equality across all value kinds. Integers and floats with the same
/// textual/numeric magnitude compare equal; everything else is structural.
pub(super) fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(l), Value::Float(r)) | (Value::Float(r), Value::Int(l)) => (*l as f64) == *r,
        _ => left == right,
    }
}

fn arithmetic(
    op: BinaryOp,
    left: Value,
    right: Value,
    int_op: fn(i64, i64) -> i64,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(int_op(*a, *b))),
        _ => {
            let (a, b) = numbers(op, &left, &right)?;
            Ok(Value::Float(float_op(a, b)))
        }
    }
}

fn numbers(op: BinaryOp, left: &Value, right: &Value) -> Result<(f64, f64), EvalError> {
    match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(EvalError::invalid_operand(
            op.symbol(),
            format!(
                "expected numeric operands, got {} and {}",
                left.kind(),
                right.kind()
            ),
        )),
    }
}

fn bitwise(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    apply: fn(i64, i64) -> i64,
) -> Result<Value, EvalError> {
    match (left.as_int(), right.as_int()) {
        (Some(a), Some(b)) => Ok(Value::Int(apply(a, b))),
        _ => Err(EvalError::invalid_operand(
            op.symbol(),
            format!(
                "expected integer operands, got {} and {}",
                left.kind(),
                right.kind()
            ),
        )),
    }
}

/// Factorial over non-negative integers (an integral float is accepted).
/// The product wraps on overflow like the other integer kernels.
fn factorial(operand: &Value) -> Result<Value, EvalError> {
    let n = match operand {
        Value::Int(n) => *n,
        Value::Float(f) if f.fract() == 0.0 && f.is_finite() => *f as i64,
        Value::Float(_) => {
            return Err(EvalError::invalid_operand(
                "!",
                "factorial requires an integral value".to_string(),
            ));
        }
        other => {
            return Err(EvalError::invalid_operand(
                "!",
                format!("expected a number, got {}", other.kind()),
            ));
        }
    };
    if n < 0 {
        return Err(EvalError::invalid_operand(
            "!",
            "factorial is undefined for negative values".to_string(),
        ));
    }
    let mut acc: i64 = 1;
    for k in 2..=n {
        acc = acc.wrapping_mul(k);
    }
    Ok(Value::Int(acc))
}
