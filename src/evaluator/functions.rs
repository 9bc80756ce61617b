//! The fixed builtin function table.
//!
//! There are no user-definable functions; an unmatched name or arity is an
//! [`EvalError::UnknownFunction`].

use crate::evaluator::EvalError;
use crate::values::Value;

pub(super) fn call(name: &str, args: &[Value]) -> Result<Value, EvalError> {
    match (name, args) {
        ("sin", [x]) => unary_float("sin", x, f64::sin),
        ("cos", [x]) => unary_float("cos", x, f64::cos),
        ("tan", [x]) => unary_float("tan", x, f64::tan),
        ("exp", [x]) => unary_float("exp", x, f64::exp),
        ("log10", [x]) => unary_float("log10", x, f64::log10),

        ("floor", [x]) => unary_float("floor", x, f64::floor),
        ("ceil", [x]) => unary_float("ceil", x, f64::ceil),
        ("round", [x]) => unary_float("round", x, f64::round),
        ("floor", [x, p]) => rounded("floor", x, p, f64::floor),
        ("ceil", [x, p]) => rounded("ceil", x, p, f64::ceil),
        ("round", [x, p]) => rounded("round", x, p, f64::round),

        _ => Err(EvalError::UnknownFunction {
            name: name.to_string(),
            arity: args.len(),
        }),
    }
}

fn unary_float(name: &'static str, arg: &Value, apply: fn(f64) -> f64) -> Result<Value, EvalError> {
    let x = number(name, arg)?;
    Ok(Value::Float(apply(x)))
}

/// `floor`/`ceil`/`round` with a decimal-precision argument: the value is
/// scaled by `10^precision`, rounded, and scaled back.
fn rounded(
    name: &'static str,
    arg: &Value,
    precision: &Value,
    apply: fn(f64) -> f64,
) -> Result<Value, EvalError> {
    let x = number(name, arg)?;
    let digits = match precision {
        Value::Int(p) => *p,
        Value::Float(p) if p.fract() == 0.0 && p.is_finite() => *p as i64,
        other => {
            return Err(EvalError::invalid_operand(
                name,
                format!("precision must be an integer, got {}", other.kind()),
            ));
        }
    };
    let scale = 10f64.powi(digits as i32);
    Ok(Value::Float(apply(x * scale) / scale))
}

fn number(name: &'static str, arg: &Value) -> Result<f64, EvalError> {
    arg.as_number().ok_or_else(|| {
        EvalError::invalid_operand(name, format!("expected a number, got {}", arg.kind()))
    })
}
