//! Tree-walking evaluator for parsed formulas.
//!
//! ## Design principles
//!
//! - **Never panic**: integer arithmetic wraps, shifts mask, and every type
//!   mismatch is a returned error.
//! - **Stack-safe**: the fold engine tracks recursion depth against
//!   [`Options::max_depth`].
//! - **Scope-owned by the caller**: the engine reads a [`Scope`] and never
//!   mutates it.
//!
//! ## Example
//!
//! ```
//! use formulon::{Scope, Value, parser};
//!
//! let expr = parser::parse("a.b + 1").unwrap();
//! let scope = Scope::new().with("a", Scope::new().with("b", 41));
//! let result = formulon::evaluator::eval(&expr, &scope).unwrap();
//! assert_eq!(result, Value::Int(42));
//! ```

mod error;
mod eval;
mod functions;
mod operators;
mod resolver;

#[cfg(test)]
mod eval_test;

pub use error::EvalError;

use tracing::debug;

use crate::api::Options;
use crate::fold;
use crate::parser::Expr;
use crate::values::{Scope, Value};

/// Evaluate an expression against a scope with default limits.
pub fn eval(expr: &Expr, scope: &Scope) -> Result<Value, EvalError> {
    eval_with_options(expr, scope, &Options::default())
}

/// Evaluate with a custom depth limit.
pub fn eval_with_options(expr: &Expr, scope: &Scope, options: &Options) -> Result<Value, EvalError> {
    debug!(max_depth = options.max_depth, "evaluating expression");
    let mut evaluator = eval::Evaluator::new(scope, scope, options);
    fold::fold_with_limits(expr, &mut evaluator, options.max_depth)
}
