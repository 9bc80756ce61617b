//! Public facade over the parser, evaluator, formatter and variable
//! extractor.
//!
//! Every operation accepts either source text or an already-parsed tree;
//! the `*_source` variants parse first. All of them are pure functions over
//! immutable inputs and may be called concurrently without coordination.

pub mod error;
pub mod options;

pub use error::Error;
pub use options::Options;

use std::collections::BTreeSet;

use crate::parser::Expr;
use crate::values::{Scope, Value};
use crate::{evaluator, formatter, parser, vars};

/// Parse a formula into an expression tree.
pub fn parse(source: &str) -> Result<Expr, Error> {
    Ok(parser::parse(source)?)
}

/// Parse and evaluate `source` against `scope`.
pub fn eval(source: &str, scope: &Scope) -> Result<Value, Error> {
    eval_with_options(source, scope, &Options::default())
}

/// Evaluate an already-parsed tree against `scope`.
pub fn eval_expr(expr: &Expr, scope: &Scope) -> Result<Value, Error> {
    Ok(evaluator::eval(expr, scope)?)
}

pub fn eval_with_options(source: &str, scope: &Scope, options: &Options) -> Result<Value, Error> {
    let expr = parser::parse(source)?;
    Ok(evaluator::eval_with_options(&expr, scope, options)?)
}

pub fn eval_expr_with_options(
    expr: &Expr,
    scope: &Scope,
    options: &Options,
) -> Result<Value, Error> {
    Ok(evaluator::eval_with_options(expr, scope, options)?)
}

/// Like [`eval`], but panics on failure instead of returning the error.
///
/// For callers that treat a failing formula as a programming error.
///
/// # Panics
///
/// Panics with the error's display form if parsing or evaluation fails.
pub fn eval_or_panic(source: &str, scope: &Scope) -> Value {
    match eval(source, scope) {
        Ok(value) => value,
        Err(error) => panic!("formula evaluation failed: {error}"),
    }
}

/// Render a tree as minimally-parenthesized source text.
pub fn format(expr: &Expr) -> Result<String, Error> {
    Ok(formatter::format(expr)?)
}

/// Parse `source` and reformat it canonically.
pub fn format_source(source: &str) -> Result<String, Error> {
    let expr = parser::parse(source)?;
    Ok(formatter::format(&expr)?)
}

/// Collect the set of variable names referenced by a tree.
pub fn variables(expr: &Expr) -> Result<BTreeSet<String>, Error> {
    Ok(vars::variables(expr)?)
}
