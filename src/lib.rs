//! Formulon - safe evaluation of user-authored formulas
//!
//! # Overview
//!
//! Formulon parses arithmetic/boolean/bitwise formulas into an immutable
//! expression tree, evaluates the tree against a caller-supplied variable
//! scope, regenerates minimally-parenthesized source text from a tree, and
//! enumerates the variable names a formula references. It is aimed at hosts
//! that accept end-user-authored formulas, such as:
//!
//! - Business-rule and formula-field engines
//! - Validation and filter conditions
//! - Spreadsheet-style computed values
//!
//! # Quick start
//!
//! ```
//! use formulon::{Scope, Value};
//!
//! let scope = Scope::new()
//!     .with("price", 12.5)
//!     .with("qty", 4);
//!
//! let total = formulon::eval("price * qty", &scope).unwrap();
//! assert_eq!(total, Value::Float(50.0));
//!
//! // Reformatting drops only the parentheses the grammar does not need.
//! assert_eq!(formulon::format_source("(1+2)*3").unwrap(), "(1 + 2) * 3");
//! assert_eq!(formulon::format_source("1+(2*3)").unwrap(), "1 + 2 * 3");
//!
//! // Which variables does a formula depend on?
//! let expr = formulon::parse("a.b + list[n]").unwrap();
//! let names = formulon::variables(&expr).unwrap();
//! assert_eq!(names.into_iter().collect::<Vec<_>>(), ["a", "list", "n"]);
//! ```
//!
//! # Guarantees
//!
//! - **Round-trip**: `parse(format(t))` is structurally identical to `t`;
//!   the formatter uses the parser itself as its oracle.
//! - **No panics on untrusted input**: arithmetic wraps, every type error is
//!   a returned [`Error`], and recursion depth is capped.
//! - **Pure calls**: scopes are never mutated; unlimited concurrent calls
//!   are safe.

pub mod api;
pub mod evaluator;
pub mod fold;
pub mod formatter;
pub mod parser;
pub mod values;
pub mod vars;

pub use api::{
    Error, Options, eval, eval_expr, eval_expr_with_options, eval_or_panic, eval_with_options,
    format, format_source, parse, variables,
};
pub use parser::{AccessStep, BinaryOp, Expr, Literal, UnaryOp};
pub use values::{Scope, Value};
