//! The public error type.
//!
//! Internal errors (parse, evaluation, formatting) convert into this single
//! stable enum at the API boundary.

use thiserror::Error;

use crate::evaluator::EvalError;
use crate::formatter::FormatError;
use crate::parser::ParseError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The source text is not a well-formed formula.
    #[error(transparent)]
    Syntax(#[from] ParseError),

    /// Evaluation failed (type mismatch, missing variable, unknown
    /// function, resource limit).
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// The formatter could not produce text that reparses to the tree.
    #[error(transparent)]
    Format(#[from] FormatError),
}
