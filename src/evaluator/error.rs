//! Runtime evaluation errors.
//!
//! Fixed-arity nodes surface the first failing child; call arguments are
//! evaluated in full and their failures collected into [`EvalError::Aggregate`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// An operator or builtin function was applied to a value kind it does
    /// not accept.
    #[error("invalid operand for `{op}`: {detail}")]
    InvalidOperand { op: &'static str, detail: String },

    /// A scope lookup or index step failed.
    #[error("key error: {detail}")]
    KeyError { detail: String },

    /// No builtin matches the called name and arity.
    #[error("unknown function `{name}` with {arity} argument(s)")]
    UnknownFunction { name: String, arity: usize },

    /// Catch-all for node/value combinations with no defined semantics.
    #[error("unsupported operation: {detail}")]
    Unsupported { detail: String },

    /// Ordered collection of every failing call argument.
    #[error("{} argument(s) failed to evaluate", .0.len())]
    Aggregate(Vec<EvalError>),

    /// Evaluation recursion exceeded its limit.
    #[error("evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}

impl EvalError {
    pub(crate) fn invalid_operand(op: &'static str, detail: impl Into<String>) -> Self {
        EvalError::InvalidOperand {
            op,
            detail: detail.into(),
        }
    }

    pub(crate) fn key(detail: impl Into<String>) -> Self {
        EvalError::KeyError {
            detail: detail.into(),
        }
    }
}
