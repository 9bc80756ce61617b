//! The expression tree produced by the parser.
//!
//! Nodes are immutable once built; evaluation, formatting and variable
//! extraction all operate on shared references and never mutate a tree.

use serde::Serialize;

use crate::parser::{BinaryOp, UnaryOp};

/// A parsed expression node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Literal(Literal),
    /// A variable/field/index path such as `a.b[i + 1].c`.
    Access(Vec<AccessStep>),
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Ternary {
        cond: Box<Expr>,
        if_true: Box<Expr>,
        if_false: Box<Expr>,
    },
    Call {
        name: String,
        args: Vec<Expr>,
    },
}

/// One step of an access chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AccessStep {
    /// `.name` (or the chain's leading variable name).
    Name(String),
    /// `[expr]`; the index expression is evaluated in the root scope.
    Index(Expr),
}

#[derive(Clone, PartialEq, Serialize)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Nil,
}

impl core::fmt::Debug for Literal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "Int({value})"),
            Literal::Float(value) => write!(f, "Float({value})"),
            Literal::Bool(value) => write!(f, "Bool({value})"),
            Literal::Str(value) => write!(f, "Str({value:?})"),
            Literal::Nil => write!(f, "Nil"),
        }
    }
}

impl Expr {
    /// Convenience constructor for a single-name variable reference.
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Access(vec![AccessStep::Name(name.into())])
    }
}
