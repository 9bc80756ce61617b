//! The evaluator: a [`Folder`] that gives every node tag its runtime
//! semantics.

use crate::api::Options;
use crate::evaluator::{EvalError, functions, operators, resolver};
use crate::fold::Folder;
use crate::parser::{AccessStep, BinaryOp, Literal, UnaryOp};
use crate::values::{Scope, Value};

pub(super) struct Evaluator<'s> {
    /// Scope access chains resolve against.
    scope: &'s Scope,
    /// Outermost scope; index sub-expressions always evaluate here.
    root: &'s Scope,
    options: &'s Options,
}

impl<'s> Evaluator<'s> {
    pub(super) fn new(scope: &'s Scope, root: &'s Scope, options: &'s Options) -> Self {
        Self {
            scope,
            root,
            options,
        }
    }
}

impl Folder for Evaluator<'_> {
    type Output = Value;
    type Error = EvalError;

    fn literal(&mut self, literal: &Literal) -> Result<Value, EvalError> {
        Ok(match literal {
            Literal::Int(n) => Value::Int(*n),
            Literal::Float(f) => Value::Float(*f),
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Str(s) => Value::Str(s.clone()),
            Literal::Nil => Value::Nil,
        })
    }

    fn access(&mut self, steps: &[AccessStep]) -> Result<Value, EvalError> {
        resolver::resolve(steps, self.scope, self.root, self.options)
    }

    fn unary(&mut self, op: UnaryOp, operand: Value) -> Result<Value, EvalError> {
        operators::eval_unary(op, operand)
    }

    fn binary(&mut self, op: BinaryOp, left: Value, right: Value) -> Result<Value, EvalError> {
        operators::eval_binary(op, left, right)
    }

    /// Both branches arrive already evaluated; the condition only selects
    /// which result to return.
    fn ternary(&mut self, cond: Value, if_true: Value, if_false: Value) -> Result<Value, EvalError> {
        Ok(if cond.is_truthy() { if_true } else { if_false })
    }

    fn call(&mut self, name: &str, args: Vec<Value>) -> Result<Value, EvalError> {
        functions::call(name, &args)
    }

    fn aggregate(&mut self, errors: Vec<EvalError>) -> EvalError {
        EvalError::Aggregate(errors)
    }

    fn depth_exceeded(&mut self, depth: usize, max_depth: usize) -> EvalError {
        EvalError::StackOverflow { depth, max_depth }
    }
}
