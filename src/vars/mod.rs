//! Variable extraction: which scope names does an expression reference?

use std::collections::BTreeSet;

use crate::evaluator::EvalError;
use crate::fold::{self, Folder};
use crate::parser::{AccessStep, BinaryOp, Expr, Literal, UnaryOp};

/// Collect the de-duplicated set of variable names referenced by `expr`.
///
/// An access chain contributes its root name; index sub-expressions are
/// searched recursively, so `list[n]` contributes both `list` and `n`.
/// Intermediate field names are not variables and are not collected.
pub fn variables(expr: &Expr) -> Result<BTreeSet<String>, EvalError> {
    fold::fold(expr, &mut VariableExtractor)
}

struct VariableExtractor;

impl VariableExtractor {
    fn union(sets: impl IntoIterator<Item = BTreeSet<String>>) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        for set in sets {
            out.extend(set);
        }
        out
    }
}

impl Folder for VariableExtractor {
    type Output = BTreeSet<String>;
    type Error = EvalError;

    fn literal(&mut self, _literal: &Literal) -> Result<BTreeSet<String>, EvalError> {
        Ok(BTreeSet::new())
    }

    fn access(&mut self, steps: &[AccessStep]) -> Result<BTreeSet<String>, EvalError> {
        let mut names = BTreeSet::new();
        if let Some(AccessStep::Name(root)) = steps.first() {
            names.insert(root.clone());
        }
        for step in steps {
            if let AccessStep::Index(index) = step {
                names.extend(fold::fold(index, self)?);
            }
        }
        Ok(names)
    }

    fn unary(&mut self, _op: UnaryOp, operand: BTreeSet<String>) -> Result<BTreeSet<String>, EvalError> {
        Ok(operand)
    }

    fn binary(
        &mut self,
        _op: BinaryOp,
        left: BTreeSet<String>,
        right: BTreeSet<String>,
    ) -> Result<BTreeSet<String>, EvalError> {
        Ok(Self::union([left, right]))
    }

    fn ternary(
        &mut self,
        cond: BTreeSet<String>,
        if_true: BTreeSet<String>,
        if_false: BTreeSet<String>,
    ) -> Result<BTreeSet<String>, EvalError> {
        Ok(Self::union([cond, if_true, if_false]))
    }

    fn call(
        &mut self,
        _name: &str,
        args: Vec<BTreeSet<String>>,
    ) -> Result<BTreeSet<String>, EvalError> {
        // The function name is a builtin, not a variable.
        Ok(Self::union(args))
    }

    fn aggregate(&mut self, mut errors: Vec<EvalError>) -> EvalError {
        // Extraction itself cannot fail per-argument, but the traversal
        // contract requires a combiner.
        if errors.len() == 1 {
            errors.remove(0)
        } else {
            EvalError::Aggregate(errors)
        }
    }

    fn depth_exceeded(&mut self, depth: usize, max_depth: usize) -> EvalError {
        EvalError::StackOverflow { depth, max_depth }
    }
}
