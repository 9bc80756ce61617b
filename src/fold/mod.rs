//! Generic post-order fold over expression trees.
//!
//! Both the evaluator and the variable extractor are [`Folder`]
//! implementations plugged into the same traversal. The traversal itself is
//! tag-agnostic glue; it only decides the error policy per node shape:
//!
//! - Fixed-arity nodes (unary, binary, ternary) reduce children left to
//!   right and stop at the first failing child ([`reduce_in_order`]).
//! - Call arguments are all reduced; failures are collected and handed to
//!   [`Folder::aggregate`] ([`reduce_aggregating`]).
//! - Access chains are passed through unreduced: resolving them needs scope
//!   access the traversal does not have, so their structure (including
//!   embedded index expressions) is opaque here.
//! - Literals go straight to the handler.

use tracing::trace;

use crate::parser::{AccessStep, BinaryOp, Expr, Literal, UnaryOp};

/// Default cap on fold recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Per-node handler invoked by [`fold`] after children are reduced.
pub trait Folder {
    type Output;
    type Error;

    fn literal(&mut self, literal: &Literal) -> Result<Self::Output, Self::Error>;

    /// Called with the chain unreduced; see the module docs.
    fn access(&mut self, steps: &[AccessStep]) -> Result<Self::Output, Self::Error>;

    fn unary(&mut self, op: UnaryOp, operand: Self::Output) -> Result<Self::Output, Self::Error>;

    fn binary(
        &mut self,
        op: BinaryOp,
        left: Self::Output,
        right: Self::Output,
    ) -> Result<Self::Output, Self::Error>;

    /// All three children are reduced before this runs; branch selection
    /// cannot short-circuit evaluation of the untaken branch.
    fn ternary(
        &mut self,
        cond: Self::Output,
        if_true: Self::Output,
        if_false: Self::Output,
    ) -> Result<Self::Output, Self::Error>;

    fn call(&mut self, name: &str, args: Vec<Self::Output>) -> Result<Self::Output, Self::Error>;

    /// Combine the ordered failures of a call's arguments into one error.
    fn aggregate(&mut self, errors: Vec<Self::Error>) -> Self::Error;

    /// Invoked when the traversal exceeds its depth limit.
    fn depth_exceeded(&mut self, depth: usize, max_depth: usize) -> Self::Error;
}

/// Fold an expression with the default depth limit.
pub fn fold<F: Folder>(expr: &Expr, folder: &mut F) -> Result<F::Output, F::Error> {
    fold_with_limits(expr, folder, DEFAULT_MAX_DEPTH)
}

/// Fold an expression, erroring via [`Folder::depth_exceeded`] once nesting
/// passes `max_depth`.
pub fn fold_with_limits<F: Folder>(
    expr: &Expr,
    folder: &mut F,
    max_depth: usize,
) -> Result<F::Output, F::Error> {
    fold_at(expr, folder, 0, max_depth)
}

fn fold_at<F: Folder>(
    expr: &Expr,
    folder: &mut F,
    depth: usize,
    max_depth: usize,
) -> Result<F::Output, F::Error> {
    if depth >= max_depth {
        return Err(folder.depth_exceeded(depth, max_depth));
    }
    trace!(depth, node = ?node_tag(expr), "folding");

    match expr {
        Expr::Literal(literal) => folder.literal(literal),

        Expr::Access(steps) => folder.access(steps),

        Expr::Unary { op, expr } => {
            let [operand] = reduce_in_order([expr], folder, depth, max_depth)?;
            folder.unary(*op, operand)
        }

        Expr::Binary { op, left, right } => {
            let [left, right] = reduce_in_order([left, right], folder, depth, max_depth)?;
            folder.binary(*op, left, right)
        }

        Expr::Ternary {
            cond,
            if_true,
            if_false,
        } => {
            let [cond, if_true, if_false] =
                reduce_in_order([cond, if_true, if_false], folder, depth, max_depth)?;
            folder.ternary(cond, if_true, if_false)
        }

        Expr::Call { name, args } => {
            let args = reduce_aggregating(args, folder, depth, max_depth)?;
            folder.call(name, args)
        }
    }
}

/// First-failure short-circuit strategy for fixed-arity nodes.
fn reduce_in_order<F: Folder, const N: usize>(
    children: [&Box<Expr>; N],
    folder: &mut F,
    depth: usize,
    max_depth: usize,
) -> Result<[F::Output; N], F::Error> {
    let mut reduced = Vec::with_capacity(N);
    for child in children {
        reduced.push(fold_at(child, folder, depth + 1, max_depth)?);
    }
    match reduced.try_into() {
        Ok(array) => Ok(array),
        Err(_) => unreachable!("reduced exactly N children"),
    }
}

/// Aggregating strategy for call arguments: every argument is reduced, and
/// any failures are combined via [`Folder::aggregate`] in argument order.
fn reduce_aggregating<F: Folder>(
    args: &[Expr],
    folder: &mut F,
    depth: usize,
    max_depth: usize,
) -> Result<Vec<F::Output>, F::Error> {
    let mut values = Vec::with_capacity(args.len());
    let mut errors = Vec::new();
    for arg in args {
        match fold_at(arg, folder, depth + 1, max_depth) {
            Ok(value) => values.push(value),
            Err(error) => errors.push(error),
        }
    }
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(folder.aggregate(errors))
    }
}

fn node_tag(expr: &Expr) -> &'static str {
    match expr {
        Expr::Literal(_) => "literal",
        Expr::Access(_) => "access",
        Expr::Unary { .. } => "unary",
        Expr::Binary { .. } => "binary",
        Expr::Ternary { .. } => "ternary",
        Expr::Call { .. } => "call",
    }
}
