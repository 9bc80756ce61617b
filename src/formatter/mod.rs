//! Minimal-parenthesization formatter.
//!
//! Rebuilds source text from a tree by generate-and-test: at each operator
//! node, candidates are emitted in a fixed order from fewest to most
//! parentheses, each candidate is re-parsed, and the first one whose tree
//! structurally equals the original node wins. The parser is therefore the
//! single source of truth for which parentheses are required; the formatter
//! never encodes precedence knowledge of its own.
//!
//! The search re-invokes the full parser per candidate per node. That is
//! deliberate: formulas are short, and the reparse oracle is what makes the
//! round-trip guarantee (`parse(format(t)) == t`) hold by construction.

use thiserror::Error;
use tracing::trace;

use crate::parser::{self, AccessStep, Expr, Literal, UnaryOp};

/// Formatter failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// No generated candidate re-parsed to the original tree. This is an
    /// internal-consistency fault: it cannot arise from trees produced by
    /// the parser, only from hand-built trees the grammar cannot express
    /// (for example a negative number literal).
    #[error("no parenthesization of `{detail}` reparses to the original tree")]
    Unstable { detail: String },
}

/// Render `expr` as source text with the fewest parentheses such that
/// re-parsing yields a structurally identical tree.
pub fn format(expr: &Expr) -> Result<String, FormatError> {
    match expr {
        Expr::Literal(literal) => Ok(format_literal(literal)),

        Expr::Access(steps) => {
            let mut out = String::new();
            for (i, step) in steps.iter().enumerate() {
                match step {
                    AccessStep::Name(name) => {
                        if i > 0 {
                            out.push('.');
                        }
                        out.push_str(name);
                    }
                    // No separator before an index, regardless of the
                    // previous step.
                    AccessStep::Index(index) => {
                        out.push('[');
                        out.push_str(&format(index)?);
                        out.push(']');
                    }
                }
            }
            Ok(out)
        }

        Expr::Call { name, args } => {
            let args = args
                .iter()
                .map(format)
                .collect::<Result<Vec<_>, _>>()?
                .join(", ");
            Ok(format!("{name}({args})"))
        }

        Expr::Unary { op, expr: operand } => {
            let rendered = format(operand)?;
            let candidates = [
                render_unary(*op, &rendered, false),
                render_unary(*op, &rendered, true),
            ];
            select(expr, candidates)
        }

        Expr::Binary { op, left, right } => {
            let l = format(left)?;
            let r = format(right)?;
            let sym = op.symbol();
            let candidates = [
                format!("{l} {sym} {r}"),
                format!("({l}) {sym} {r}"),
                format!("{l} {sym} ({r})"),
                format!("({l}) {sym} ({r})"),
            ];
            select(expr, candidates)
        }

        Expr::Ternary {
            cond,
            if_true,
            if_false,
        } => {
            let c = format(cond)?;
            let t = format(if_true)?;
            let f = format(if_false)?;
            // All eight combinations, fewest parentheses first, with the
            // condition varying slowest.
            let mut candidates = Vec::with_capacity(8);
            for c in [c.clone(), format!("({c})")] {
                for t in [t.clone(), format!("({t})")] {
                    for f in [f.clone(), format!("({f})")] {
                        candidates.push(format!("{c} ? {t} : {f}"));
                    }
                }
            }
            select(expr, candidates)
        }
    }
}

fn render_unary(op: UnaryOp, operand: &str, parens: bool) -> String {
    let operand = if parens {
        format!("({operand})")
    } else {
        operand.to_string()
    };
    match op {
        UnaryOp::Not => format!("not {operand}"),
        UnaryOp::BitNot => format!("~{operand}"),
        UnaryOp::Factorial => format!("{operand}!"),
    }
}

fn format_literal(literal: &Literal) -> String {
    match literal {
        Literal::Int(n) => n.to_string(),
        Literal::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{f:.1}"),
        Literal::Float(f) => format!("{f}"),
        Literal::Bool(b) => b.to_string(),
        Literal::Str(s) => quote(s),
        Literal::Nil => "nil".to_string(),
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Return the first candidate that re-parses to `expr`.
fn select(
    expr: &Expr,
    candidates: impl IntoIterator<Item = String>,
) -> Result<String, FormatError> {
    for candidate in candidates {
        if let Ok(reparsed) = parser::parse(&candidate)
            && reparsed == *expr
        {
            trace!(candidate = %candidate, "selected parenthesization");
            return Ok(candidate);
        }
    }
    Err(FormatError::Unstable {
        detail: format!("{expr:?}"),
    })
}
