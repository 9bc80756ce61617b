//! Resolves access chains (`a.b[i].c`) against a scope.

use crate::api::Options;
use crate::evaluator::EvalError;
use crate::parser::AccessStep;
use crate::values::{Scope, Value};

/// Walk `steps` left to right against `scope`.
///
/// Index sub-expressions are always evaluated in `root` (the outermost
/// scope), never in the value being traversed. An exhausted chain resolves
/// to the current value.
pub(super) fn resolve(
    steps: &[AccessStep],
    scope: &Scope,
    root: &Scope,
    options: &Options,
) -> Result<Value, EvalError> {
    let Some((first, rest)) = steps.split_first() else {
        return Err(EvalError::Unsupported {
            detail: "empty access chain".to_string(),
        });
    };
    let AccessStep::Name(name) = first else {
        return Err(EvalError::Unsupported {
            detail: "access chain must start with a variable name".to_string(),
        });
    };

    let mut current = scope
        .get(name)
        .ok_or_else(|| EvalError::key(format!("unknown variable `{name}`")))?;

    for step in rest {
        current = match step {
            AccessStep::Name(name) => match current {
                Value::Map(map) => map.get(name).ok_or_else(|| {
                    EvalError::key(format!("no entry `{name}` in nested scope"))
                })?,
                other => {
                    return Err(EvalError::key(format!(
                        "cannot access field `{name}` on {}",
                        other.kind()
                    )));
                }
            },
            AccessStep::Index(index_expr) => {
                let index = super::eval_with_options(index_expr, root, options)?;
                let Value::Int(i) = index else {
                    return Err(EvalError::key(format!(
                        "index must be an integer, got {}",
                        index.kind()
                    )));
                };
                let Value::Seq(items) = current else {
                    return Err(EvalError::key(format!(
                        "cannot index into {}",
                        current.kind()
                    )));
                };
                let slot = usize::try_from(i)
                    .ok()
                    .and_then(|i| items.get(i))
                    .ok_or_else(|| {
                        EvalError::key(format!(
                            "index {i} out of range for sequence of length {}",
                            items.len()
                        ))
                    })?;
                slot
            }
        };
    }

    Ok(current.clone())
}
