use pretty_assertions::assert_eq;

use crate::api::Options;
use crate::evaluator::{EvalError, eval, eval_with_options};
use crate::parser::parse;
use crate::values::{Scope, Value};

fn run(source: &str) -> Result<Value, EvalError> {
    run_in(source, &Scope::new())
}

fn run_in(source: &str, scope: &Scope) -> Result<Value, EvalError> {
    eval(&parse(source).unwrap(), scope)
}

#[test]
fn literals_evaluate_to_themselves() {
    assert_eq!(run("42").unwrap(), Value::Int(42));
    assert_eq!(run("0.25").unwrap(), Value::Float(0.25));
    assert_eq!(run("12.").unwrap(), Value::Float(12.0));
    assert_eq!(run(".12").unwrap(), Value::Float(0.12));
    assert_eq!(run("true").unwrap(), Value::Bool(true));
    assert_eq!(run("nil").unwrap(), Value::Nil);
    assert_eq!(run("\"hi\\\"there\"").unwrap(), Value::Str("hi\"there".into()));
}

#[test]
fn arithmetic_follows_precedence() {
    assert_eq!(run("1 + 2").unwrap(), Value::Int(3));
    assert_eq!(run("1 + 2 * 3").unwrap(), Value::Int(7));
    assert_eq!(run("(1 + 2) * 3").unwrap(), Value::Int(9));
    assert_eq!(run("6 / 2").unwrap(), Value::Float(3.0));
    assert_eq!(run("2 ^ 3").unwrap(), Value::Float(8.0));
    assert_eq!(run("2 ^ 3 ^ 2").unwrap(), Value::Float(512.0));
}

#[test]
fn bitwise_family() {
    assert_eq!(run("12 & 10").unwrap(), Value::Int(8));
    assert_eq!(run("12 | 10").unwrap(), Value::Int(14));
    assert_eq!(run("12 |^ 10").unwrap(), Value::Int(6));
    assert_eq!(run("1 << 4").unwrap(), Value::Int(16));
    assert_eq!(run("16 >> 2").unwrap(), Value::Int(4));
    assert_eq!(run("~0").unwrap(), Value::Int(-1));
}

#[test]
fn comparisons_and_logic() {
    assert_eq!(run("1 < 2").unwrap(), Value::Bool(true));
    assert_eq!(run("2 >= 2.0").unwrap(), Value::Bool(true));
    assert_eq!(run("1 == 1.0").unwrap(), Value::Bool(true));
    assert_eq!(run("1 != 2").unwrap(), Value::Bool(true));
    assert_eq!(run("true && false").unwrap(), Value::Bool(false));
    assert_eq!(run("true || false").unwrap(), Value::Bool(true));
    assert_eq!(run("not true").unwrap(), Value::Bool(false));
}

#[test]
fn logic_rejects_non_booleans() {
    assert!(matches!(
        run("1 && true").unwrap_err(),
        EvalError::InvalidOperand { op: "&&", .. }
    ));
    assert!(matches!(
        run("not 1").unwrap_err(),
        EvalError::InvalidOperand { op: "not", .. }
    ));
}

#[test]
fn ternary_uses_generalized_truthiness() {
    assert_eq!(run("true ? 1 : 2").unwrap(), Value::Int(1));
    assert_eq!(run("nil ? 1 : 2").unwrap(), Value::Int(2));
    assert_eq!(run("false ? 1 : 2").unwrap(), Value::Int(2));
    // 0 and "" are truthy, unlike in C-family truthiness.
    assert_eq!(run("0 ? 1 : 2").unwrap(), Value::Int(1));
    assert_eq!(run("\"\" ? 1 : 2").unwrap(), Value::Int(1));
}

#[test]
fn ternary_evaluates_both_branches() {
    // The untaken branch still runs: a failing false-branch fails the whole
    // call even when the condition is true.
    let err = run("true ? 1 : missing").unwrap_err();
    assert!(matches!(err, EvalError::KeyError { .. }));
}

#[test]
fn scope_access() {
    let scope = Scope::new()
        .with("a", Scope::new().with("b", 42))
        .with("list", vec![1i64, 2, 3]);
    assert_eq!(run_in("a.b", &scope).unwrap(), Value::Int(42));
    assert_eq!(run_in("list[2]", &scope).unwrap(), Value::Int(3));
    assert_eq!(run_in("list[1 + 1]", &scope).unwrap(), Value::Int(3));

    let err = run_in("a.b", &Scope::new()).unwrap_err();
    assert!(matches!(err, EvalError::KeyError { .. }));
}

#[test]
fn builtin_functions() {
    assert_eq!(run("floor(2.7)").unwrap(), Value::Float(2.0));
    assert_eq!(run("ceil(2.1)").unwrap(), Value::Float(3.0));
    assert_eq!(run("round(2.5)").unwrap(), Value::Float(3.0));
    assert_eq!(run("exp(0)").unwrap(), Value::Float(1.0));
    assert!(matches!(
        run("mystery(1)").unwrap_err(),
        EvalError::UnknownFunction { .. }
    ));
}

#[test]
fn call_arguments_aggregate_errors() {
    let err = run("floor(missing1, missing2)").unwrap_err();
    let EvalError::Aggregate(errors) = err else {
        panic!("expected aggregate, got {err:?}");
    };
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| matches!(e, EvalError::KeyError { .. })));
}

#[test]
fn fixed_arity_short_circuits() {
    // Only the first failing operand is reported.
    let err = run("missing1 + missing2").unwrap_err();
    assert_eq!(
        err,
        EvalError::KeyError {
            detail: "unknown variable `missing1`".to_string()
        }
    );
}

#[test]
fn depth_limit_is_enforced() {
    crate::test_utils::init_test_logging();
    let source = format!("{}1", "~".repeat(64));
    let options = Options { max_depth: 16 };
    let err = eval_with_options(&parse(&source).unwrap(), &Scope::new(), &options).unwrap_err();
    assert!(matches!(err, EvalError::StackOverflow { max_depth: 16, .. }));
}

#[test]
fn factorial_postfix() {
    assert_eq!(run("5!").unwrap(), Value::Int(120));
    assert_eq!(run("3! + 1").unwrap(), Value::Int(7));
}
