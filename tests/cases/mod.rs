//! Shared helpers and the `test_case!` macro for the integration suites.
//!
//! Every formatted case is checked three ways: the rendered text must match,
//! reparsing it must reproduce the original tree, and reformatting must be a
//! fixpoint.
#![allow(dead_code)]

use pretty_assertions::assert_eq;

use formulon::{Expr, Scope, Value};

pub fn parse(input: &str) -> Expr {
    formulon::parse(input).unwrap_or_else(|e| panic!("`{input}` failed to parse: {e}"))
}

pub fn check_roundtrip(input: &str, formatted: &str) {
    let parsed = parse(input);
    let rendered = formulon::format(&parsed)
        .unwrap_or_else(|e| panic!("`{input}` failed to format: {e}"));
    assert_eq!(rendered, formatted, "formatting `{input}`");
    assert_eq!(parse(&rendered), parsed, "round-trip of `{input}`");
    assert_eq!(
        formulon::format(&parse(&rendered)).unwrap(),
        rendered,
        "reformatting `{rendered}` must be a fixpoint"
    );
}

pub fn check_value(input: &str, scope: &Scope, expected: Value) {
    let value = formulon::eval(input, scope)
        .unwrap_or_else(|e| panic!("`{input}` failed to evaluate: {e}"));
    assert_eq!(value, expected, "value of `{input}`");
}

macro_rules! test_case {
    {
        name: $name:ident,
        input: $input:expr,
        formatted: $formatted:expr $(,)?
    } => {
        #[test]
        fn $name() {
            $crate::cases::check_roundtrip($input, $formatted);
        }
    };
    {
        name: $name:ident,
        input: $input:expr,
        formatted: $formatted:expr,
        value: $value:expr $(,)?
    } => {
        #[test]
        fn $name() {
            $crate::cases::check_roundtrip($input, $formatted);
            $crate::cases::check_value($input, &formulon::Scope::new(), $value);
        }
    };
    {
        name: $name:ident,
        input: $input:expr,
        formatted: $formatted:expr,
        scope: $scope:expr,
        value: $value:expr $(,)?
    } => {
        #[test]
        fn $name() {
            $crate::cases::check_roundtrip($input, $formatted);
            $crate::cases::check_value($input, &$scope, $value);
        }
    };
    {
        name: $name:ident,
        input: $input:expr,
        error: $pattern:pat $(,)?
    } => {
        #[test]
        fn $name() {
            let result = formulon::eval($input, &formulon::Scope::new());
            assert!(
                matches!(result, Err($pattern)),
                "`{}` should fail, got {:?}",
                $input,
                result
            );
        }
    };
}

pub(crate) use test_case;
