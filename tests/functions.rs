use formulon::{Error, Value, evaluator::EvalError};

mod cases;
use cases::test_case;

test_case! {
    name: floor,
    input: "floor(2.7)",
    formatted: "floor(2.7)",
    value: Value::Float(2.0),
}

test_case! {
    name: ceil,
    input: "ceil(2.1)",
    formatted: "ceil(2.1)",
    value: Value::Float(3.0),
}

test_case! {
    name: round_half_up,
    input: "round(2.5)",
    formatted: "round(2.5)",
    value: Value::Float(3.0),
}

test_case! {
    name: round_to_decimal_places,
    input: "round(3.14159, 2)",
    formatted: "round(3.14159, 2)",
    value: Value::Float(3.14),
}

test_case! {
    name: trig_on_integers,
    input: "sin(0) + cos(0)",
    formatted: "sin(0) + cos(0)",
    value: Value::Float(1.0),
}

test_case! {
    name: exp_of_zero,
    input: "exp(0)",
    formatted: "exp(0)",
    value: Value::Float(1.0),
}

test_case! {
    name: log10_of_ten,
    input: "log10(10)",
    formatted: "log10(10)",
    value: Value::Float(1.0),
}

test_case! {
    name: nested_calls,
    input: "round( sin(0) ,2 )",
    formatted: "round(sin(0), 2)",
    value: Value::Float(0.0),
}

test_case! {
    name: call_argument_is_a_full_expression,
    input: "floor(1 + 1.5)",
    formatted: "floor(1 + 1.5)",
    value: Value::Float(2.0),
}

test_case! {
    name: unknown_function,
    input: "median(1)",
    error: Error::Eval(EvalError::UnknownFunction { .. }),
}

test_case! {
    name: wrong_arity_is_unknown,
    input: "sin(1, 2)",
    error: Error::Eval(EvalError::UnknownFunction { .. }),
}

test_case! {
    name: bad_arguments_are_reported_together,
    input: "round(missing1, missing2)",
    error: Error::Eval(EvalError::Aggregate(_)),
}
