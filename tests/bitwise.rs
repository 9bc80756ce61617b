use formulon::{Error, Value, evaluator::EvalError};

mod cases;
use cases::test_case;

test_case! {
    name: shift_then_mask,
    input: "1 << 4 & 255",
    formatted: "1 << 4 & 255",
    value: Value::Int(16),
}

test_case! {
    name: right_shift,
    input: "256 >> 4",
    formatted: "256 >> 4",
    value: Value::Int(16),
}

test_case! {
    name: bitor,
    input: "5 | 2",
    formatted: "5 | 2",
    value: Value::Int(7),
}

test_case! {
    name: xor_uses_pipe_caret,
    input: "5 |^ 3",
    formatted: "5 |^ 3",
    value: Value::Int(6),
}

test_case! {
    name: caret_is_power_not_xor,
    input: "5 ^ 3",
    formatted: "5 ^ 3",
    value: Value::Float(125.0),
}

test_case! {
    name: complement,
    input: "~0",
    formatted: "~0",
    value: Value::Int(-1),
}

test_case! {
    name: bitwise_precedence_chain,
    input: "1 | 2 |^ 3 & 4",
    formatted: "1 | 2 |^ 3 & 4",
    value: Value::Int(3),
}

test_case! {
    name: complement_needs_an_integer,
    input: "~1.5",
    error: Error::Eval(EvalError::InvalidOperand { .. }),
}

test_case! {
    name: shifting_a_float_is_an_error,
    input: "1.0 << 2",
    error: Error::Eval(EvalError::InvalidOperand { .. }),
}
