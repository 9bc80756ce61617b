//! Canonical-form checks: the formatter keeps exactly the parentheses the
//! grammar needs and normalizes spacing and literal spellings.

mod cases;
use cases::test_case;

// ======== Spacing ========

test_case! {
    name: operators_are_spaced,
    input: "1+2*3",
    formatted: "1 + 2 * 3",
}

test_case! {
    name: outer_whitespace_is_dropped,
    input: "  qty   *  2  ",
    formatted: "qty * 2",
}

test_case! {
    name: call_arguments_are_comma_spaced,
    input: "floor( 2.5 ,1 )",
    formatted: "floor(2.5, 1)",
}

// ======== Parenthesization ========

test_case! {
    name: redundant_parens_are_dropped,
    input: "((1 + 2)) + (3 * 4)",
    formatted: "1 + 2 + 3 * 4",
}

test_case! {
    name: needed_parens_survive,
    input: "(1 + 2) * 3",
    formatted: "(1 + 2) * 3",
}

test_case! {
    name: right_grouping_under_left_associativity,
    input: "1 - (2 - 3)",
    formatted: "1 - (2 - 3)",
}

test_case! {
    name: left_grouping_under_right_associative_power,
    input: "(2 ^ 3) ^ 2",
    formatted: "(2 ^ 3) ^ 2",
}

test_case! {
    name: right_grouping_under_power_is_redundant,
    input: "2 ^ (3 ^ 2)",
    formatted: "2 ^ 3 ^ 2",
}

test_case! {
    name: parenthesized_ternary_condition,
    input: "(a ? b : c) ? 1 : 2",
    formatted: "(a ? b : c) ? 1 : 2",
}

test_case! {
    name: else_branch_ternary_needs_no_parens,
    input: "a ? 1 : (b ? 2 : 3)",
    formatted: "a ? 1 : b ? 2 : 3",
}

test_case! {
    name: prefix_over_grouped_disjunction,
    input: "not (a || b)",
    formatted: "not (a || b)",
}

test_case! {
    name: factorial_of_a_sum,
    input: "(n + 1)!",
    formatted: "(n + 1)!",
}

test_case! {
    name: comparison_of_bitor_needs_no_parens,
    input: "1 == (2 | 3)",
    formatted: "1 == 2 | 3",
}

// ======== Literal Spellings ========

test_case! {
    name: trailing_dot_float_gains_a_zero,
    input: "12.",
    formatted: "12.0",
}

test_case! {
    name: leading_dot_float_gains_a_zero,
    input: ".5",
    formatted: "0.5",
}

test_case! {
    name: leading_zeros_are_dropped,
    input: "007",
    formatted: "7",
}

test_case! {
    name: string_escapes_are_preserved,
    input: r#""he said \"hi\"\n""#,
    formatted: r#""he said \"hi\"\n""#,
}

// ======== Access and Kitchen Sink ========

test_case! {
    name: access_chain,
    input: "a . b[ 0 ] . c",
    formatted: "a.b[0].c",
}

test_case! {
    name: kitchen_sink,
    input: "a.b + c[0] * 2 ^ n! - ~m",
    formatted: "a.b + c[0] * 2 ^ n! - ~m",
}
