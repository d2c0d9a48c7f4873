use crate::common::{eval, run_with_mode};
use gos_eval::{EvalMode, Value};
use pretty_assertions::assert_eq;

#[test]
fn runaway_recursion_becomes_an_error_value() {
    let (value, _) = run_with_mode(
        "let loop = fn(n) { loop(n + 1) }; loop(0)",
        EvalMode::Limited { max_depth: 200 },
    );
    assert_eq!(
        value.to_string(),
        "file: test.gos line: 1 char: 24 maximum recursion depth exceeded (limit: 200)"
    );
}

#[test]
fn limit_counts_active_calls_only() {
    // Many sequential calls, none nested deeper than two.
    let source = "
        let id = fn(x) { x };
        let count = fn(n, acc) { if (n == 0) { acc } else { count(n - 1, id(acc) + 1) } };
        count(50, 0)
    ";
    let (value, _) = run_with_mode(source, EvalMode::Limited { max_depth: 60 });
    assert_eq!(value, Value::Int(50));
}

#[test]
fn deeply_nested_expression() {
    let depth = 3000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(eval(&source), Value::Int(1));
}

#[test]
fn long_operator_chain() {
    let source = vec!["1"; 5000].join(" + ");
    assert_eq!(eval(&source), Value::Int(5000));
}

#[test]
fn very_deep_negation_chain() {
    let source = format!("{}1", "-".repeat(200_000));
    assert_eq!(eval(&source), Value::Int(1));
}
