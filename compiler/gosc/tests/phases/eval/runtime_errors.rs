use crate::common::{run, runtime_error};
use pretty_assertions::assert_eq;

#[test]
fn rendered_errors_carry_file_and_position() {
    assert_eq!(
        runtime_error("5 + true;"),
        "file: test.gos line: 1 char: 3 unknown operator: INTEGER + BOOLEAN"
    );
    assert_eq!(
        runtime_error("let x = 1;\nlet y = x + z;"),
        "file: test.gos line: 2 char: 13 identifier not found: z"
    );
    assert_eq!(
        runtime_error("let f = fn(a) { a };\n\nf(1, 2, 3)"),
        "file: test.gos line: 3 char: 2 wrong number of arguments: got=3, want=1"
    );
}

#[test]
fn error_inside_nested_calls_stops_everything() {
    let source = r#"
        let inner = fn() { puts("inner"); -"text" };
        let outer = fn() { inner(); puts("unreachable"); 1 };
        outer();
        puts("also unreachable");
    "#;
    let (value, output) = run(source);
    assert!(value.is_error());
    assert_eq!(output, "inner\n");
    match value {
        gos_eval::Value::Error(error) => {
            assert_eq!(error.message(), "unknown operator: -STRING");
            assert_eq!(error.location.line, 2);
        }
        other => panic!("expected error, got {other}"),
    }
}

#[test]
fn builtin_errors() {
    assert_eq!(
        runtime_error("len(fn(x) { x })"),
        "file: test.gos line: 1 char: 4 argument to `len` not supported, got FUNCTION"
    );
    assert_eq!(
        runtime_error("len()"),
        "file: test.gos line: 1 char: 4 wrong number of arguments. got=0, want=1"
    );
}

#[test]
fn calling_non_functions() {
    assert_eq!(
        runtime_error("let x = 5; x(1)"),
        "file: test.gos line: 1 char: 13 not a function: INTEGER"
    );
    assert_eq!(
        runtime_error("true()"),
        "file: test.gos line: 1 char: 5 not a function: BOOLEAN"
    );
}

#[test]
fn arithmetic_faults() {
    assert_eq!(
        runtime_error("let zero = 0; 1 / zero"),
        "file: test.gos line: 1 char: 17 division by zero"
    );
    assert_eq!(
        runtime_error("-9223372036854775807 - 1 - 1"),
        "file: test.gos line: 1 char: 26 integer overflow in subtraction"
    );
}
