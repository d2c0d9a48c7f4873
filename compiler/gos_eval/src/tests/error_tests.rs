use super::*;
use pretty_assertions::assert_eq;

#[test]
fn error_messages() {
    let cases = [
        ("5 + true;", "unknown operator: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "unknown operator: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("!5", "unknown operator: !INTEGER"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("true < false;", "unknown operator: BOOLEAN < BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
        (r#""Hello" - "World""#, "unknown operator: STRING - STRING"),
        (r#""a" + 1"#, "unknown operator: STRING + INTEGER"),
        ("foobar", "identifier not found: foobar"),
        ("10 / 0", "division by zero"),
        ("10 % 0", "modulo by zero"),
        ("9223372036854775807 + 1", "integer overflow in addition"),
        ("0 - 9223372036854775807 - 2", "integer overflow in subtraction"),
        ("4611686018427387904 * 2", "integer overflow in multiplication"),
        ("5()", "not a function: INTEGER"),
        (r#""f"(1)"#, "not a function: STRING"),
        ("let f = fn(x) { x }; f(1, 2)", "wrong number of arguments: got=2, want=1"),
        ("let f = fn(x, y) { x }; f()", "wrong number of arguments: got=0, want=2"),
        ("len(1)", "argument to `len` not supported, got INTEGER"),
        (r#"len("one", "two")"#, "wrong number of arguments. got=2, want=1"),
    ];
    for (source, expected) in cases {
        assert_eq!(error_message(source), expected, "{source}");
    }
}

#[test]
fn error_value_renders_location() {
    assert_eq!(
        run("5 + true;").to_string(),
        "file:  line: 1 char: 3 unknown operator: INTEGER + BOOLEAN"
    );
    assert_eq!(
        run("let a = 1;\n  -true").to_string(),
        "file:  line: 2 char: 3 unknown operator: -BOOLEAN"
    );
}

#[test]
fn identifier_error_points_at_identifier() {
    assert_eq!(
        run("let a = 1;\nlet b = a + c;").to_string(),
        "file:  line: 2 char: 13 identifier not found: c"
    );
}

#[test]
fn call_error_points_at_open_paren() {
    assert_eq!(
        run("len(1)").to_string(),
        "file:  line: 1 char: 4 argument to `len` not supported, got INTEGER"
    );
}

#[test]
fn error_location_carries_filename() {
    let output = gos_parse::parse_with_filename("\n10 / 0", "calc.gos");
    assert!(output.errors.is_empty());
    let value = Interpreter::new().eval_program(&output.program);
    assert_eq!(
        value.to_string(),
        "file: calc.gos line: 2 char: 4 division by zero"
    );
}

#[test]
fn error_inside_function_reports_inner_location() {
    let source = "let f = fn(x) {\n  x / 0\n};\nf(1)";
    match run(source) {
        Value::Error(error) => {
            assert_eq!(error.message(), "division by zero");
            assert_eq!(error.location.line, 2);
            assert_eq!(error.location.column, 5);
        }
        other => panic!("expected an error, got {other:?}"),
    }
}
