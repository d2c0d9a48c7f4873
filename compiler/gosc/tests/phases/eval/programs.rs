use crate::common::{eval, run};
use gos_eval::Value;
use pretty_assertions::assert_eq;

#[test]
fn fibonacci() {
    let source = "
        let fibonacci = fn(x) {
            if (x == 0) {
                0
            } else {
                if (x == 1) {
                    return 1;
                } else {
                    fibonacci(x - 1) + fibonacci(x - 2);
                }
            }
        };
        fibonacci(20);
    ";
    assert_eq!(eval(source), Value::Int(6765));
}

#[test]
fn closures_and_higher_order_functions() {
    let source = "
        let compose = fn(f, g) { fn(x) { g(f(x)) } };
        let addOne = fn(x) { x + 1 };
        let square = fn(x) { x * x };
        let both = compose(addOne, square);
        both(4)
    ";
    assert_eq!(eval(source), Value::Int(25));
}

#[test]
fn adder_factory() {
    let source = "
        let newAdder = fn(x) { fn(y) { x + y } };
        let addTwo = newAdder(2);
        let addTen = newAdder(10);
        addTwo(3) * addTen(3)
    ";
    assert_eq!(eval(source), Value::Int(65));
}

#[test]
fn iterative_style_via_recursion() {
    let source = "
        let gcd = fn(a, b) { if (b == 0) { a } else { gcd(b, a % b) } };
        gcd(1071, 462)
    ";
    assert_eq!(eval(source), Value::Int(21));
}

#[test]
fn string_building() {
    let source = r#"
        let repeat = fn(s, n) {
            if (n == 0) { return ""; }
            s + repeat(s, n - 1)
        };
        let line = repeat("ab", 3);
        len(line)
    "#;
    assert_eq!(eval(source), Value::Int(6));
}

#[test]
fn puts_output_in_program_order() {
    let source = r#"
        let greet = fn(name) { puts("hello " + name); };
        greet("world");
        puts(1, true);
        let result = greet("again");
        result
    "#;
    let (value, output) = run(source);
    assert_eq!(value, Value::Null);
    assert_eq!(output, "hello world\n1\ntrue\nhello again\n");
}

#[test]
fn top_level_return_stops_program() {
    let (value, output) = run("puts(1); return 2; puts(3);");
    assert_eq!(value, Value::Int(2));
    assert_eq!(output, "1\n");
}

#[test]
fn final_value_rendering() {
    assert_eq!(eval("fn(a, b) { a - b }").to_string(), "fn(a, b) {\n(a - b)\n}");
    assert_eq!(eval("len").to_string(), "builtin function");
    assert_eq!(eval(r#""plain text""#).to_string(), "plain text");
    assert_eq!(eval("if (false) { 1 }").to_string(), "null");
}

#[test]
fn truthiness_in_conditions() {
    assert_eq!(eval(r#"if (0) { "yes" } else { "no" }"#), Value::string("yes"));
    assert_eq!(eval(r#"if ("") { "yes" } else { "no" }"#), Value::string("yes"));
    assert_eq!(eval(r#"if (fn() { 1 }) { "yes" }"#), Value::string("yes"));
    assert_eq!(
        eval(r#"if (if (false) { 1 }) { "yes" } else { "no" }"#),
        Value::string("no")
    );
}
