use crate::common::render;
use gosc::commands::render_parse;
use pretty_assertions::assert_eq;

#[test]
fn operator_precedence_rendering() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a % b * c", "((a % b) * c)"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("true", "true"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
    ];
    for (source, expected) in cases {
        assert_eq!(render(source), expected, "{source}");
    }
}

#[test]
fn statement_rendering() {
    assert_eq!(render("let x = 5;"), "let x = 5;");
    assert_eq!(render("return x + 1;"), "return (x + 1);");
    assert_eq!(render("if (x < y) { x } else { y }"), "if(x < y) xelse y");
    assert_eq!(render("fn(x, y) { x + y; }"), "fn(x, y) (x + y)");
    assert_eq!(render("fn() { 1 }()"), "fn() 1()");
}

#[test]
fn parse_listing() {
    assert_eq!(
        render_parse("let f = fn(a) { a * 2 };\nf(3);", "f.gos"),
        "let f = fn(a) (a * 2);\nf(3)\n"
    );
}
