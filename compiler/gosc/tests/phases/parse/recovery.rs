use crate::common::parse_messages;
use gosc::commands::{run_source, RunOutcome};
use pretty_assertions::assert_eq;

#[test]
fn every_malformed_statement_is_reported() {
    assert_eq!(
        parse_messages("let x 5; let = 10; let 838383;"),
        vec![
            "expected next token to be =, got INT instead",
            "expected next token to be IDENT, got = instead",
            "expected next token to be IDENT, got INT instead",
        ]
    );
}

#[test]
fn missing_prefix_rule() {
    assert_eq!(
        parse_messages("let x = ;"),
        vec!["no prefix parse function for ; found"]
    );
}

#[test]
fn unclosed_block() {
    assert_eq!(
        parse_messages("if (x) { x"),
        vec!["expected next token to be }, got EOF instead"]
    );
}

#[test]
fn malformed_statement_in_function_body_is_reported_once() {
    assert_eq!(
        parse_messages("let f = fn(x) { let = 1; x }; let a = 1; let b = 2;"),
        vec!["expected next token to be IDENT, got = instead"]
    );
}

#[test]
fn unterminated_string() {
    assert_eq!(
        parse_messages("puts(\"hello);"),
        vec!["unterminated string literal"]
    );
}

#[test]
fn illegal_character() {
    assert_eq!(parse_messages("let a = @;"), vec!["illegal character \"@\""]);
}

#[test]
fn integer_literal_out_of_range() {
    assert_eq!(
        parse_messages("99999999999999999999"),
        vec!["could not parse \"99999999999999999999\" as integer"]
    );
}

#[test]
fn program_with_parse_errors_is_not_evaluated() {
    let handler = gos_eval::buffer_handler();
    let outcome = run_source(
        "puts(1);\nlet = 2;",
        "bad.gos",
        gos_eval::EvalMode::Interpret,
        handler.clone(),
    );
    match outcome {
        RunOutcome::ParseErrors(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors[0].to_string(),
                "file: bad.gos line: 2 char: 5 expected next token to be IDENT, got = instead"
            );
        }
        RunOutcome::Evaluated(value) => panic!("evaluated to {value}"),
    }
    assert_eq!(handler.get_output(), "");
}
