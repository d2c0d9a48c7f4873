use gos_ir::TokenKind;
use gos_lexer::lex;
use gosc::commands::render_tokens;
use pretty_assertions::assert_eq;

#[test]
fn program_token_kinds() {
    let source = r#"
let five = 5;
let add = fn(x, y) {
  x + y;
};
let result = add(five, 10);
!-/*5 % 2;
5 < 10 > 5;
if (5 < 10) {
    return true;
} else {
    return false;
}
10 == 10;
10 != 9;
"foobar"
"foo bar"
"#;
    use TokenKind::{
        Assign, Bang, Comma, Else, Eof, EqEq, False, Function, Gt, Ident, If, Int, LBrace,
        LParen, Let, Lt, Minus, NotEq, Percent, Plus, RBrace, RParen, Return, Semicolon, Slash,
        Star, String, True,
    };
    let expected = [
        Let, Ident, Assign, Int, Semicolon, //
        Let, Ident, Assign, Function, LParen, Ident, Comma, Ident, RParen, LBrace, //
        Ident, Plus, Ident, Semicolon, //
        RBrace, Semicolon, //
        Let, Ident, Assign, Ident, LParen, Ident, Comma, Int, RParen, Semicolon, //
        Bang, Minus, Slash, Star, Int, Percent, Int, Semicolon, //
        Int, Lt, Int, Gt, Int, Semicolon, //
        If, LParen, Int, Lt, Int, RParen, LBrace, //
        Return, True, Semicolon, //
        RBrace, Else, LBrace, //
        Return, False, Semicolon, //
        RBrace, //
        Int, EqEq, Int, Semicolon, //
        Int, NotEq, Int, Semicolon, //
        String, String, Eof,
    ];
    let kinds: Vec<_> = lex(source).iter().map(|t| t.kind).collect();
    assert_eq!(kinds, expected);
}

#[test]
fn string_literal_has_no_quotes() {
    let tokens = lex(r#""foo bar""#);
    assert_eq!(tokens[0].literal, "foo bar");
}

#[test]
fn token_listing_tracks_lines() {
    let listing = render_tokens("let a = 1;\nlet b = 2;", "x.gos");
    let second_let = listing.lines().nth(5).unwrap();
    assert!(second_let.starts_with("LET"), "{listing}");
    assert!(second_let.ends_with("2:1"), "{listing}");
}
