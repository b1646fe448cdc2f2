//! Integration tests for the lexical front end.
//!
//! These tests drive the public crate API the way the command-line driver
//! does: one scanner per source buffer, calling `next_token` in a loop until
//! end of input, and rendering diagnostics against the original buffer.

use smallc::{
    errors::errors::render_at,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

fn lex(source: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token().expect("unexpected lexical error");
        if token.is_end() {
            break;
        }
        tokens.push(token);
    }

    tokens
}

#[test]
fn test_tokenize_function_definition() {
    let source = "int add(int a, int b) {\n  return a + b;\n}\n";
    let tokens = lex(source);

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
        ]
    );

    assert_eq!(tokens[0].text, "int");
    assert_eq!(tokens[1].text, "add");
    assert_eq!(tokens[10].text, "return");
    assert_eq!(tokens[10].pos.row, 2);
    assert_eq!(tokens[10].pos.col, 3);
}

#[test]
fn test_tokenize_control_flow() {
    let source = "while (i < 10) {\n  if (i != 5) { i++; } else { i--; }\n}\n";
    let tokens = lex(source);

    let texts: Vec<&str> = tokens.iter().map(|token| token.text).collect();
    assert_eq!(
        texts,
        vec![
            "while", "(", "i", "<", "10", ")", "{", "if", "(", "i", "!=", "5", ")", "{", "i",
            "++", ";", "}", "else", "{", "i", "--", ";", "}", "}",
        ]
    );
}

#[test]
fn test_tokenize_with_comments_round_trips() {
    let source = "// header comment\nvoid run() {\n  x = x % 2; // step\n}\n";
    let tokens = lex(source);

    let concatenated: String = tokens.iter().map(|token| token.text).collect();
    assert_eq!(concatenated, "voidrun(){x=x%2;}");
}

#[test]
fn test_lone_ampersand_reports_with_snippet() {
    let source = "int main() {\n  int x = 1 & 2;\n}\n";
    let mut lexer = Lexer::new(source);

    let diagnostic = loop {
        match lexer.next_token() {
            Ok(token) => assert!(!token.is_end(), "expected a lexical error before end"),
            Err(diagnostic) => break diagnostic,
        }
    };

    assert!(diagnostic.is_fatal());
    assert_eq!(diagnostic.get_position().row, 2);
    assert_eq!(diagnostic.get_position().col, 13);

    assert_eq!(
        render_at(&diagnostic, source),
        "ERROR: LEXER: Line 2:13 Use of a single '&' is invalid\n\
         \u{20} int x = 1 & 2;\n\
         \u{20}           ^"
    );
}

#[test]
fn test_scanner_survives_invalid_bytes() {
    // Unrecognized bytes surface as invalid tokens; scanning continues.
    let source = "x # y";
    let mut lexer = Lexer::new(source);

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Invalid);
    assert_eq!(lexer.next_token().unwrap().text, "y");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::End);
}

#[test]
fn test_end_of_input_is_stable() {
    let mut lexer = Lexer::new("void f();\n");

    while !lexer.next_token().unwrap().is_end() {}

    for _ in 0..5 {
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::End);
    }
}
