//! Edge case tests for jsonpp-lex

use crate::{LexConfig, LexError, Lexer, Token, TokenKind};
use jsonpp_util::Handler;

fn lex_all(source: &str) -> Result<Vec<Token>, LexError> {
    let handler = Handler::collecting();
    Lexer::new(source, LexConfig::default(), &handler).tokenize()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex_all(source).unwrap().into_iter().map(|t| t.kind).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(lex_all("").unwrap().is_empty());
}

#[test]
fn test_edge_only_newlines() {
    assert!(lex_all("\n\n\n").unwrap().is_empty());
}

#[test]
fn test_edge_all_structural() {
    assert_eq!(
        kinds("{}[]:,"),
        [
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
            TokenKind::Colon,
            TokenKind::Comma,
        ]
    );
}

#[test]
fn test_edge_long_string() {
    let body = "x".repeat(10000);
    let t = lex_all(&format!("\"{}\"", body)).unwrap();
    assert_eq!(t[0].lexeme, body);
}

#[test]
fn test_edge_long_number() {
    let digits = "9".repeat(500);
    let t = lex_all(&digits).unwrap();
    assert_eq!(t[0].kind, TokenKind::Number);
    assert_eq!(t[0].lexeme.len(), 500);
}

#[test]
fn test_edge_deep_nesting() {
    let source = format!("{}{}", "[".repeat(1000), "]".repeat(1000));
    assert_eq!(lex_all(&source).unwrap().len(), 2000);
}

#[test]
fn test_edge_keyword_adjacent_to_structural() {
    assert_eq!(
        kinds("[true,false,null]"),
        [
            TokenKind::LeftBracket,
            TokenKind::True,
            TokenKind::Comma,
            TokenKind::False,
            TokenKind::Comma,
            TokenKind::Null,
            TokenKind::RightBracket,
        ]
    );
}

#[test]
fn test_edge_negative_zero() {
    let t = lex_all("-0").unwrap();
    assert_eq!(t[0].lexeme, "-0");
}

#[test]
fn test_edge_number_then_letter() {
    let handler = Handler::collecting();
    let results: Vec<_> = Lexer::new("[12abc]", LexConfig::default(), &handler).collect();
    assert_eq!(results.len(), 2);
    assert_eq!(
        results[1],
        Err(LexError::InvalidNumber {
            literal: "12abc".to_string(),
            line: 1,
            offset: 1,
        })
    );
}

#[test]
fn test_edge_number_run_on_keyword() {
    assert!(matches!(
        lex_all("1true"),
        Err(LexError::InvalidNumber { ref literal, .. }) if literal == "1true"
    ));
    assert!(matches!(
        lex_all("true1"),
        Err(LexError::UnknownKeyword { ref word, .. }) if word == "true1"
    ));
}

#[test]
fn test_edge_number_run_on_number() {
    assert!(matches!(
        lex_all("[12-3]"),
        Err(LexError::InvalidNumber { ref literal, offset: 1, .. }) if literal == "12-3"
    ));
    assert!(matches!(
        lex_all("1.5.3"),
        Err(LexError::InvalidNumber { ref literal, .. }) if literal == "1.5.3"
    ));
}

#[test]
fn test_edge_number_needs_only_a_delimiter() {
    assert_eq!(
        kinds("[1,2]"),
        [
            TokenKind::LeftBracket,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::RightBracket,
        ]
    );
    assert_eq!(kinds("{\"a\":-1}").len(), 5);
}

#[test]
fn test_edge_plus_sign_rejected() {
    assert!(matches!(
        lex_all("+1"),
        Err(LexError::UnexpectedCharacter { ch: '+', .. })
    ));
}

#[test]
fn test_edge_leading_dot_rejected() {
    assert!(matches!(
        lex_all(".5"),
        Err(LexError::UnexpectedCharacter { ch: '.', .. })
    ));
}

#[test]
fn test_edge_string_with_structural_chars() {
    let t = lex_all(r#""{[:,]}""#).unwrap();
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].lexeme, "{[:,]}");
}

#[test]
fn test_edge_unicode_escape_kept_raw() {
    let t = lex_all(r#""caf\u00e9""#).unwrap();
    assert_eq!(t[0].lexeme, r#"caf\u00e9"#);
}

#[test]
fn test_edge_crlf_counts_one_line() {
    let t = lex_all("1\r\n2\r\n3").unwrap();
    let lines: Vec<_> = t.iter().map(|t| t.line).collect();
    assert_eq!(lines, [1, 2, 3]);
}

#[test]
fn test_edge_newline_inside_string_advances_line() {
    let t = lex_all("\"a\nb\" 1").unwrap();
    assert_eq!(t[0].line, 1);
    assert_eq!(t[1].line, 2);
}

#[test]
fn test_edge_unterminated_reports_opening_line() {
    assert_eq!(
        lex_all("[\n\"abc\n\n"),
        Err(LexError::UnterminatedString { line: 2, offset: 2 })
    );
}

#[test]
fn test_edge_non_ascii_outside_string() {
    assert!(matches!(
        lex_all("[1, é]"),
        Err(LexError::UnexpectedCharacter { ch: 'é', offset: 4, .. })
    ));
}

#[test]
fn test_edge_nbsp_is_not_whitespace() {
    assert!(matches!(
        lex_all("1\u{a0}2"),
        Err(LexError::UnexpectedCharacter { ch: '\u{a0}', .. })
    ));
}

#[test]
fn test_edge_first_error_wins() {
    assert!(matches!(
        lex_all("tru @"),
        Err(LexError::UnknownKeyword { .. })
    ));
}
