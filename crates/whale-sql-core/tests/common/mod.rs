#![allow(dead_code)]

use whale_sql_core::{Dialect, Lexer, Token, TokenKind};

pub fn lex(sql: &str) -> Vec<Token> {
    Lexer::new(sql).tokenize()
}

pub fn lex_with<D: Dialect + ?Sized>(dialect: &D, sql: &str) -> Vec<Token> {
    Lexer::with_dialect(sql, dialect).tokenize()
}

pub fn kinds(sql: &str) -> Vec<TokenKind> {
    lex(sql).into_iter().map(|t| t.kind).collect()
}

pub fn pairs(sql: &str) -> Vec<(TokenKind, String)> {
    lex(sql).into_iter().map(|t| (t.kind, t.text)).collect()
}

/// Asserts that `sql` lexes to exactly `expected` (kind, text) pairs,
/// trailing EOF included.
pub fn assert_lexes(sql: &str, expected: &[(TokenKind, &str)]) {
    let actual = pairs(sql);
    let expected: Vec<(TokenKind, String)> = expected
        .iter()
        .map(|(kind, text)| (*kind, (*text).to_string()))
        .collect();
    assert_eq!(actual, expected, "Token mismatch for: {sql}");
}
