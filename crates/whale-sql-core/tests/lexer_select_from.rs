//! Tests for keyword recognition and whole-statement token order.

mod common;
use common::*;

use whale_sql_core::{Keyword, Lexer, Operator, Punctuator, TokenKind};

const SELECT: TokenKind = TokenKind::Keyword(Keyword::Select);
const FROM: TokenKind = TokenKind::Keyword(Keyword::From);
const AS: TokenKind = TokenKind::Keyword(Keyword::As);
const IDENT: TokenKind = TokenKind::Identifier;
const EOF: TokenKind = TokenKind::Eof;

// ===================================================================
// Keywords
// ===================================================================

#[test]
fn recognizes_select_then_eof() {
    assert_lexes("SELECT", &[(SELECT, "SELECT"), (EOF, "")]);
}

#[test]
fn keyword_prefix_is_not_a_keyword() {
    assert_lexes("SELECTX", &[(IDENT, "SELECTX"), (EOF, "")]);
}

#[test]
fn skips_leading_whitespace() {
    assert_lexes("   \t\nSELECT", &[(SELECT, "SELECT"), (EOF, "")]);
}

#[test]
fn keywords_are_case_insensitive_and_canonicalized() {
    for sql in ["select", "SELECT", "SeLeCt"] {
        assert_lexes(sql, &[(SELECT, "SELECT"), (EOF, "")]);
    }
}

#[test]
fn all_reference_keywords() {
    assert_eq!(
        kinds("as from select with"),
        vec![
            AS,
            FROM,
            SELECT,
            TokenKind::Keyword(Keyword::With),
            EOF
        ]
    );
}

#[test]
fn two_keywords() {
    assert_eq!(kinds("SELECT FROM"), vec![SELECT, FROM, EOF]);
}

// ===================================================================
// Statements
// ===================================================================

#[test]
fn select_star_from_qualified_table() {
    assert_lexes(
        "SELECT * FROM schema.table as b;",
        &[
            (SELECT, "SELECT"),
            (TokenKind::Operator(Operator::Star), "*"),
            (FROM, "FROM"),
            (IDENT, "schema"),
            (TokenKind::Punctuator(Punctuator::Dot), "."),
            (IDENT, "table"),
            (AS, "AS"),
            (IDENT, "b"),
            (TokenKind::Punctuator(Punctuator::Semicolon), ";"),
            (EOF, ""),
        ],
    );
}

#[test]
fn select_qualified_star_and_alias() {
    assert_lexes(
        "SELECT a.*, b as quote FROM schema.table;",
        &[
            (SELECT, "SELECT"),
            (IDENT, "a"),
            (TokenKind::Punctuator(Punctuator::Dot), "."),
            (TokenKind::Operator(Operator::Star), "*"),
            (TokenKind::Punctuator(Punctuator::Comma), ","),
            (IDENT, "b"),
            (AS, "AS"),
            (IDENT, "quote"),
            (FROM, "FROM"),
            (IDENT, "schema"),
            (TokenKind::Punctuator(Punctuator::Dot), "."),
            (IDENT, "table"),
            (TokenKind::Punctuator(Punctuator::Semicolon), ";"),
            (EOF, ""),
        ],
    );
}

#[test]
fn with_clause_and_json_path() {
    assert_eq!(
        kinds("WITH t AS (SELECT doc->>'name' FROM docs) SELECT * FROM t"),
        vec![
            TokenKind::Keyword(Keyword::With),
            IDENT,
            AS,
            TokenKind::Punctuator(Punctuator::LeftParen),
            SELECT,
            IDENT,
            TokenKind::Operator(Operator::JsonGetText),
            TokenKind::String,
            FROM,
            IDENT,
            TokenKind::Punctuator(Punctuator::RightParen),
            SELECT,
            TokenKind::Operator(Operator::Star),
            FROM,
            IDENT,
            EOF,
        ]
    );
}

#[test]
fn no_separator_needed_between_symbols_and_words() {
    assert_lexes(
        "SELECT(a+b)*2FROM t",
        &[
            (SELECT, "SELECT"),
            (TokenKind::Punctuator(Punctuator::LeftParen), "("),
            (IDENT, "a"),
            (TokenKind::Operator(Operator::Plus), "+"),
            (IDENT, "b"),
            (TokenKind::Punctuator(Punctuator::RightParen), ")"),
            (TokenKind::Operator(Operator::Star), "*"),
            (TokenKind::Number, "2"),
            (FROM, "FROM"),
            (IDENT, "t"),
            (EOF, ""),
        ],
    );
}

#[test]
fn spans_point_back_into_the_input() {
    let sql = "SELECT name FROM users";
    for token in Lexer::new(sql) {
        let slice = token.span.slice(sql).unwrap();
        assert!(slice.eq_ignore_ascii_case(&token.text), "{token:?}");
    }
}
