//! Tests for operator and punctuator matching against the default
//! dialect: longest match, boundaries with words, and table coverage.

mod common;
use common::*;

use whale_sql_core::{Dialect, Operator, PostgresDialect, Punctuator, TokenKind};

const IDENT: TokenKind = TokenKind::Identifier;
const EOF: TokenKind = TokenKind::Eof;

fn op(op: Operator) -> TokenKind {
    TokenKind::Operator(op)
}

fn punct(p: Punctuator) -> TokenKind {
    TokenKind::Punctuator(p)
}

// ===================================================================
// Table coverage
// ===================================================================

#[test]
fn every_operator_lexes_as_one_token_between_words() {
    let dialect = PostgresDialect;
    for spelling in dialect.operators() {
        let sql = format!("a{spelling}b");
        let kind = dialect.operator_kinds()[spelling];
        assert_lexes(
            &sql,
            &[(IDENT, "a"), (kind, spelling.as_str()), (IDENT, "b"), (EOF, "")],
        );
    }
}

#[test]
fn every_operator_lexes_as_one_token_between_spaces() {
    let dialect = PostgresDialect;
    for spelling in dialect.operators() {
        let sql = format!(" {spelling} ");
        let tokens = lex(&sql);
        assert_eq!(tokens.len(), 2, "{sql:?} -> {tokens:?}");
        assert_eq!(tokens[0].text, *spelling);
        assert!(matches!(tokens[0].kind, TokenKind::Operator(_)));
    }
}

#[test]
fn every_punctuator_lexes_as_itself() {
    let dialect = PostgresDialect;
    for spelling in dialect.punctuators() {
        let sql = format!("x{spelling}y");
        let kind = dialect.punctuator_kinds()[spelling];
        assert_lexes(
            &sql,
            &[(IDENT, "x"), (kind, spelling.as_str()), (IDENT, "y"), (EOF, "")],
        );
    }
}

// ===================================================================
// Longest match
// ===================================================================

#[test]
fn less_than_family() {
    assert_eq!(
        kinds("< <= << <<= <<| <-> <> <@"),
        vec![
            op(Operator::Lt),
            op(Operator::LtEq),
            op(Operator::LeftShift),
            op(Operator::SubnetContainedOrEq),
            op(Operator::StrictlyBelow),
            op(Operator::Distance),
            op(Operator::NotEq),
            op(Operator::ContainedBy),
            EOF,
        ]
    );
}

#[test]
fn regex_family() {
    assert_eq!(
        kinds("~ ~* ~~ ~~* !~ !~* !~~ !~~*"),
        vec![
            op(Operator::Tilde),
            op(Operator::RegexMatchI),
            op(Operator::Like),
            op(Operator::Ilike),
            op(Operator::NotRegexMatch),
            op(Operator::NotRegexMatchI),
            op(Operator::NotLike),
            op(Operator::NotIlike),
            EOF,
        ]
    );
}

#[test]
fn pipe_family() {
    assert_eq!(
        kinds("| || ||/ |>> |&> ?||"),
        vec![
            op(Operator::Pipe),
            op(Operator::Concat),
            op(Operator::CubeRoot),
            op(Operator::StrictlyAbove),
            op(Operator::NotExtendBelow),
            op(Operator::Parallel),
            EOF,
        ]
    );
}

#[test]
fn json_operators() {
    assert_lexes(
        "doc->'a'#>'{b,c}'",
        &[
            (IDENT, "doc"),
            (op(Operator::JsonGet), "->"),
            (TokenKind::String, "'a'"),
            (op(Operator::JsonPath), "#>"),
            (TokenKind::String, "'{b,c}'"),
            (EOF, ""),
        ],
    );
}

#[test]
fn two_char_not_equal_spellings_are_distinct() {
    assert_eq!(
        kinds("a<>b a!=b"),
        vec![
            IDENT,
            op(Operator::NotEq),
            IDENT,
            IDENT,
            op(Operator::BangEq),
            IDENT,
            EOF,
        ]
    );
}

#[test]
fn compound_assignment() {
    assert_eq!(
        kinds("x+=1 y-=2 z*=3 w/=4"),
        vec![
            IDENT,
            op(Operator::PlusEq),
            TokenKind::Number,
            IDENT,
            op(Operator::MinusEq),
            TokenKind::Number,
            IDENT,
            op(Operator::StarEq),
            TokenKind::Number,
            IDENT,
            op(Operator::SlashEq),
            TokenKind::Number,
            EOF,
        ]
    );
}

// ===================================================================
// Punctuators, casts and comments together
// ===================================================================

#[test]
fn slices_casts_comments_and_concat() {
    let sql = "a[1:3]::int, --line comment\n b--line comment\n/*block comment*/||'WITH\\'';";
    assert_lexes(
        sql,
        &[
            (IDENT, "a"),
            (punct(Punctuator::LeftBracket), "["),
            (TokenKind::Number, "1"),
            (punct(Punctuator::Colon), ":"),
            (TokenKind::Number, "3"),
            (punct(Punctuator::RightBracket), "]"),
            (op(Operator::Cast), "::"),
            (IDENT, "int"),
            (punct(Punctuator::Comma), ","),
            (IDENT, "b"),
            (op(Operator::Concat), "||"),
            (TokenKind::String, "'WITH\\''"),
            (punct(Punctuator::Semicolon), ";"),
            (EOF, ""),
        ],
    );
}

#[test]
fn braces_and_brackets() {
    assert_eq!(
        kinds("{[()]}"),
        vec![
            punct(Punctuator::LeftBrace),
            punct(Punctuator::LeftBracket),
            punct(Punctuator::LeftParen),
            punct(Punctuator::RightParen),
            punct(Punctuator::RightBracket),
            punct(Punctuator::RightBrace),
            EOF,
        ]
    );
}

#[test]
fn unknown_symbols_become_words() {
    // `$` and `@` alone are not declared, so they are scanned as words.
    assert_lexes("$1 @x", &[(IDENT, "$1"), (IDENT, "@x"), (EOF, "")]);
}
