//! PostgreSQL dialect.

use std::sync::LazyLock;

use super::{Dialect, DialectTable, KindMap, RawDialectTable};
use crate::lexer::{Keyword, Operator, Punctuator, TokenKind};

const KEYWORDS: &[Keyword] = &[Keyword::As, Keyword::From, Keyword::Select, Keyword::With];

/// Operators in match order: longest spellings first.
const OPERATORS: &[Operator] = &[
    // 4 characters
    Operator::NotIlike,
    // 3 characters
    Operator::JsonGetText,
    Operator::JsonPathText,
    Operator::SubnetContainedOrEq,
    Operator::SubnetContainsOrEq,
    Operator::Distance,
    Operator::Perpendicular,
    Operator::Parallel,
    Operator::StrictlyBelow,
    Operator::StrictlyAbove,
    Operator::NotExtendAbove,
    Operator::NotExtendBelow,
    Operator::CubeRoot,
    Operator::Ilike,
    Operator::NotLike,
    Operator::NotRegexMatchI,
    // 2 characters
    Operator::JsonGet,
    Operator::JsonPath,
    Operator::Contains,
    Operator::ContainedBy,
    Operator::Overlap,
    Operator::Concat,
    Operator::Cast,
    Operator::LeftShift,
    Operator::RightShift,
    Operator::LtEq,
    Operator::GtEq,
    Operator::NotEq,
    Operator::BangEq,
    Operator::RegexMatchI,
    Operator::NotRegexMatch,
    Operator::Like,
    Operator::PlusEq,
    Operator::MinusEq,
    Operator::StarEq,
    Operator::SlashEq,
    // 1 character
    Operator::Plus,
    Operator::Minus,
    Operator::Star,
    Operator::Slash,
    Operator::Percent,
    Operator::Eq,
    Operator::Lt,
    Operator::Gt,
    Operator::Tilde,
    Operator::Bang,
    Operator::Ampersand,
    Operator::Pipe,
    Operator::Caret,
    Operator::Question,
];

// `:` is a punctuator but `::` is an operator; operators are tried first.
const PUNCTUATORS: &[Punctuator] = &[
    Punctuator::Dot,
    Punctuator::Comma,
    Punctuator::Semicolon,
    Punctuator::LeftParen,
    Punctuator::RightParen,
    Punctuator::LeftBracket,
    Punctuator::RightBracket,
    Punctuator::LeftBrace,
    Punctuator::RightBrace,
    Punctuator::Colon,
];

static TABLE: LazyLock<DialectTable> = LazyLock::new(|| {
    DialectTable::assemble(RawDialectTable {
        name: String::from(PostgresDialect::NAME),
        keywords: spelled(
            KEYWORDS
                .iter()
                .map(|kw| (kw.as_str(), TokenKind::Keyword(*kw))),
        ),
        operators: OPERATORS.iter().map(|op| op.as_str().to_owned()).collect(),
        operator_kinds: spelled(
            OPERATORS
                .iter()
                .map(|op| (op.as_str(), TokenKind::Operator(*op))),
        ),
        punctuators: PUNCTUATORS.iter().map(|p| p.as_str().to_owned()).collect(),
        punctuator_kinds: spelled(
            PUNCTUATORS
                .iter()
                .map(|p| (p.as_str(), TokenKind::Punctuator(*p))),
        ),
    })
});

fn spelled<'a>(entries: impl Iterator<Item = (&'a str, TokenKind)>) -> KindMap {
    entries
        .map(|(spelling, kind)| (spelling.to_owned(), kind))
        .collect()
}

/// The default dialect, modeled on PostgreSQL operators.
///
/// This is a zero-sized handle; the tables behind it are built on first use
/// and shared by every handle.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Name of the dialect.
    pub const NAME: &'static str = "postgres";

    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the shared table backing this dialect.
    #[must_use]
    pub fn table() -> &'static DialectTable {
        &TABLE
    }
}

impl Dialect for PostgresDialect {
    fn keywords(&self) -> &KindMap {
        TABLE.keywords()
    }

    fn operators(&self) -> &[String] {
        TABLE.operators()
    }

    fn operator_kinds(&self) -> &KindMap {
        TABLE.operator_kinds()
    }

    fn punctuators(&self) -> &[String] {
        TABLE.punctuators()
    }

    fn punctuator_kinds(&self) -> &KindMap {
        TABLE.punctuator_kinds()
    }
}
