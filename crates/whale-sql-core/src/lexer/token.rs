//! Token types for the SQL lexer.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Span;

/// SQL keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    /// `AS`
    As,
    /// `FROM`
    From,
    /// `SELECT`
    Select,
    /// `WITH`
    With,
}

impl Keyword {
    /// Returns the canonical (upper-case) spelling of the keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::As => "AS",
            Self::From => "FROM",
            Self::Select => "SELECT",
            Self::With => "WITH",
        }
    }
}

/// Symbolic operators.
///
/// The variant names follow Postgres operator semantics; a dialect may bind
/// any spelling to any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `!~~*` (NOT ILIKE)
    NotIlike,
    /// `->>` (JSON field as text)
    JsonGetText,
    /// `#>>` (JSON path as text)
    JsonPathText,
    /// `<<=` (subnet contained by or equal)
    SubnetContainedOrEq,
    /// `>>=` (subnet contains or equal)
    SubnetContainsOrEq,
    /// `<->` (distance)
    Distance,
    /// `?-|` (perpendicular)
    Perpendicular,
    /// `?||` (parallel)
    Parallel,
    /// `<<|` (strictly below)
    StrictlyBelow,
    /// `|>>` (strictly above)
    StrictlyAbove,
    /// `&<|` (does not extend above)
    NotExtendAbove,
    /// `|&>` (does not extend below)
    NotExtendBelow,
    /// `||/` (cube root)
    CubeRoot,
    /// `~~*` (ILIKE)
    Ilike,
    /// `!~~` (NOT LIKE)
    NotLike,
    /// `!~*` (no case-insensitive regex match)
    NotRegexMatchI,
    /// `->` (JSON field)
    JsonGet,
    /// `#>` (JSON path)
    JsonPath,
    /// `@>` (contains)
    Contains,
    /// `<@` (contained by)
    ContainedBy,
    /// `&&` (overlap)
    Overlap,
    /// `||`
    Concat,
    /// `::`
    Cast,
    /// `<<`
    LeftShift,
    /// `>>`
    RightShift,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `<>`
    NotEq,
    /// `!=`
    BangEq,
    /// `~*` (case-insensitive regex match)
    RegexMatchI,
    /// `!~` (no regex match)
    NotRegexMatch,
    /// `~~` (LIKE)
    Like,
    /// `+=`
    PlusEq,
    /// `-=`
    MinusEq,
    /// `*=`
    StarEq,
    /// `/=`
    SlashEq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `=`
    Eq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `~` (regex match, bitwise not)
    Tilde,
    /// `!`
    Bang,
    /// `&`
    Ampersand,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `?`
    Question,
}

impl Operator {
    /// Returns the Postgres spelling of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotIlike => "!~~*",
            Self::JsonGetText => "->>",
            Self::JsonPathText => "#>>",
            Self::SubnetContainedOrEq => "<<=",
            Self::SubnetContainsOrEq => ">>=",
            Self::Distance => "<->",
            Self::Perpendicular => "?-|",
            Self::Parallel => "?||",
            Self::StrictlyBelow => "<<|",
            Self::StrictlyAbove => "|>>",
            Self::NotExtendAbove => "&<|",
            Self::NotExtendBelow => "|&>",
            Self::CubeRoot => "||/",
            Self::Ilike => "~~*",
            Self::NotLike => "!~~",
            Self::NotRegexMatchI => "!~*",
            Self::JsonGet => "->",
            Self::JsonPath => "#>",
            Self::Contains => "@>",
            Self::ContainedBy => "<@",
            Self::Overlap => "&&",
            Self::Concat => "||",
            Self::Cast => "::",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::NotEq => "<>",
            Self::BangEq => "!=",
            Self::RegexMatchI => "~*",
            Self::NotRegexMatch => "!~",
            Self::Like => "~~",
            Self::PlusEq => "+=",
            Self::MinusEq => "-=",
            Self::StarEq => "*=",
            Self::SlashEq => "/=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Tilde => "~",
            Self::Bang => "!",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Question => "?",
        }
    }
}

/// Structural symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Punctuator {
    /// .
    Dot,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// :
    Colon,
}

impl Punctuator {
    /// Returns the spelling of the punctuator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dot => ".",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Colon => ":",
        }
    }
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Reserved word (text is upper-cased)
    Keyword(Keyword),
    /// Symbolic operator
    Operator(Operator),
    /// Structural symbol
    Punctuator(Punctuator),
    /// Quoted string literal, delimiters included (e.g., 'hello')
    String,
    /// Run of decimal digits (e.g., 42)
    Number,
    /// Identifier, or operator/punctuator text the dialect has no kind for
    Identifier,
    /// String literal missing its closing quote; text runs to end of input
    Invalid,
    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(kw) => write!(f, "keyword {}", kw.as_str()),
            Self::Operator(op) => write!(f, "operator {}", op.as_str()),
            Self::Punctuator(p) => write!(f, "punctuator {}", p.as_str()),
            Self::String => f.write_str("string"),
            Self::Number => f.write_str("number"),
            Self::Identifier => f.write_str("identifier"),
            Self::Invalid => f.write_str("invalid"),
            Self::Eof => f.write_str("end of input"),
        }
    }
}

/// A classified lexeme with its source text and location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The consumed text; upper-cased for keywords, verbatim otherwise.
    pub text: String,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Creates the end-of-input token for an input of `len` bytes.
    #[must_use]
    pub const fn eof(len: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: String::new(),
            span: Span::empty_at(len),
        }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this is an unterminated string.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self.kind, TokenKind::Invalid)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Returns the operator if this is an operator token.
    #[must_use]
    pub const fn as_operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Returns the punctuator if this is a punctuator token.
    #[must_use]
    pub const fn as_punctuator(&self) -> Option<Punctuator> {
        match self.kind {
            TokenKind::Punctuator(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Keyword> for TokenKind {
    fn from(kw: Keyword) -> Self {
        Self::Keyword(kw)
    }
}

impl From<Operator> for TokenKind {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl From<Punctuator> for TokenKind {
    fn from(p: Punctuator) -> Self {
        Self::Punctuator(p)
    }
}
