//! SQL Tokenizer implementation.

use tracing::{debug, trace, warn};
use unicode_general_category::{get_general_category, GeneralCategory};

use super::{Span, Token, TokenKind};
use crate::dialect::{Dialect, KindMap, PostgresDialect};
use crate::error::LexError;

/// Whitespace skipped between tokens.
const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Decimal digit in any script (general category `Nd`).
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || get_general_category(c) == GeneralCategory::DecimalNumber
}

/// A pull lexer that tokenizes SQL input under the rules of a [`Dialect`].
///
/// The lexer only borrows its dialect, so one dialect can serve many lexers
/// at once. A lexer itself is a cursor and must be driven by one caller.
pub struct Lexer<'a, D: Dialect + ?Sized = PostgresDialect> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The lexical rules in effect.
    dialect: &'a D,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input using [`PostgresDialect`].
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self::with_dialect(input, &PostgresDialect)
    }
}

impl<'a, D: Dialect + ?Sized> Lexer<'a, D> {
    /// Creates a new lexer for the given input using `dialect`.
    #[must_use]
    pub const fn with_dialect(input: &'a str, dialect: &'a D) -> Self {
        Self {
            input,
            pos: 0,
            dialect,
        }
    }

    /// Returns the input not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns the current byte offset into the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns true once the whole input has been consumed.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            let rest = self.remaining();
            self.pos += rest.len() - rest.trim_start_matches(is_blank).len();

            let rest = self.remaining();
            if rest.starts_with("--") {
                // The line feed belongs to the comment.
                self.pos += rest.find('\n').map_or(rest.len(), |i| i + 1);
                continue;
            }

            if rest.starts_with("/*") {
                if let Some(i) = rest[2..].find("*/") {
                    self.pos += i + 4;
                } else {
                    warn!(
                        offset = self.pos,
                        "Unterminated block comment, discarding rest of input"
                    );
                    self.pos = self.input.len();
                }
                continue;
            }

            break;
        }
    }

    /// Consumes `len` bytes from the current position as a token.
    fn make_token(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        self.pos += len;
        let span = Span::new(start, self.pos);
        let token = Token::new(kind, &self.input[start..self.pos], span);
        trace!(kind = %token.kind, text = %token.text, start, "Token");
        token
    }

    /// Scans a run of digits.
    fn scan_number(&mut self) -> Option<Token> {
        let rest = self.remaining();
        let len = rest.len() - rest.trim_start_matches(is_decimal_digit).len();
        (len > 0).then(|| self.make_token(TokenKind::Number, len))
    }

    /// Scans a quoted string, keeping quotes and escapes verbatim.
    ///
    /// A quote preceded by a backslash does not close the string. A string
    /// that never closes consumes the rest of the input as an invalid token.
    fn scan_string(&mut self) -> Option<Token> {
        let rest = self.remaining();
        let quote = rest.chars().next().filter(|&c| c == '\'' || c == '"')?;

        let bytes = rest.as_bytes();
        let close = rest
            .char_indices()
            .skip(1)
            .find(|&(i, c)| c == quote && bytes[i - 1] != b'\\');

        Some(match close {
            Some((i, _)) => self.make_token(TokenKind::String, i + 1),
            None => {
                warn!(offset = self.pos, "Unterminated string literal");
                self.make_token(TokenKind::Invalid, rest.len())
            }
        })
    }

    /// Scans the first spelling of `spellings` that prefixes the remaining
    /// input, falling back to an identifier when `kinds` has no entry.
    fn scan_symbol(&mut self, spellings: &[String], kinds: &KindMap) -> Option<Token> {
        let rest = self.remaining();
        let spelling = first_prefix(spellings, rest)?;
        let kind = kinds.get(spelling).copied().unwrap_or_else(|| {
            debug!(spelling, "Dialect declares a spelling without a kind");
            TokenKind::Identifier
        });
        Some(self.make_token(kind, spelling.len()))
    }

    /// Scans a keyword or identifier.
    ///
    /// A word runs until whitespace or until an operator or punctuator
    /// begins. The first character is always taken so the scan never comes
    /// back empty.
    fn scan_word(&mut self) -> Token {
        let rest = self.remaining();
        let len = rest
            .char_indices()
            .skip(1)
            .find(|&(i, c)| c.is_whitespace() || self.starts_symbol(&rest[i..]))
            .map_or(rest.len(), |(i, _)| i);

        let upper = rest[..len].to_uppercase();
        match self.dialect.keywords().get(&upper).copied() {
            Some(kind) => {
                let mut token = self.make_token(kind, len);
                token.text = upper;
                token
            }
            None => self.make_token(TokenKind::Identifier, len),
        }
    }

    fn starts_symbol(&self, s: &str) -> bool {
        first_prefix(self.dialect.operators(), s).is_some()
            || first_prefix(self.dialect.punctuators(), s).is_some()
    }

    /// Scans the next token.
    ///
    /// Once the input is exhausted every call returns an EOF token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        if self.is_exhausted() {
            return Token::eof(self.input.len());
        }

        let dialect = self.dialect;
        self.scan_number()
            .or_else(|| self.scan_string())
            .or_else(|| self.scan_symbol(dialect.operators(), dialect.operator_kinds()))
            .or_else(|| self.scan_symbol(dialect.punctuators(), dialect.punctuator_kinds()))
            .unwrap_or_else(|| self.scan_word())
    }

    /// Tokenizes the entire input and returns all tokens, including the
    /// trailing EOF token. Unterminated strings appear as
    /// [`TokenKind::Invalid`] tokens.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Like [`Lexer::tokenize`], but rejects unterminated strings.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::UnterminatedString`] for the first string literal
    /// missing its closing quote.
    pub fn try_tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let tokens = self.tokenize();
        match tokens.iter().find(|t| t.is_invalid()) {
            Some(invalid) => Err(LexError::UnterminatedString { span: invalid.span }),
            None => Ok(tokens),
        }
    }
}

impl<D: Dialect + ?Sized> Iterator for Lexer<'_, D> {
    type Item = Token;

    /// Yields tokens up to, but not including, EOF.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl<D: Dialect + ?Sized> core::iter::FusedIterator for Lexer<'_, D> {}

/// Returns the first spelling that `s` starts with.
fn first_prefix<'t>(spellings: &'t [String], s: &str) -> Option<&'t str> {
    spellings
        .iter()
        .map(String::as_str)
        .find(|spelling| !spelling.is_empty() && s.starts_with(spelling))
}
