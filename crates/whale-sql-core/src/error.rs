//! Error types for lexing and dialect loading.

use crate::lexer::Span;

/// Errors surfaced by the strict tokenizing entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A quoted string reached end of input without its closing quote.
    #[error("Unterminated string literal starting at byte {}", .span.start)]
    UnterminatedString {
        /// Span of the partial literal, through end of input.
        span: Span,
    },
}

/// Errors that can occur while building a dialect from configuration.
#[derive(Debug, thiserror::Error)]
pub enum DialectError {
    /// The dialect description is not valid JSON for a dialect table.
    #[error("Invalid dialect description: {0}")]
    Parse(#[from] serde_json::Error),

    /// A table contains an empty spelling, which would match without
    /// consuming input.
    #[error("Empty spelling in {table} table")]
    EmptySpelling {
        /// Which table held the empty entry.
        table: &'static str,
    },

    /// IO error reading a dialect file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for dialect construction.
pub type Result<T> = std::result::Result<T, DialectError>;
