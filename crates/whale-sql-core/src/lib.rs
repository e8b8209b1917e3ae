//! # whale-sql-core
//!
//! A dialect-pluggable SQL tokenizer.
//!
//! This crate provides:
//! - A pull [`Lexer`] producing one classified [`Token`] per call
//! - A [`Dialect`] trait describing a SQL flavor's keywords, operators and
//!   punctuators, so lexical rules change without touching the lexer
//! - [`PostgresDialect`], the default dialect, and [`DialectTable`] for
//!   building or loading other dialects
//!
//! ## Tokenizing
//!
//! ```rust
//! use whale_sql_core::{Keyword, Lexer, Operator, Punctuator, TokenKind};
//!
//! let mut lexer = Lexer::new("SELECT * FROM schema.t;");
//! let kinds: Vec<TokenKind> = lexer.tokenize().into_iter().map(|t| t.kind).collect();
//!
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Keyword(Keyword::Select),
//!         TokenKind::Operator(Operator::Star),
//!         TokenKind::Keyword(Keyword::From),
//!         TokenKind::Identifier,
//!         TokenKind::Punctuator(Punctuator::Dot),
//!         TokenKind::Identifier,
//!         TokenKind::Punctuator(Punctuator::Semicolon),
//!         TokenKind::Eof,
//!     ]
//! );
//! ```
//!
//! ## Custom dialects
//!
//! ```rust
//! use whale_sql_core::{DialectTable, Keyword, Lexer, Operator, TokenKind};
//!
//! let dialect = DialectTable::builder("tiny")
//!     .keyword("select", Keyword::Select)
//!     .operator("=", Operator::Eq)
//!     .operator("==", Operator::Eq)
//!     .build()?;
//!
//! let tokens = Lexer::with_dialect("SELECT a==b", &dialect).tokenize();
//! assert_eq!(tokens[2].text, "==");
//! assert_eq!(tokens[2].kind, TokenKind::Operator(Operator::Eq));
//! # Ok::<(), whale_sql_core::DialectError>(())
//! ```

pub mod dialect;
pub mod error;
pub mod lexer;

pub use dialect::{Dialect, DialectTable, PostgresDialect};
pub use error::{DialectError, LexError};
pub use lexer::{Keyword, Lexer, Operator, Punctuator, Span, Token, TokenKind};
