//! SQL Lexer/Tokenizer
//!
//! A pull lexer that turns SQL text into [`Token`]s one call at a time.
//! Which words are keywords and which symbols are operators or punctuators
//! is decided by the bound [`Dialect`](crate::dialect::Dialect).

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Operator, Punctuator, Token, TokenKind};
pub use tokenizer::Lexer;
