//! SQL Dialect support.
//!
//! Different databases spell their operators and reserve their words
//! differently. A [`Dialect`] describes those lexical rules as read-only
//! tables; the [`Lexer`](crate::lexer::Lexer) consults them but never
//! modifies them, so a single dialect can back any number of lexers.

mod postgres;

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DialectError, Result};
use crate::lexer::TokenKind;

pub use postgres::PostgresDialect;

/// Spelling to token kind lookup table.
pub type KindMap = BTreeMap<String, TokenKind>;

/// Lexical rules of a SQL dialect.
///
/// Implementations must return the same tables on every call.
pub trait Dialect {
    /// Reserved words, keyed by their upper-case spelling.
    fn keywords(&self) -> &KindMap;

    /// Operator spellings in match order.
    ///
    /// A spelling must come before every shorter spelling that is a prefix
    /// of it, otherwise the shorter one shadows it (`<` would win over `<=`).
    fn operators(&self) -> &[String];

    /// Kind of each operator spelling.
    fn operator_kinds(&self) -> &KindMap;

    /// Punctuator spellings in match order, with the same ordering rule as
    /// [`Dialect::operators`].
    fn punctuators(&self) -> &[String];

    /// Kind of each punctuator spelling.
    fn punctuator_kinds(&self) -> &KindMap;
}

/// A data-driven dialect.
///
/// Construction normalizes the tables: keyword keys are upper-cased and the
/// operator and punctuator lists are ordered longest-first, so the ordering
/// rule of [`Dialect::operators`] always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDialectTable")]
pub struct DialectTable {
    name: String,
    keywords: KindMap,
    operators: Vec<String>,
    operator_kinds: KindMap,
    punctuators: Vec<String>,
    punctuator_kinds: KindMap,
}

impl DialectTable {
    /// Starts building a dialect table.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> DialectTableBuilder {
        DialectTableBuilder {
            raw: RawDialectTable {
                name: name.into(),
                ..RawDialectTable::default()
            },
        }
    }

    /// Parses a dialect table from its JSON description.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Parse`] when the JSON is malformed or
    /// contains an empty spelling.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a dialect table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Io`] if the file cannot be read and
    /// [`DialectError::Parse`] if its contents are not a valid description.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Renders the table as pretty-printed JSON, in the format
    /// [`DialectTable::from_json`] reads back.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the dialect name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn assemble(raw: RawDialectTable) -> Self {
        let keywords = raw
            .keywords
            .into_iter()
            .map(|(spelling, kind)| (spelling.to_uppercase(), kind))
            .collect();
        let table = Self {
            name: raw.name,
            keywords,
            operators: longest_first(raw.operators),
            operator_kinds: raw.operator_kinds,
            punctuators: longest_first(raw.punctuators),
            punctuator_kinds: raw.punctuator_kinds,
        };
        debug!(
            dialect = %table.name,
            keywords = table.keywords.len(),
            operators = table.operators.len(),
            punctuators = table.punctuators.len(),
            "Dialect table assembled"
        );
        table
    }
}

impl Dialect for DialectTable {
    fn keywords(&self) -> &KindMap {
        &self.keywords
    }

    fn operators(&self) -> &[String] {
        &self.operators
    }

    fn operator_kinds(&self) -> &KindMap {
        &self.operator_kinds
    }

    fn punctuators(&self) -> &[String] {
        &self.punctuators
    }

    fn punctuator_kinds(&self) -> &KindMap {
        &self.punctuator_kinds
    }
}

/// Builder for [`DialectTable`].
#[derive(Debug, Clone)]
pub struct DialectTableBuilder {
    raw: RawDialectTable,
}

impl DialectTableBuilder {
    /// Adds a reserved word. Case is irrelevant.
    #[must_use]
    pub fn keyword(mut self, spelling: impl Into<String>, kind: impl Into<TokenKind>) -> Self {
        self.raw.keywords.insert(spelling.into(), kind.into());
        self
    }

    /// Adds an operator spelling and its kind.
    #[must_use]
    pub fn operator(mut self, spelling: impl Into<String>, kind: impl Into<TokenKind>) -> Self {
        let spelling = spelling.into();
        self.raw.operator_kinds.insert(spelling.clone(), kind.into());
        self.raw.operators.push(spelling);
        self
    }

    /// Adds an operator spelling with no kind. The lexer still splits words
    /// on it but reports the matched text as an identifier.
    #[must_use]
    pub fn unmapped_operator(mut self, spelling: impl Into<String>) -> Self {
        self.raw.operators.push(spelling.into());
        self
    }

    /// Adds a punctuator spelling and its kind.
    #[must_use]
    pub fn punctuator(mut self, spelling: impl Into<String>, kind: impl Into<TokenKind>) -> Self {
        let spelling = spelling.into();
        self.raw
            .punctuator_kinds
            .insert(spelling.clone(), kind.into());
        self.raw.punctuators.push(spelling);
        self
    }

    /// Adds a punctuator spelling with no kind.
    #[must_use]
    pub fn unmapped_punctuator(mut self, spelling: impl Into<String>) -> Self {
        self.raw.punctuators.push(spelling.into());
        self
    }

    /// Finishes the table.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::EmptySpelling`] if any table holds an empty
    /// spelling.
    pub fn build(self) -> Result<DialectTable> {
        DialectTable::try_from(self.raw)
    }
}

/// Unvalidated shape of a dialect description.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDialectTable {
    name: String,
    #[serde(default)]
    keywords: KindMap,
    #[serde(default)]
    operators: Vec<String>,
    #[serde(default)]
    operator_kinds: KindMap,
    #[serde(default)]
    punctuators: Vec<String>,
    #[serde(default)]
    punctuator_kinds: KindMap,
}

impl TryFrom<RawDialectTable> for DialectTable {
    type Error = DialectError;

    fn try_from(raw: RawDialectTable) -> Result<Self> {
        reject_empty("keyword", raw.keywords.keys())?;
        reject_empty("operator", raw.operators.iter())?;
        reject_empty("punctuator", raw.punctuators.iter())?;
        Ok(Self::assemble(raw))
    }
}

fn reject_empty<'s>(
    table: &'static str,
    mut spellings: impl Iterator<Item = &'s String>,
) -> Result<()> {
    if spellings.any(String::is_empty) {
        return Err(DialectError::EmptySpelling { table });
    }
    Ok(())
}

/// Drops repeated spellings and orders the rest by descending length,
/// keeping the declared order among spellings of equal length.
fn longest_first(spellings: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(spellings.len());
    for spelling in spellings {
        if !unique.contains(&spelling) {
            unique.push(spelling);
        }
    }
    unique.sort_by_key(|spelling| Reverse(spelling.len()));
    unique
}
