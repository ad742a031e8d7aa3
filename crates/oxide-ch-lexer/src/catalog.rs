//! The symbol catalog: the named words a tokenizer recognizes.
//!
//! A catalog is plain data. It is read once when a
//! [`Tokenizer`](crate::Tokenizer) is built and never consulted again.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LexerError, Result};

/// Lists of recognized ClickHouse names, grouped by how they are highlighted.
///
/// Every list defaults to empty, so a JSON catalog only needs the lists it
/// actually fills in.
///
/// ```
/// use oxide_ch_lexer::SymbolCatalog;
///
/// let catalog = SymbolCatalog::from_json_str(r#"{"keywords": ["SELECT", "FROM"]}"#).unwrap();
/// assert_eq!(catalog.keywords, vec!["SELECT", "FROM"]);
/// assert!(catalog.functions.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SymbolCatalog {
    /// Word operators such as `AND` or `LIKE`, matched case-insensitively.
    pub operators: Vec<String>,
    /// Data type names, matched case-sensitively.
    pub datatypes: Vec<String>,
    /// Input/output format names such as `JSONEachRow`.
    pub formats: Vec<String>,
    /// Aggregate functions, only highlighted when called.
    pub aggregation_functions: Vec<String>,
    /// Functions matched case-insensitively, called or not.
    pub case_insensitive_functions: Vec<String>,
    /// Regular functions, only highlighted when called.
    pub functions: Vec<String>,
    /// General keywords, matched case-insensitively.
    pub keywords: Vec<String>,
}

fn collect<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

impl SymbolCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the word operators.
    #[must_use]
    pub fn with_operators<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.operators = collect(names);
        self
    }

    /// Sets the data type names.
    #[must_use]
    pub fn with_datatypes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.datatypes = collect(names);
        self
    }

    /// Sets the format names.
    #[must_use]
    pub fn with_formats<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formats = collect(names);
        self
    }

    /// Sets the aggregate function names.
    #[must_use]
    pub fn with_aggregation_functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aggregation_functions = collect(names);
        self
    }

    /// Sets the case-insensitive function names.
    #[must_use]
    pub fn with_case_insensitive_functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.case_insensitive_functions = collect(names);
        self
    }

    /// Sets the regular function names.
    #[must_use]
    pub fn with_functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.functions = collect(names);
        self
    }

    /// Sets the general keywords.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = collect(names);
        self
    }

    /// Decodes a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LexerError::Catalog`] if the JSON is malformed or names an
    /// unknown list.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and decodes a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`LexerError::Io`] if the file cannot be read and
    /// [`LexerError::Catalog`] if its content is not a valid catalog.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LexerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Total number of names across all lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists().iter().map(|list| list.len()).sum()
    }

    /// Returns true if no list contains a name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists().iter().all(|list| list.is_empty())
    }

    fn lists(&self) -> [&[String]; 7] {
        [
            &self.operators,
            &self.datatypes,
            &self.formats,
            &self.aggregation_functions,
            &self.case_insensitive_functions,
            &self.functions,
            &self.keywords,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_lists() {
        let catalog = SymbolCatalog::new()
            .with_keywords(["SELECT", "FROM"])
            .with_datatypes(vec![String::from("UInt64")]);
        assert_eq!(catalog.keywords, vec!["SELECT", "FROM"]);
        assert_eq!(catalog.datatypes, vec!["UInt64"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = SymbolCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_from_json_defaults_missing_lists() {
        let catalog = SymbolCatalog::from_json_str(r#"{"formats": ["CSV"]}"#).unwrap();
        assert_eq!(catalog.formats, vec!["CSV"]);
        assert!(catalog.keywords.is_empty());
        assert!(catalog.operators.is_empty());
    }

    #[test]
    fn test_from_json_rejects_unknown_list() {
        let err = SymbolCatalog::from_json_str(r#"{"tables": ["system.one"]}"#).unwrap_err();
        assert!(matches!(err, LexerError::Catalog(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = SymbolCatalog::from_json_str("{").unwrap_err();
        assert!(matches!(err, LexerError::Catalog(_)));
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let catalog = SymbolCatalog::new()
            .with_functions(["toDate", "now"])
            .with_formats(["JSONEachRow"]);
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(SymbolCatalog::from_json_str(&json).unwrap(), catalog);
    }

    #[test]
    fn test_from_missing_path() {
        let err = SymbolCatalog::from_path("/definitely/not/here.json").unwrap_err();
        match err {
            LexerError::Io { path, .. } => {
                assert_eq!(path, Path::new("/definitely/not/here.json"));
            }
            other => panic!("Expected IO error, got {other:?}"),
        }
    }
}
