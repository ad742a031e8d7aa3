//! Error types for building tokenizers and loading symbol catalogs.

use std::path::PathBuf;

use thiserror::Error;

use crate::lexer::StateId;

/// Errors raised while building a rule table or loading a catalog.
///
/// Tokenizing itself never fails; unmatched input is reported as
/// [`Category::Error`](crate::Category::Error) tokens instead.
#[derive(Debug, Error)]
pub enum LexerError {
    /// A rule pattern failed to compile.
    #[error("invalid pattern in state '{state}': {source}")]
    InvalidPattern {
        /// The lexing state the rule belongs to.
        state: StateId,
        /// The pattern source as written in the rule table.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// The catalog JSON could not be decoded.
    #[error("invalid symbol catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("failed to read symbol catalog '{}': {source}", path.display())]
    Io {
        /// Path of the catalog file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for lexer construction.
pub type Result<T> = std::result::Result<T, LexerError>;
