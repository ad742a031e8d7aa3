//! # oxide-ch-lexer
//!
//! A lexer classifying ClickHouse SQL for syntax highlighting.
//!
//! This crate provides:
//! - An ordered, regex-driven rule table with stacked lexing states
//! - A lazy token stream that never fails and never drops input
//! - A serde-loadable catalog of keywords, functions, types and formats
//!
//! ## Tokenizing a query
//!
//! ```rust
//! use oxide_ch_lexer::{Category, SymbolCatalog, Tokenizer};
//!
//! let catalog = SymbolCatalog::new()
//!     .with_keywords(["SELECT", "FROM"])
//!     .with_aggregation_functions(["count"]);
//! let tokenizer = Tokenizer::new(&catalog).unwrap();
//!
//! let categories: Vec<Category> = tokenizer
//!     .tokenize("SELECT count(*) FROM t")
//!     .map(|token| token.category)
//!     .collect();
//!
//! assert_eq!(categories[0], Category::Keyword);
//! assert_eq!(categories[2], Category::FunctionName);
//! ```
//!
//! ## No input is lost
//!
//! Characters no rule accepts become one-character
//! [`Category::Error`] tokens, so the token texts always add up to the
//! input:
//!
//! ```rust
//! use oxide_ch_lexer::{SymbolCatalog, Tokenizer};
//!
//! let tokenizer = Tokenizer::new(&SymbolCatalog::new()).unwrap();
//! let input = "SELECT $1 /* unterminated";
//! let text: String = tokenizer.tokenize(input).map(|token| token.text).collect();
//! assert_eq!(text, input);
//! ```

pub mod catalog;
pub mod error;
pub mod lexer;

pub use catalog::SymbolCatalog;
pub use error::{LexerError, Result};
pub use lexer::{Category, Span, StateId, Token, Tokenizer, Tokens};
