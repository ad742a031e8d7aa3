//! ClickHouse SQL lexer for syntax highlighting.
//!
//! The lexer is a table of lexing states, each an ordered list of
//! (pattern, action) rules. At every position the first rule of the current
//! state that matches wins; some rules push or pop states for comments and
//! quoted literals.

mod rule;
mod rules;
mod span;
mod state;
mod token;
mod tokenizer;

pub use rule::{Action, MatchRule, Parts, Pattern};
pub use span::Span;
pub use state::{LexingState, StateId};
pub use token::{Category, Token};
pub use tokenizer::{Tokenizer, Tokens};
