//! Lexing states: named, ordered rule lists.

use std::fmt;

use super::rule::{Action, MatchRule, Pattern, word_alternation};
use crate::error::{LexerError, Result};

/// Name of a lexing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    /// Top-level query text.
    Root,
    /// Inside a `/* ... */` comment.
    MultilineComment,
    /// Inside a single-quoted string that had no closing quote in sight.
    String,
    /// Inside a double-quoted identifier that had no closing quote in sight.
    QuotedIdent,
}

impl StateId {
    /// Returns the state's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::MultilineComment => "multiline-comments",
            Self::String => "string",
            Self::QuotedIdent => "quoted-ident",
        }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// An ordered list of rules; the first rule that matches wins.
#[derive(Debug, Clone)]
pub struct LexingState {
    id: StateId,
    rules: Vec<MatchRule>,
}

impl LexingState {
    /// Creates a state with no rules.
    #[must_use]
    pub const fn new(id: StateId) -> Self {
        Self {
            id,
            rules: Vec::new(),
        }
    }

    /// Appends a rule.
    ///
    /// # Errors
    ///
    /// Returns [`LexerError::InvalidPattern`] if `source` does not compile.
    pub fn rule(mut self, source: &str, action: Action) -> Result<Self> {
        let pattern = self.compile(source)?;
        self.rules.push(MatchRule::new(pattern, action));
        Ok(self)
    }

    /// Appends a rule that only matches at the start of a line.
    ///
    /// # Errors
    ///
    /// Returns [`LexerError::InvalidPattern`] if `source` does not compile.
    pub fn line_rule(mut self, source: &str, action: Action) -> Result<Self> {
        let pattern = self.compile(source)?;
        self.rules.push(MatchRule::at_line_start(pattern, action));
        Ok(self)
    }

    /// Appends a rule matching any of `names`, wrapped in `prefix` and
    /// `suffix`. Nothing is appended when `names` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`LexerError::InvalidPattern`] if the combined pattern does
    /// not compile.
    pub fn words_rule(
        self,
        names: &[String],
        prefix: &str,
        suffix: &str,
        action: Action,
    ) -> Result<Self> {
        match word_alternation(names) {
            Some(words) => self.rule(&format!("{prefix}{words}{suffix}"), action),
            None => Ok(self),
        }
    }

    /// Returns the state's name.
    #[must_use]
    pub const fn id(&self) -> StateId {
        self.id
    }

    /// Returns the rules in match order.
    #[must_use]
    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the state has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn compile(&self, source: &str) -> Result<Pattern> {
        Pattern::new(source).map_err(|source_err| LexerError::InvalidPattern {
            state: self.id,
            pattern: source.to_string(),
            source: source_err,
        })
    }
}
