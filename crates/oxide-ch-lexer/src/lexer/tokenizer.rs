//! The rule-table tokenizer.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::rule::{Action, MatchRule};
use super::rules;
use super::state::{LexingState, StateId};
use super::{Category, Span, Token};
use crate::catalog::SymbolCatalog;
use crate::error::Result;

/// An immutable table of lexing states.
///
/// Building a tokenizer compiles every rule once; tokenizing only reads the
/// table, so one tokenizer can serve any number of runs, on any thread.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    states: Vec<LexingState>,
}

impl Tokenizer {
    /// Builds the ClickHouse query tokenizer for `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`LexerError::InvalidPattern`](crate::LexerError::InvalidPattern)
    /// if a rule fails to compile. Catalog names are escaped, so this only
    /// happens when an alternation outgrows the regex size limit.
    pub fn new(catalog: &SymbolCatalog) -> Result<Self> {
        let tokenizer = Self::from_states(rules::clickhouse(catalog)?);
        debug!(
            states = tokenizer.states.len(),
            rules = tokenizer.rule_count(),
            names = catalog.len(),
            "built query tokenizer"
        );
        Ok(tokenizer)
    }

    /// Builds the tokenizer for `Pretty*` result tables, which separates
    /// cell content from box-drawing borders.
    ///
    /// # Errors
    ///
    /// Returns [`LexerError::InvalidPattern`](crate::LexerError::InvalidPattern)
    /// if a rule fails to compile.
    pub fn pretty_format() -> Result<Self> {
        let tokenizer = Self::from_states(rules::pretty_format()?);
        debug!(rules = tokenizer.rule_count(), "built pretty-format tokenizer");
        Ok(tokenizer)
    }

    /// Creates a tokenizer from hand-built states.
    ///
    /// Runs start in [`StateId::Root`]; a state missing from `states`
    /// behaves as a state without rules.
    #[must_use]
    pub const fn from_states(states: Vec<LexingState>) -> Self {
        Self { states }
    }

    /// Returns the state named `id`.
    #[must_use]
    pub fn state(&self, id: StateId) -> Option<&LexingState> {
        self.states.iter().find(|state| state.id() == id)
    }

    /// Total number of rules across all states.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.states.iter().map(LexingState::len).sum()
    }

    /// Starts a tokenization run over `input`.
    ///
    /// Tokens are produced on demand. Concatenating their text gives back
    /// `input` exactly.
    ///
    /// ```
    /// use oxide_ch_lexer::{Category, SymbolCatalog, Tokenizer};
    ///
    /// let catalog = SymbolCatalog::new().with_keywords(["SELECT"]);
    /// let tokenizer = Tokenizer::new(&catalog).unwrap();
    /// let tokens: Vec<_> = tokenizer
    ///     .tokenize("select 1")
    ///     .map(|t| (t.category, t.text))
    ///     .collect();
    /// assert_eq!(
    ///     tokens,
    ///     vec![
    ///         (Category::Keyword, "select"),
    ///         (Category::Text, " "),
    ///         (Category::Number, "1"),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn tokenize<'t, 'a>(&'t self, input: &'a str) -> Tokens<'t, 'a> {
        Tokens {
            tokenizer: self,
            input,
            cursor: Cursor::new(),
            pending: VecDeque::new(),
        }
    }

    fn rules_for(&self, id: StateId) -> &[MatchRule] {
        self.state(id).map(LexingState::rules).unwrap_or_default()
    }
}

/// Position in the input plus the stack of active states.
#[derive(Debug, Clone)]
struct Cursor {
    pos: usize,
    stack: Vec<StateId>,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pos: 0,
            stack: vec![StateId::Root],
        }
    }

    fn state(&self) -> StateId {
        self.stack.last().copied().unwrap_or(StateId::Root)
    }

    fn push(&mut self, id: StateId) {
        self.stack.push(id);
    }

    /// Leaves the current state; the root state is never left.
    fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }
}

/// A lazy tokenization run, created by [`Tokenizer::tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'t, 'a> {
    tokenizer: &'t Tokenizer,
    input: &'a str,
    cursor: Cursor,
    pending: VecDeque<Token<'a>>,
}

impl Tokens<'_, '_> {
    /// Byte offset up to which the input has been consumed.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.cursor.pos
    }

    /// The active states, outermost first.
    ///
    /// Once the run is exhausted this tells whether the input ended inside
    /// a comment or an unterminated literal.
    #[must_use]
    pub fn state_stack(&self) -> &[StateId] {
        &self.cursor.stack
    }

    /// Matches one rule at the cursor and queues the tokens it emits.
    fn step(&mut self) {
        let input = self.input;
        let start = self.cursor.pos;
        let rest = &input[start..];
        let line_start = start == 0 || input.as_bytes()[start - 1] == b'\n';

        let matched = self
            .tokenizer
            .rules_for(self.cursor.state())
            .iter()
            .find_map(|rule| Some((rule.match_len(rest, line_start)?, rule.action())));

        match matched {
            Some((len, action)) => {
                self.emit_parts(action, start, start + len);
                match action {
                    Action::Push(_, id) => self.cursor.push(id),
                    Action::Pop(_) => self.cursor.pop(),
                    Action::Emit(_) | Action::Call { .. } => {}
                }
                self.cursor.pos = start + len;
            }
            None => {
                let len = rest.chars().next().map_or(1, char::len_utf8);
                trace!(
                    offset = start,
                    state = %self.cursor.state(),
                    "no rule matched, emitting error token"
                );
                self.emit(Category::Error, start, start + len);
                self.cursor.pos = start + len;
            }
        }
    }

    fn emit_parts(&mut self, action: Action, start: usize, end: usize) {
        let input = self.input;
        for (category, range) in action.parts(&input[start..end]) {
            self.emit(category, start + range.start, start + range.end);
        }
    }

    fn emit(&mut self, category: Category, start: usize, end: usize) {
        let input = self.input;
        let token = Token::new(category, &input[start..end], Span::new(start, end));
        self.pending.push_back(token);
    }
}

impl<'a> Iterator for Tokens<'_, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() && self.cursor.pos < self.input.len() {
            self.step();
        }
        self.pending.pop_front()
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}
