//! Match rules: an anchored pattern and the action taken when it matches.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use super::{Category, StateId};

/// Compiled size limit for a single pattern. Catalog alternations with a
/// few thousand case-insensitive names exceed the regex crate default.
const PATTERN_SIZE_LIMIT: usize = 64 << 20;

/// A regular expression that only matches at the start of its haystack.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles `source`, anchored at the cursor.
    ///
    /// # Errors
    ///
    /// Returns the regex error if `source` is not a valid pattern.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&format!(r"\A(?:{source})"))
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// Returns the pattern as written, without the anchor.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the byte length of the match at the start of `rest`.
    #[must_use]
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        self.regex.find(rest).map(|m| m.end())
    }
}

/// What a rule emits, and how it moves the state stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// One token spanning the whole match.
    Emit(Category),
    /// A function call head `name<gap>(` split into three tokens.
    Call {
        /// Category of the function name.
        name: Category,
        /// Category of the whitespace before the parenthesis.
        gap: Category,
        /// Category of the opening parenthesis.
        paren: Category,
    },
    /// One token, then enter the given state.
    Push(Category, StateId),
    /// One token, then leave the current state.
    Pop(Category),
}

impl Action {
    /// Splits `matched` into the ordered sub-tokens this action emits.
    ///
    /// Ranges are relative to `matched` and cover it without gaps.
    #[must_use]
    pub fn parts(self, matched: &str) -> Parts {
        match self {
            Self::Emit(category) | Self::Push(category, _) | Self::Pop(category) => {
                Parts::one(category, 0..matched.len())
            }
            Self::Call { name, gap, paren } => {
                let open = matched.len().saturating_sub(1);
                let name_end = matched[..open].trim_end().len();
                Parts::three([
                    (name, 0..name_end),
                    (gap, name_end..open),
                    (paren, open..matched.len()),
                ])
            }
        }
    }
}

/// Sub-tokens produced by one action, in emission order.
#[derive(Debug, Clone)]
pub struct Parts {
    items: [(Category, Range<usize>); 3],
    len: usize,
    next: usize,
}

impl Parts {
    const fn one(category: Category, range: Range<usize>) -> Self {
        Self {
            items: [
                (category, range),
                (Category::Text, 0..0),
                (Category::Text, 0..0),
            ],
            len: 1,
            next: 0,
        }
    }

    const fn three(items: [(Category, Range<usize>); 3]) -> Self {
        Self {
            items,
            len: 3,
            next: 0,
        }
    }
}

impl Iterator for Parts {
    type Item = (Category, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let item = self.items[self.next].clone();
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Parts {}

/// A pattern paired with its action.
#[derive(Debug, Clone)]
pub struct MatchRule {
    pattern: Pattern,
    action: Action,
    line_start: bool,
}

impl MatchRule {
    /// Creates a rule that may match anywhere.
    #[must_use]
    pub const fn new(pattern: Pattern, action: Action) -> Self {
        Self {
            pattern,
            action,
            line_start: false,
        }
    }

    /// Creates a rule that only matches at the start of a line.
    #[must_use]
    pub const fn at_line_start(pattern: Pattern, action: Action) -> Self {
        Self {
            pattern,
            action,
            line_start: true,
        }
    }

    /// Returns the rule's pattern.
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the rule's action.
    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Returns the length of a non-empty match at the start of `rest`.
    ///
    /// Empty matches are rejected so every applied rule consumes input.
    #[must_use]
    pub fn match_len(&self, rest: &str, line_start: bool) -> Option<usize> {
        if self.line_start && !line_start {
            return None;
        }
        self.pattern.match_len(rest).filter(|&len| len > 0)
    }
}

/// Builds an alternation matching any of `names` literally.
///
/// Longer names come first so a name never loses to one of its own
/// prefixes. Returns `None` when there is nothing to match.
#[must_use]
pub fn word_alternation(names: &[String]) -> Option<String> {
    let mut names: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|name| !name.is_empty())
        .collect();
    if names.is_empty() {
        return None;
    }
    names.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    names.dedup();
    let escaped: Vec<String> = names.into_iter().map(regex::escape).collect();
    Some(format!("(?:{})", escaped.join("|")))
}
