//! Byte ranges of tokens within the query text.

use serde::Serialize;

/// A half-open byte range into the tokenized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no input.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the part of `input` covered by this span.
    ///
    /// Returns `None` if the span lies outside `input` or splits a
    /// UTF-8 sequence.
    #[must_use]
    pub fn slice<'a>(&self, input: &'a str) -> Option<&'a str> {
        input.get(self.start..self.end)
    }

    /// Returns true if `other` starts exactly where this span ends.
    #[must_use]
    pub const fn is_followed_by(&self, other: &Self) -> bool {
        self.end == other.start
    }
}
