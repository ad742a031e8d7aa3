//! Token categories and classified spans.

use std::fmt;

use serde::Serialize;

use super::Span;

/// Highlighting category of a token.
///
/// The set is flat. A few categories refine another one (see
/// [`Category::parent`]); renderers that do not care can ignore that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Plain text: whitespace, unrecognized words, console commands.
    Text,
    /// Table borders in pretty-printed output.
    Whitespace,
    /// `--` comments.
    Comment,
    /// `/* ... */` comments, including nested ones.
    CommentMultiline,
    /// Integer and float literals.
    Number,
    /// Quoted strings.
    StringLiteral,
    /// Single-character operators.
    Operator,
    /// Keywords and word operators.
    Keyword,
    /// Data type names.
    KeywordType,
    /// Format names.
    Label,
    /// Function names.
    FunctionName,
    /// Brackets, separators and dots.
    Punctuation,
    /// Bare or double-quoted identifiers.
    Identifier,
    /// Cell content in pretty-printed output.
    Output,
    /// A character no rule could classify.
    Error,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Text,
        Self::Whitespace,
        Self::Comment,
        Self::CommentMultiline,
        Self::Number,
        Self::StringLiteral,
        Self::Operator,
        Self::Keyword,
        Self::KeywordType,
        Self::Label,
        Self::FunctionName,
        Self::Punctuation,
        Self::Identifier,
        Self::Output,
        Self::Error,
    ];

    /// Returns the stable dotted name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Whitespace => "whitespace",
            Self::Comment => "comment",
            Self::CommentMultiline => "comment.multiline",
            Self::Number => "number",
            Self::StringLiteral => "string",
            Self::Operator => "operator",
            Self::Keyword => "keyword",
            Self::KeywordType => "keyword.type",
            Self::Label => "label",
            Self::FunctionName => "function",
            Self::Punctuation => "punctuation",
            Self::Identifier => "identifier",
            Self::Output => "output",
            Self::Error => "error",
        }
    }

    /// Returns the category this one refines, if any.
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::CommentMultiline => Some(Self::Comment),
            Self::KeywordType => Some(Self::Keyword),
            _ => None,
        }
    }

    /// Returns true if `self` is `other` or refines it.
    #[must_use]
    pub fn is_a(self, other: Self) -> bool {
        self == other || self.parent() == Some(other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A classified piece of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    /// The highlighting category.
    pub category: Category,
    /// The covered input text.
    pub text: &'a str,
    /// Byte range of `text` in the input.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a token.
    #[must_use]
    pub const fn new(category: Category, text: &'a str, span: Span) -> Self {
        Self {
            category,
            text,
            span,
        }
    }

    /// Byte offset of the token in the input.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.span.start
    }

    /// Returns true if no rule matched this token's character.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.category, Category::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_are_unique() {
        let mut names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Category::ALL.len());
    }

    #[test]
    fn test_category_parent() {
        assert_eq!(Category::KeywordType.parent(), Some(Category::Keyword));
        assert_eq!(Category::CommentMultiline.parent(), Some(Category::Comment));
        assert_eq!(Category::Keyword.parent(), None);
    }

    #[test]
    fn test_category_is_a() {
        assert!(Category::KeywordType.is_a(Category::Keyword));
        assert!(Category::Keyword.is_a(Category::Keyword));
        assert!(!Category::Keyword.is_a(Category::KeywordType));
        assert!(!Category::Label.is_a(Category::Keyword));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::CommentMultiline.to_string(), "comment.multiline");
        assert_eq!(Category::FunctionName.to_string(), "function");
        assert_eq!(format!("{:<8}|", Category::Number), "number  |");
    }

    #[test]
    fn test_token_serializes_flat() {
        let token = Token::new(Category::KeywordType, "UInt64", Span::new(3, 9));
        let json = serde_json::to_value(token).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "category": "keyword_type",
                "text": "UInt64",
                "span": {"start": 3, "end": 9},
            })
        );
    }

    #[test]
    fn test_token_offset_and_error() {
        let token = Token::new(Category::Error, "$", Span::new(4, 5));
        assert_eq!(token.offset(), 4);
        assert!(token.is_error());
        assert!(!Token::new(Category::Text, "a", Span::new(0, 1)).is_error());
    }
}
