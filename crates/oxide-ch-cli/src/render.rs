//! ANSI terminal styles for token categories.

use oxide_ch_lexer::{Category, Token};

const RESET: &str = "\x1b[0m";

/// Returns the escape sequence that starts the style for `category`, or
/// `None` if the category is printed as is.
pub fn style(category: Category) -> Option<&'static str> {
    match category {
        Category::Keyword => Some("\x1b[1;32m"),
        Category::KeywordType => Some("\x1b[32m"),
        Category::FunctionName => Some("\x1b[34m"),
        Category::Label | Category::Identifier => Some("\x1b[36m"),
        Category::StringLiteral => Some("\x1b[33m"),
        Category::Number => Some("\x1b[35m"),
        Category::Operator => Some("\x1b[1m"),
        Category::Comment | Category::CommentMultiline | Category::Whitespace => Some("\x1b[90m"),
        Category::Error => Some("\x1b[31;1m"),
        Category::Text | Category::Punctuation | Category::Output => None,
    }
}

/// Renders tokens back into text, wrapping each styled token in its escape
/// sequence.
pub fn highlight<'a>(tokens: impl IntoIterator<Item = Token<'a>>) -> String {
    let mut out = String::new();
    for token in tokens {
        match style(token.category) {
            Some(start) if !token.text.is_empty() => {
                out.push_str(start);
                out.push_str(token.text);
                out.push_str(RESET);
            }
            _ => out.push_str(token.text),
        }
    }
    out
}
