#![allow(dead_code)]

use oxide_ch_lexer::{Category, SymbolCatalog, Token, Tokenizer};

/// A small slice of the ClickHouse catalog, enough to reach every rule.
pub fn catalog() -> SymbolCatalog {
    SymbolCatalog::new()
        .with_operators(["AND", "OR", "NOT", "IN", "LIKE", "BETWEEN", "IS"])
        .with_datatypes([
            "UInt8", "UInt64", "Int", "Int32", "String", "DateTime", "Float64", "Nullable",
        ])
        .with_formats(["JSON", "JSONEachRow", "TabSeparated", "CSV"])
        .with_aggregation_functions(["COUNT", "sum", "avg", "uniq"])
        .with_case_insensitive_functions(["count", "lower", "upper", "abs"])
        .with_functions(["toDate", "now", "arrayJoin"])
        .with_keywords([
            "SELECT", "FROM", "WHERE", "GROUP", "BY", "FORMAT", "LIMIT", "AS", "INSERT", "INTO",
        ])
}

pub fn tokenizer() -> Tokenizer {
    Tokenizer::new(&catalog()).unwrap_or_else(|e| panic!("Failed to build tokenizer: {e}"))
}

pub fn tokens(input: &str) -> Vec<Token<'_>> {
    let tokenizer = tokenizer();
    tokenizer.tokenize(input).collect()
}

/// (category, text) pairs for `input`.
pub fn lex(input: &str) -> Vec<(Category, &str)> {
    tokens(input)
        .into_iter()
        .map(|t| (t.category, t.text))
        .collect()
}

pub fn categories(input: &str) -> Vec<Category> {
    tokens(input).into_iter().map(|t| t.category).collect()
}

/// Lexes `input` and drops the whitespace tokens in between.
pub fn lex_words(input: &str) -> Vec<(Category, &str)> {
    lex(input)
        .into_iter()
        .filter(|(category, text)| !(*category == Category::Text && text.trim().is_empty()))
        .collect()
}

/// Asserts that `tokens` cover `input` exactly, in order, without gaps.
pub fn assert_covers(input: &str, tokens: &[Token<'_>]) {
    let mut offset = 0;
    for token in tokens {
        assert_eq!(
            token.span.start, offset,
            "Gap before {token:?} in {input:?}"
        );
        assert_eq!(token.span.slice(input), Some(token.text));
        offset = token.span.end;
    }
    assert_eq!(offset, input.len(), "Tokens stop short of the end of {input:?}");
    let joined: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(joined, input);
}
