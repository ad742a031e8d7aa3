//! Rule tables for ClickHouse queries and for pretty-printed result tables.
//!
//! Rule order is the only precedence mechanism: the more specific a rule,
//! the earlier it has to appear.

use super::rule::Action;
use super::state::{LexingState, StateId};
use super::Category;
use crate::catalog::SymbolCatalog;
use crate::error::Result;

const CALL_SUFFIX: &str = r"\s*\(";

const CALL: Action = Action::Call {
    name: Category::FunctionName,
    gap: Category::Text,
    paren: Category::Punctuation,
};

const BOX_DRAWING: &str = "┌─┬┐│└┴┘├┼┤";

/// Builds the query states from `catalog`.
pub(crate) fn clickhouse(catalog: &SymbolCatalog) -> Result<Vec<LexingState>> {
    Ok(vec![
        root(catalog)?,
        multiline_comment()?,
        quoted(StateId::String, '\'', Category::StringLiteral)?,
        quoted(StateId::QuotedIdent, '"', Category::Identifier)?,
    ])
}

fn root(catalog: &SymbolCatalog) -> Result<LexingState> {
    use super::Category::{
        Comment, CommentMultiline, FunctionName, Identifier, Keyword, KeywordType, Label, Number,
        Operator, Punctuation, StringLiteral, Text,
    };

    LexingState::new(StateId::Root)
        .rule(r"\s+", Action::Emit(Text))?
        .rule(r"--[^\n]*(?:\n|\z)", Action::Emit(Comment))?
        .rule(
            r"/\*",
            Action::Push(CommentMultiline, StateId::MultilineComment),
        )?
        .rule(r"[0-9]+", Action::Emit(Number))?
        .rule(r"[0-9]*\.[0-9]+(?:e[+-][0-9]+)?", Action::Emit(Number))?
        .rule(r"'(?:\\\\|\\'|''|[^'])*'", Action::Emit(StringLiteral))?
        .rule(r#""(?:\\\\|\\"|""|[^"])*""#, Action::Emit(StringLiteral))?
        .rule(r"`(?:\\\\|\\`|``|[^`])*`", Action::Emit(StringLiteral))?
        .rule(r"[+*/<>=~!@#%^&|`?-]", Action::Emit(Operator))?
        .words_rule(&catalog.operators, "(?i)", r"\b", Action::Emit(Keyword))?
        .words_rule(&catalog.datatypes, "", r"\b", Action::Emit(KeywordType))?
        .words_rule(&catalog.formats, "", "", Action::Emit(Label))?
        .words_rule(&catalog.aggregation_functions, "", CALL_SUFFIX, CALL)?
        .words_rule(
            &catalog.case_insensitive_functions,
            "(?i)",
            r"\b",
            Action::Emit(FunctionName),
        )?
        .words_rule(&catalog.functions, "", CALL_SUFFIX, CALL)?
        .words_rule(&catalog.keywords, "(?i)", r"\b", Action::Emit(Keyword))?
        .line_rule(r"\\(?:\?|\w+)", Action::Emit(Text))?
        .rule(r"(?i)[a-z_]\w*", Action::Emit(Text))?
        .rule(r"[;:()\[\],.]", Action::Emit(Punctuation))?
        .rule("'", Action::Push(StringLiteral, StateId::String))?
        .rule("\"", Action::Push(Identifier, StateId::QuotedIdent))?
        .rule(r"[a-z_]\w*", Action::Emit(Identifier))?
        .rule(r"[;:()\[\]{},.]", Action::Emit(Punctuation))
}

fn multiline_comment() -> Result<LexingState> {
    let comment = Category::CommentMultiline;
    LexingState::new(StateId::MultilineComment)
        .rule(r"/\*", Action::Push(comment, StateId::MultilineComment))?
        .rule(r"\*/", Action::Pop(comment))?
        .rule(r"[^/*]+", Action::Emit(comment))?
        .rule(r"[/*]", Action::Emit(comment))
}

/// Body of a quoted literal whose closing delimiter was not found up front.
fn quoted(id: StateId, delimiter: char, category: Category) -> Result<LexingState> {
    let delimiter = regex::escape(&delimiter.to_string());
    LexingState::new(id)
        .rule(&format!("[^{delimiter}]+"), Action::Emit(category))?
        .rule(&format!("{delimiter}{delimiter}"), Action::Emit(category))?
        .rule(&delimiter, Action::Pop(category))
}

/// Builds the single state classifying `Pretty*` format output.
pub(crate) fn pretty_format() -> Result<Vec<LexingState>> {
    let root = LexingState::new(StateId::Root)
        .rule(&format!("[^{BOX_DRAWING}]+"), Action::Emit(Category::Output))?
        .rule(&format!("[{BOX_DRAWING}]+"), Action::Emit(Category::Whitespace))?;
    Ok(vec![root])
}
