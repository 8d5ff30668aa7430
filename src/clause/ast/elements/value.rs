//! Literal value element

use super::super::traits::{indentation, AstNode};
use std::fmt;

/// An opaque literal: a word, a number or a quoted string (quotes included).
///
/// Values are immutable; re-analysing a value node replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Value {
    text: String,
}

impl Value {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_quoted(&self) -> bool {
        is_quoted(&self.text)
    }

    /// The text without surrounding quotes
    pub fn unquoted(&self) -> &str {
        unquote(&self.text)
    }
}

fn is_quoted(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

/// `text` without surrounding quotes, if it has them
pub fn unquote(text: &str) -> &str {
    if is_quoted(text) {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// `text` as a literal that survives re-analysis: empty text becomes `""`
pub fn literal_or_empty_quotes(text: &str) -> &str {
    if text.is_empty() {
        "\"\""
    } else {
        text
    }
}

impl AstNode for Value {
    fn node_type(&self) -> &'static str {
        "Value"
    }
    fn key(&self) -> Option<&str> {
        Some(&self.text)
    }
    fn render(&self, depth: usize) -> String {
        format!("{}{}\n", indentation(depth), self.text)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
