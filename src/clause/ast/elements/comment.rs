//! Comment element

use super::super::traits::{indentation, AstNode};
use std::fmt;

/// A `#` comment. Carried for fidelity only; structural queries never return comments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comment {
    pub text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl AstNode for Comment {
    fn node_type(&self) -> &'static str {
        "Comment"
    }
    fn key(&self) -> Option<&str> {
        None
    }
    fn render(&self, depth: usize) -> String {
        format!("{}#{}\n", indentation(depth), self.text)
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.text)
    }
}
