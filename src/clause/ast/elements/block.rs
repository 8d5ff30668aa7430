//! Block element: `tag = { ... }` or an anonymous `{ ... }`

use super::super::error::ScriptError;
use super::super::search;
use super::super::traits::{indentation, AstNode};
use super::code_struct::{CodeStruct, NodeKind};
use super::script::Script;
use std::fmt;

/// An ordered list of clauses with an optional tag
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub tag: Option<String>,
    pub children: Vec<CodeStruct>,
}

impl Block {
    pub fn new(children: Vec<CodeStruct>) -> Self {
        Self {
            tag: None,
            children,
        }
    }

    pub fn tagged(tag: impl Into<String>, children: Vec<CodeStruct>) -> Self {
        Self {
            tag: Some(tag.into()),
            children,
        }
    }

    pub fn push(&mut self, child: CodeStruct) {
        self.children.push(child);
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Immediate child keyed `tag` (an assignation or a tagged block)
    pub fn child(&self, tag: &str) -> Option<&CodeStruct> {
        search::child(&self.children, tag)
    }

    /// Literal text of the immediate child keyed `tag`
    pub fn child_text(&self, tag: &str) -> Option<&str> {
        search::child_text(&self.children, tag)
    }

    /// Literal texts of every immediate child keyed `tag`, in order
    pub fn child_texts<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        search::child_texts(&self.children, tag)
    }

    /// Immediate child block tagged `tag`
    pub fn block(&self, tag: &str) -> Option<&Block> {
        search::block(&self.children, tag)
    }

    /// Immediate child blocks tagged `tag`, in order
    pub fn blocks<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Block> + 'a {
        search::blocks(&self.children, tag)
    }

    pub fn find_assignation(&self, tag: &str) -> Option<&CodeStruct> {
        search::find_assignation(&self.children, tag)
    }

    pub fn find_value(&self, tag: &str) -> Option<&CodeStruct> {
        search::find_value(&self.children, tag)
    }

    pub fn find_all(&self, kind: NodeKind, tag: &str) -> Vec<&CodeStruct> {
        search::find_all(&self.children, kind, tag)
    }

    /// Compare two blocks ignoring child order and comments, recursively.
    pub fn same_content(&self, other: &Block) -> bool {
        self.tag == other.tag && search::same_content(&self.children, &other.children)
    }

    /// Replace the children with the clauses analysed from `code`, which is the body of the
    /// block without its braces.
    pub fn reanalyse(&mut self, code: &str) -> Result<(), ScriptError> {
        self.children = Script::analyse(code)?.clauses;
        Ok(())
    }

    /// Render the braces and the children; the closing brace sits at `depth`.
    pub(crate) fn render_body(&self, depth: usize) -> String {
        if self.children.is_empty() {
            return "{ }\n".to_string();
        }
        let mut text = String::from("{\n");
        for child in &self.children {
            text.push_str(&child.render(depth + 1));
        }
        text.push_str(&indentation(depth));
        text.push_str("}\n");
        text
    }
}

impl AstNode for Block {
    fn node_type(&self) -> &'static str {
        "Block"
    }
    fn key(&self) -> Option<&str> {
        self.tag.as_deref()
    }
    fn render(&self, depth: usize) -> String {
        match &self.tag {
            Some(tag) => format!("{}{} = {}", indentation(depth), tag, self.render_body(depth)),
            None => format!("{}{}", indentation(depth), self.render_body(depth)),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block('{}', {} items)",
            self.tag.as_deref().unwrap_or_default(),
            self.children.len()
        )
    }
}
