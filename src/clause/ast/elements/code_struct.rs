//! CodeStruct enum definition

use super::super::error::ScriptError;
use super::super::search;
use super::super::traits::AstNode;
use super::assignation::Assignation;
use super::block::Block;
use super::comment::Comment;
use super::script::Script;
use super::value::Value;
use std::fmt;

/// The variant of a clause node, used to select what `find_all` returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Value,
    Assignation,
    Block,
    Comment,
}

/// CodeStruct represents any clause that can appear in a script
#[derive(Debug, Clone, PartialEq)]
pub enum CodeStruct {
    Value(Value),
    Assignation(Assignation),
    Block(Block),
    Comment(Comment),
}

impl AstNode for CodeStruct {
    fn node_type(&self) -> &'static str {
        match self {
            CodeStruct::Value(v) => v.node_type(),
            CodeStruct::Assignation(a) => a.node_type(),
            CodeStruct::Block(b) => b.node_type(),
            CodeStruct::Comment(c) => c.node_type(),
        }
    }

    fn key(&self) -> Option<&str> {
        match self {
            CodeStruct::Value(v) => v.key(),
            CodeStruct::Assignation(a) => a.key(),
            CodeStruct::Block(b) => b.key(),
            CodeStruct::Comment(c) => c.key(),
        }
    }

    fn render(&self, depth: usize) -> String {
        match self {
            CodeStruct::Value(v) => v.render(depth),
            CodeStruct::Assignation(a) => a.render(depth),
            CodeStruct::Block(b) => b.render(depth),
            CodeStruct::Comment(c) => c.render(depth),
        }
    }
}

impl CodeStruct {
    pub fn kind(&self) -> NodeKind {
        match self {
            CodeStruct::Value(_) => NodeKind::Value,
            CodeStruct::Assignation(_) => NodeKind::Assignation,
            CodeStruct::Block(_) => NodeKind::Block,
            CodeStruct::Comment(_) => NodeKind::Comment,
        }
    }

    /// Nodes directly below this one: the children of a block, the value of an assignation
    pub fn children(&self) -> &[CodeStruct] {
        match self {
            CodeStruct::Block(b) => &b.children,
            CodeStruct::Assignation(a) => std::slice::from_ref(a.value.as_ref()),
            CodeStruct::Value(_) | CodeStruct::Comment(_) => &[],
        }
    }

    /// First descendant written as `tag = ...`
    pub fn find_assignation(&self, tag: &str) -> Option<&CodeStruct> {
        search::find_assignation(self.children(), tag)
    }

    /// Right-hand side of the first descendant written as `tag = ...`
    pub fn find_value(&self, tag: &str) -> Option<&CodeStruct> {
        search::find_value(self.children(), tag)
    }

    /// Every descendant of `kind` keyed `tag`, in document order
    pub fn find_all(&self, kind: NodeKind, tag: &str) -> Vec<&CodeStruct> {
        search::find_all(self.children(), kind, tag)
    }

    /// Populate this node from source text.
    ///
    /// Blocks take `code` as their body, assignations as their value, comments as their text.
    /// A value is replaced by the single literal `code` holds.
    pub fn reanalyse(&mut self, code: &str) -> Result<(), ScriptError> {
        match self {
            CodeStruct::Block(block) => block.reanalyse(code),
            CodeStruct::Assignation(assignation) => assignation.reanalyse(code),
            CodeStruct::Comment(comment) => {
                comment.text = code.trim_start().trim_start_matches('#').trim_end().to_string();
                Ok(())
            }
            CodeStruct::Value(_) => {
                let mut clauses = Script::analyse(code)?.clauses;
                match (clauses.len(), clauses.pop()) {
                    (1, Some(value @ CodeStruct::Value(_))) => {
                        *self = value;
                        Ok(())
                    }
                    _ => Err(ScriptError::Shape(format!(
                        "expected a single literal, found {:?}",
                        code.trim()
                    ))),
                }
            }
        }
    }

    /// Structural equality ignoring child order inside blocks and ignoring comments
    pub fn same_content(&self, other: &CodeStruct) -> bool {
        match (self, other) {
            (CodeStruct::Block(left), CodeStruct::Block(right)) => left.same_content(right),
            (CodeStruct::Assignation(left), CodeStruct::Assignation(right)) => {
                left.key == right.key
                    && left.operator == right.operator
                    && left.value.same_content(&right.value)
            }
            (left, right) => left == right,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, CodeStruct::Value(_))
    }
    pub fn is_assignation(&self) -> bool {
        matches!(self, CodeStruct::Assignation(_))
    }
    pub fn is_block(&self) -> bool {
        matches!(self, CodeStruct::Block(_))
    }
    pub fn is_comment(&self) -> bool {
        matches!(self, CodeStruct::Comment(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        if let CodeStruct::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
    pub fn as_assignation(&self) -> Option<&Assignation> {
        if let CodeStruct::Assignation(a) = self {
            Some(a)
        } else {
            None
        }
    }
    pub fn as_block(&self) -> Option<&Block> {
        if let CodeStruct::Block(b) = self {
            Some(b)
        } else {
            None
        }
    }
    pub fn as_comment(&self) -> Option<&Comment> {
        if let CodeStruct::Comment(c) = self {
            Some(c)
        } else {
            None
        }
    }
}

impl fmt::Display for CodeStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeStruct::Value(v) => write!(f, "{}", v),
            CodeStruct::Assignation(a) => write!(f, "{}", a),
            CodeStruct::Block(b) => write!(f, "{}", b),
            CodeStruct::Comment(c) => write!(f, "{}", c),
        }
    }
}
