//! Script: an ordered sequence of top-level clauses

use super::super::error::ScriptError;
use super::super::search;
use super::super::traits::AstNode;
use super::block::Block;
use super::code_struct::{CodeStruct, NodeKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One document, or one fragment extracted from a document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    pub clauses: Vec<CodeStruct>,
}

impl Script {
    pub fn from_clauses(clauses: Vec<CodeStruct>) -> Self {
        Self { clauses }
    }

    /// Analyse source text into a script.
    pub fn analyse(text: &str) -> Result<Script, ScriptError> {
        crate::clause::parse_script(text)
    }

    /// Render every clause at `depth`. An empty script renders as an empty string.
    pub fn render(&self, depth: usize) -> String {
        self.clauses.iter().map(|clause| clause.render(depth)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodeStruct> {
        self.clauses.iter()
    }

    pub fn push(&mut self, clause: CodeStruct) {
        self.clauses.push(clause);
    }

    pub fn child(&self, tag: &str) -> Option<&CodeStruct> {
        search::child(&self.clauses, tag)
    }

    pub fn child_text(&self, tag: &str) -> Option<&str> {
        search::child_text(&self.clauses, tag)
    }

    /// Top-level blocks tagged `tag`
    pub fn blocks<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Block> + 'a {
        search::blocks(&self.clauses, tag)
    }

    pub fn find_assignation(&self, tag: &str) -> Option<&CodeStruct> {
        search::find_assignation(&self.clauses, tag)
    }

    pub fn find_value(&self, tag: &str) -> Option<&CodeStruct> {
        search::find_value(&self.clauses, tag)
    }

    pub fn find_all(&self, kind: NodeKind, tag: &str) -> Vec<&CodeStruct> {
        search::find_all(&self.clauses, kind, tag)
    }

    /// Compare two scripts ignoring clause order and comments
    pub fn same_content(&self, other: &Script) -> bool {
        search::same_content(&self.clauses, &other.clauses)
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a CodeStruct;
    type IntoIter = std::slice::Iter<'a, CodeStruct>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl FromIterator<CodeStruct> for Script {
    fn from_iter<I: IntoIterator<Item = CodeStruct>>(iter: I) -> Self {
        Script::from_clauses(iter.into_iter().collect())
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

// Scripts travel through JSON and YAML as their rendered text.
impl Serialize for Script {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render(0))
    }
}

impl<'de> Deserialize<'de> for Script {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Script::analyse(&text).map_err(serde::de::Error::custom)
    }
}
