//! Assignation element: `key = value`

use super::super::error::ScriptError;
use super::super::traits::{indentation, AstNode};
use super::code_struct::CodeStruct;
use super::block::Block;
use super::script::Script;
use std::fmt;

/// The operator between a key and its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    #[default]
    Equals,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::LessEqual => "<=",
            Operator::GreaterEqual => ">=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key bound to exactly one value node
#[derive(Debug, Clone, PartialEq)]
pub struct Assignation {
    pub key: String,
    pub operator: Operator,
    pub value: Box<CodeStruct>,
}

impl Assignation {
    pub fn new(key: impl Into<String>, value: CodeStruct) -> Self {
        Self::with_operator(key, Operator::Equals, value)
    }

    pub fn with_operator(key: impl Into<String>, operator: Operator, value: CodeStruct) -> Self {
        Self {
            key: key.into(),
            operator,
            value: Box::new(value),
        }
    }

    /// The literal text on the right-hand side, if the value is a plain literal
    pub fn literal(&self) -> Option<&str> {
        self.value.as_value().map(|value| value.text())
    }

    /// Like [literal](Self::literal), with surrounding quotes removed
    pub fn unquoted(&self) -> Option<&str> {
        self.value.as_value().map(|value| value.unquoted())
    }

    /// Replace the value with the clauses analysed from `code`.
    ///
    /// A single clause becomes the value directly; several are wrapped in an anonymous block.
    pub fn reanalyse(&mut self, code: &str) -> Result<(), ScriptError> {
        let mut clauses = Script::analyse(code)?.clauses;
        let value = match clauses.len() {
            0 => {
                return Err(ScriptError::Shape(format!(
                    "no value for assignation '{}'",
                    self.key
                )))
            }
            1 => clauses.remove(0),
            _ => CodeStruct::Block(Block::new(clauses)),
        };
        self.value = Box::new(value);
        Ok(())
    }
}

impl AstNode for Assignation {
    fn node_type(&self) -> &'static str {
        "Assignation"
    }
    fn key(&self) -> Option<&str> {
        Some(&self.key)
    }
    fn render(&self, depth: usize) -> String {
        let head = format!("{}{} {} ", indentation(depth), self.key, self.operator);
        match self.value.as_ref() {
            CodeStruct::Block(block) => head + &block.render_body(depth),
            CodeStruct::Value(value) => format!("{}{}\n", head, value.text()),
            other => head + other.render(depth).trim_start(),
        }
    }
}

impl fmt::Display for Assignation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(0).trim_end())
    }
}
