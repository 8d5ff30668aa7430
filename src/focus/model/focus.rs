//! Focus: one node of the tree, positioned on the grid

use super::relations::PrerequisiteSet;
use crate::clause::Script;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cost of a focus whose cost is absent or unreadable
pub const DEFAULT_COST: f64 = 10.0;

fn default_cost() -> f64 {
    DEFAULT_COST
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Focus {
    pub unique_name: String,
    /// Icon name without the `GFX_` prefix
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_cost")]
    pub cost: f64,
    #[serde(default)]
    pub x: u32,
    #[serde(default)]
    pub y: u32,
    /// Behaviour clauses kept verbatim and never interpreted
    #[serde(default)]
    pub internal_script: Script,
    #[serde(default)]
    pub prerequisites: Vec<PrerequisiteSet>,
}

impl Focus {
    pub fn new(unique_name: impl Into<String>) -> Self {
        Self {
            unique_name: unique_name.into(),
            image: String::new(),
            cost: DEFAULT_COST,
            x: 0,
            y: 0,
            internal_script: Script::default(),
            prerequisites: Vec::new(),
        }
    }

    /// Place the focus on the grid (builder pattern)
    pub fn at(mut self, x: u32, y: u32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn with_prerequisite(mut self, set: PrerequisiteSet) -> Self {
        self.prerequisites.push(set);
        self
    }

    pub fn with_script(mut self, script: Script) -> Self {
        self.internal_script = script;
        self
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// Whether any prerequisite set names `name`
    pub fn requires(&self, name: &str) -> bool {
        self.prerequisites.iter().any(|set| set.contains(name))
    }

    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Focus('{}' at {},{})", self.unique_name, self.x, self.y)
    }
}
