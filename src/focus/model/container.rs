//! FociGridContainer: one named focus tree
//!
//! The container owns its foci and the mutual exclusion edges between them. Foci reference
//! each other only by name and only within the same container.

use super::focus::Focus;
use super::relations::MutualExclusionEdge;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FociGridContainer {
    pub container_id: String,
    /// Tag of the country the tree belongs to
    #[serde(default)]
    pub tag: String,
    /// Raw modifier lines emitted after `add` and `tag`, newline separated
    #[serde(default)]
    pub additional_mods: String,
    #[serde(default)]
    pub foci: Vec<Focus>,
    #[serde(default)]
    pub exclusions: Vec<MutualExclusionEdge>,
}

impl FociGridContainer {
    pub fn new(container_id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Identifier used for the `id` line and for file names
    pub fn tree_id(&self) -> String {
        self.container_id.replace(' ', "_")
    }

    pub fn add_focus(&mut self, focus: Focus) {
        self.foci.push(focus);
    }

    /// First focus named `name`
    pub fn focus(&self, name: &str) -> Option<&Focus> {
        self.foci.iter().find(|focus| focus.unique_name == name)
    }

    pub fn focus_mut(&mut self, name: &str) -> Option<&mut Focus> {
        self.foci.iter_mut().find(|focus| focus.unique_name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.focus(name).is_some()
    }

    /// Record that `a` and `b` exclude each other.
    ///
    /// Returns false, leaving the container untouched, when `a` and `b` are the same focus or
    /// when the edge already exists in either direction.
    pub fn add_mutual_exclusion(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }
        let edge = MutualExclusionEdge::new(a, b);
        if self.exclusions.contains(&edge) {
            return false;
        }
        self.exclusions.push(edge);
        true
    }

    /// Names of the foci mutually exclusive with `name`, in edge insertion order
    pub fn exclusions_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.exclusions.iter().filter_map(move |edge| edge.other(name))
    }

    pub fn are_mutually_exclusive(&self, a: &str, b: &str) -> bool {
        self.exclusions.contains(&MutualExclusionEdge::new(a, b))
    }

    /// Remove the first focus named `name`.
    ///
    /// Once no focus of that name remains, its prerequisite memberships and exclusion edges
    /// go with it. Prerequisite sets left empty are dropped.
    pub fn remove_focus(&mut self, name: &str) -> Option<Focus> {
        let index = self.foci.iter().position(|focus| focus.unique_name == name)?;
        let removed = self.foci.remove(index);
        if !self.contains(name) {
            for focus in &mut self.foci {
                for set in &mut focus.prerequisites {
                    set.remove(name);
                }
                focus.prerequisites.retain(|set| !set.is_empty());
            }
            self.exclusions.retain(|edge| !edge.involves(name));
        }
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.foci.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foci.is_empty()
    }
}

impl fmt::Display for FociGridContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FociGridContainer('{}', {}, {} foci)",
            self.container_id,
            self.tag,
            self.foci.len()
        )
    }
}
