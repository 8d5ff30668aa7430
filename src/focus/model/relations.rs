//! Prerequisite sets and mutual exclusion edges
//!
//! Both relations reference foci by name. A focus name is unique within one container, and
//! lookups resolve a name to its first occurrence when malformed input repeats one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Foci that must all be completed together; a focus may declare several sets
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrerequisiteSet {
    members: Vec<String>,
}

impl PrerequisiteSet {
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|member| member == name)
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.members.push(name.into());
    }

    /// Drop every membership of `name`
    pub fn remove(&mut self, name: &str) {
        self.members.retain(|member| member != name);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PrerequisiteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        PrerequisiteSet::new(iter)
    }
}

/// An undirected edge between two foci that exclude each other.
///
/// `(A, B)` and `(B, A)` are the same edge: equality and hashing ignore endpoint order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutualExclusionEdge {
    first: String,
    second: String,
}

impl MutualExclusionEdge {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn endpoints(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }

    pub fn involves(&self, name: &str) -> bool {
        self.first == name || self.second == name
    }

    /// The endpoint opposite `name`, if `name` is an endpoint
    pub fn other(&self, name: &str) -> Option<&str> {
        if self.first == name {
            Some(&self.second)
        } else if self.second == name {
            Some(&self.first)
        } else {
            None
        }
    }

    fn ordered(&self) -> (&str, &str) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }
}

impl PartialEq for MutualExclusionEdge {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl Eq for MutualExclusionEdge {}

impl Hash for MutualExclusionEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

impl fmt::Display for MutualExclusionEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_edge_is_symmetric() {
        let forward = MutualExclusionEdge::new("A", "B");
        let backward = MutualExclusionEdge::new("B", "A");
        assert_eq!(forward, backward);

        let edges: HashSet<_> = [forward, backward].into_iter().collect();
        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn test_edge_other_endpoint() {
        let edge = MutualExclusionEdge::new("A", "B");
        assert_eq!(edge.other("A"), Some("B"));
        assert_eq!(edge.other("B"), Some("A"));
        assert_eq!(edge.other("C"), None);
        assert!(edge.involves("B"));
        assert!(!edge.involves("C"));
    }

    #[test]
    fn test_prerequisite_set_membership() {
        let mut set: PrerequisiteSet = ["A", "B"].into_iter().collect();
        assert!(set.contains("A"));
        set.remove("A");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["B"]);
        set.remove("B");
        assert!(set.is_empty());
    }

    #[test]
    fn test_prerequisite_set_serializes_as_list() {
        let set = PrerequisiteSet::new(["A", "B"]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["A","B"]"#);
    }
}
