//! Lookups over clause lists
//!
//! The `child*` functions look at the given list only. The `find*` functions walk the list and
//! every descendant depth-first, in document order. Comments never match.

use super::elements::{Block, CodeStruct, NodeKind};
use super::traits::AstNode;

fn keyed(node: &CodeStruct, tag: &str) -> bool {
    match node {
        CodeStruct::Assignation(a) => a.key == tag,
        CodeStruct::Block(b) => b.tag.as_deref() == Some(tag),
        CodeStruct::Value(_) | CodeStruct::Comment(_) => false,
    }
}

pub fn child<'a>(nodes: &'a [CodeStruct], tag: &str) -> Option<&'a CodeStruct> {
    nodes.iter().find(|node| keyed(node, tag))
}

pub fn child_text<'a>(nodes: &'a [CodeStruct], tag: &str) -> Option<&'a str> {
    nodes
        .iter()
        .filter_map(CodeStruct::as_assignation)
        .find(|a| a.key == tag)
        .and_then(|a| a.literal())
}

pub fn child_texts<'a>(
    nodes: &'a [CodeStruct],
    tag: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    nodes
        .iter()
        .filter_map(CodeStruct::as_assignation)
        .filter(move |a| a.key == tag)
        .filter_map(|a| a.literal())
}

/// First block tagged `tag`; the result borrows from `nodes` only
pub fn block<'a>(nodes: &'a [CodeStruct], tag: &str) -> Option<&'a Block> {
    nodes
        .iter()
        .filter_map(CodeStruct::as_block)
        .find(|b| b.tag.as_deref() == Some(tag))
}

pub fn blocks<'a>(nodes: &'a [CodeStruct], tag: &'a str) -> impl Iterator<Item = &'a Block> + 'a {
    nodes
        .iter()
        .filter_map(CodeStruct::as_block)
        .filter(move |b| b.tag.as_deref() == Some(tag))
}

/// First node keyed `tag` in pre-order
pub fn find_assignation<'a>(nodes: &'a [CodeStruct], tag: &str) -> Option<&'a CodeStruct> {
    for node in nodes {
        if keyed(node, tag) {
            return Some(node);
        }
        if let Some(found) = find_assignation(node.children(), tag) {
            return Some(found);
        }
    }
    None
}

/// The right-hand side of the first node keyed `tag`. A tagged block is its own value.
pub fn find_value<'a>(nodes: &'a [CodeStruct], tag: &str) -> Option<&'a CodeStruct> {
    find_assignation(nodes, tag).map(|node| match node {
        CodeStruct::Assignation(a) => a.value.as_ref(),
        other => other,
    })
}

pub fn find_all<'a>(nodes: &'a [CodeStruct], kind: NodeKind, tag: &str) -> Vec<&'a CodeStruct> {
    let mut found = Vec::new();
    collect(nodes, kind, tag, &mut found);
    found
}

fn collect<'a>(nodes: &'a [CodeStruct], kind: NodeKind, tag: &str, found: &mut Vec<&'a CodeStruct>) {
    for node in nodes {
        if kind != NodeKind::Comment && node.kind() == kind && node.key() == Some(tag) {
            found.push(node);
        }
        collect(node.children(), kind, tag, found);
    }
}

/// Multiset comparison of two clause lists, ignoring comments
pub fn same_content(left: &[CodeStruct], right: &[CodeStruct]) -> bool {
    let left: Vec<_> = left.iter().filter(|n| !n.is_comment()).collect();
    let mut remaining: Vec<_> = right.iter().filter(|n| !n.is_comment()).collect();
    if left.len() != remaining.len() {
        return false;
    }
    for node in left {
        match remaining.iter().position(|other| node.same_content(other)) {
            Some(index) => {
                remaining.swap_remove(index);
            }
            None => return false,
        }
    }
    true
}
