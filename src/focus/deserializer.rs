//! Script to container
//!
//!     Reading happens in two passes because prerequisites and exclusions may name foci
//!     declared further down the document.
//!
//!     Pass 1 reads every `focus` block into a [Focus]: id, icon, position, cost and the
//!     behaviour clauses listed in [INTERNAL_SCRIPT_CLAUSES]. A block that cannot be read is
//!     dropped with one diagnostic line, and reading carries on with the next block.
//!
//!     Pass 2 resolves `mutually_exclusive` and `prerequisite` blocks against the foci that
//!     survived pass 1. References to unknown or dropped foci are skipped without comment.
//!
//! Where the focus blocks are
//!
//!     A document normally holds one `focus_tree` block: its header gives the container id,
//!     the country tag and the additional modifier lines, and its `focus` children are the
//!     foci. A fragment without a `focus_tree` block is read from its top-level `focus`
//!     blocks.

use super::diagnostics::DiagnosticSink;
use super::error::FocusError;
use super::model::{FociGridContainer, Focus, PrerequisiteSet, DEFAULT_COST};
use super::numeric::{parse_double_with, NumberConvention};
use crate::clause::ast::elements::value::unquote;
use crate::clause::{AstNode, Block, CodeStruct, Script};
use std::collections::HashSet;

/// Focus clauses kept in [Focus::internal_script]. Anything else in a focus block is dropped.
pub const INTERNAL_SCRIPT_CLAUSES: [&str; 5] =
    ["ai_will_do", "completion_reward", "available", "bypass", "cancel"];

/// Read a container, parsing costs with the current number convention
pub fn deserialize(script: &Script, sink: &mut dyn DiagnosticSink) -> FociGridContainer {
    deserialize_with(script, sink, NumberConvention::current())
}

pub fn deserialize_with(
    script: &Script,
    sink: &mut dyn DiagnosticSink,
    convention: NumberConvention,
) -> FociGridContainer {
    let tree = script.blocks("focus_tree").next();
    let mut container = match tree {
        Some(tree) => read_header(tree),
        None => FociGridContainer::default(),
    };
    let blocks: Vec<&Block> = match tree {
        Some(tree) => tree.blocks("focus").collect(),
        None => script.blocks("focus").collect(),
    };

    let mut survivors: Vec<(&Block, usize)> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match read_focus(block, convention) {
            Ok(focus) => {
                survivors.push((block, container.foci.len()));
                container.add_focus(focus);
            }
            Err(error) => {
                let id = text(block, "id").unwrap_or_default();
                sink.append_line(&error.diagnostic(id));
            }
        }
    }

    let known: HashSet<String> = container
        .foci
        .iter()
        .map(|focus| focus.unique_name.clone())
        .collect();
    for (block, index) in survivors {
        resolve_references(&mut container, block, index, &known);
    }

    container
}

fn read_header(tree: &Block) -> FociGridContainer {
    let modifier = tree
        .block("country")
        .and_then(|country| country.block("modifier"));
    let additional_mods = modifier
        .map(|modifier| {
            modifier
                .children
                .iter()
                .filter(|child| !matches!(child.key(), Some("add") | Some("tag")))
                .filter(|child| !child.is_comment())
                .map(|child| child.render(0).trim_end().to_string())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default();

    FociGridContainer {
        container_id: text(tree, "id").unwrap_or_default().to_string(),
        tag: modifier
            .and_then(|modifier| text(modifier, "tag"))
            .unwrap_or_default()
            .to_string(),
        additional_mods,
        ..FociGridContainer::default()
    }
}

/// Pass 1: the fields of one focus
fn read_focus(block: &Block, convention: NumberConvention) -> Result<Focus, FocusError> {
    let unique_name = match block.child("id") {
        Some(CodeStruct::Assignation(id)) => id
            .unquoted()
            .ok_or_else(|| FocusError::MalformedSyntax("focus id is not a literal".to_string()))?,
        Some(_) => {
            return Err(FocusError::MalformedSyntax(
                "focus id is not a literal".to_string(),
            ))
        }
        None => return Err(FocusError::MalformedSyntax("focus has no id".to_string())),
    };

    let image = text(block, "icon").unwrap_or_default();
    let image = image.strip_prefix("GFX_").unwrap_or(image);

    let cost = parse_double_with(
        block.child_text("cost").unwrap_or_default(),
        DEFAULT_COST,
        convention,
    );
    let cost = if cost < 0.0 { DEFAULT_COST } else { cost };

    let internal_script: Script = block
        .children
        .iter()
        .filter(|child| {
            matches!(child, CodeStruct::Assignation(_) | CodeStruct::Block(_))
                && child
                    .key()
                    .is_some_and(|key| INTERNAL_SCRIPT_CLAUSES.contains(&key))
        })
        .cloned()
        .collect();

    Ok(Focus {
        unique_name: unique_name.to_string(),
        image: image.to_string(),
        cost,
        x: read_coordinate(block, "x")?,
        y: read_coordinate(block, "y")?,
        internal_script,
        prerequisites: Vec::new(),
    })
}

/// Unquoted literal of the immediate assignation keyed `tag`
fn text<'a>(block: &'a Block, tag: &str) -> Option<&'a str> {
    block.child_text(tag).map(unquote)
}

fn read_coordinate(block: &Block, field: &'static str) -> Result<u32, FocusError> {
    let text = match block.child(field) {
        Some(CodeStruct::Assignation(assignation)) => assignation.literal().ok_or_else(|| {
            FocusError::MalformedSyntax(format!("'{}' must be a literal", field))
        })?,
        Some(_) => {
            return Err(FocusError::MalformedSyntax(format!(
                "'{}' must be a literal",
                field
            )))
        }
        None => "",
    };
    text.trim()
        .parse::<u32>()
        .map_err(|_| FocusError::InvalidInteger {
            field,
            value: text.to_string(),
        })
}

/// Pass 2: exclusions and prerequisites of the focus read from `block`
fn resolve_references(
    container: &mut FociGridContainer,
    block: &Block,
    index: usize,
    known: &HashSet<String>,
) {
    let name = container.foci[index].unique_name.clone();

    for exclusive in block.blocks("mutually_exclusive") {
        for other in exclusive.child_texts("focus").map(unquote) {
            if other != name && known.contains(other) {
                container.add_mutual_exclusion(&name, other);
            }
        }
    }

    for prerequisite in block.blocks("prerequisite") {
        let set: PrerequisiteSet = prerequisite
            .child_texts("focus")
            .map(unquote)
            .filter(|member| known.contains(*member))
            .collect();
        if !set.is_empty() {
            container.foci[index].prerequisites.push(set);
        }
    }
}
