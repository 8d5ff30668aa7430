//! Container to script text
//!
//! The produced document has a fixed header, then one `focus` block per focus in canonical
//! order:
//!
//! ```text
//! focus_tree = {
//!     id = <tree id>
//!     country = {
//!         factor = 0
//!         modifier = {
//!             add = 10
//!             tag = <tag>
//!             <additional modifier lines>
//!         }
//!     }
//!     default = no
//!     focus = {
//!         id = <name>
//!         icon = GFX_<image>
//!         cost = <two decimals>
//!         prerequisite = { focus = <name> ... }
//!         mutually_exclusive = { focus = <name> ... }
//!         x = <column>
//!         y = <row>
//!         <internal script>
//!     }
//! }
//! ```
//!
//! Indentation is one tab per level. Empty ids, names and tags are written as `""` so the text
//! analyses again; modifier lines keep their own relative indentation.

use super::model::{FociGridContainer, Focus};
use super::ordering::{canonical_order_with, OrderingOptions};
use crate::clause::ast::elements::value::literal_or_empty_quotes as literal;
use crate::clause::ast::traits::indentation;
use std::collections::BTreeMap;

/// Serialize a container with the default ordering options
pub fn serialize(container: &FociGridContainer) -> String {
    serialize_with(container, &OrderingOptions::default())
}

pub fn serialize_with(container: &FociGridContainer, options: &OrderingOptions) -> String {
    let mut emitter = Emitter::default();
    emitter.header(container);
    for focus in canonical_order_with(&container.foci, options) {
        emitter.focus(container, focus);
    }
    emitter.line(0, "}");
    emitter.text
}

/// Serialize several trees, keyed by [FociGridContainer::tree_id].
///
/// Containers sharing a tree id overwrite each other; the last one wins.
pub fn serialize_all<'a, I>(containers: I, options: &OrderingOptions) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = &'a FociGridContainer>,
{
    containers
        .into_iter()
        .map(|container| (container.tree_id(), serialize_with(container, options)))
        .collect()
}

#[derive(Default)]
struct Emitter {
    text: String,
}

impl Emitter {
    fn line(&mut self, depth: usize, content: &str) {
        self.text.push_str(&indentation(depth));
        self.text.push_str(content);
        self.text.push('\n');
    }

    fn header(&mut self, container: &FociGridContainer) {
        self.line(0, "focus_tree = {");
        self.line(1, &format!("id = {}", literal(&container.tree_id())));
        self.line(1, "country = {");
        self.line(2, "factor = 0");
        self.line(2, "modifier = {");
        self.line(3, "add = 10");
        self.line(3, &format!("tag = {}", literal(&container.tag)));
        for extra in container
            .additional_mods
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
        {
            self.line(3, extra);
        }
        self.line(2, "}");
        self.line(1, "}");
        self.line(1, "default = no");
    }

    fn focus(&mut self, container: &FociGridContainer, focus: &Focus) {
        self.line(1, "focus = {");
        self.line(2, &format!("id = {}", literal(&focus.unique_name)));
        self.line(2, &format!("icon = GFX_{}", focus.image));
        self.line(2, &format!("cost = {:.2}", focus.cost));
        for set in focus.prerequisites.iter().filter(|set| !set.is_empty()) {
            self.line(2, &format!("prerequisite = {{ {} }}", focus_list(set.iter())));
        }
        let exclusive: Vec<&str> = container.exclusions_of(&focus.unique_name).collect();
        if !exclusive.is_empty() {
            self.line(
                2,
                &format!("mutually_exclusive = {{ {} }}", focus_list(exclusive.into_iter())),
            );
        }
        self.line(2, &format!("x = {}", focus.x));
        self.line(2, &format!("y = {}", focus.y));
        self.text.push_str(&focus.internal_script.render(2));
        self.line(1, "}");
    }
}

fn focus_list<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names
        .map(|name| format!("focus = {}", literal(name)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Script;
    use crate::focus::model::PrerequisiteSet;

    #[test]
    fn test_empty_container() {
        let container = FociGridContainer::new("empty tree", "FRA");
        assert_eq!(
            serialize(&container),
            "focus_tree = {\n\tid = empty_tree\n\tcountry = {\n\t\tfactor = 0\n\t\tmodifier = {\n\t\t\tadd = 10\n\t\t\ttag = FRA\n\t\t}\n\t}\n\tdefault = no\n}\n"
        );
    }

    #[test]
    fn test_additional_mods_keep_relative_indentation() {
        let mut container = FociGridContainer::new("t", "ENG");
        container.additional_mods =
            "has_dlc = \"Together for Victory\"\n\nOR = {\n\tis_puppet = no \n\thas_war = yes\n}".to_string();
        let text = serialize(&container);
        assert!(text.contains(
            "\t\t\ttag = ENG\n\t\t\thas_dlc = \"Together for Victory\"\n\t\t\tOR = {\n\t\t\t\tis_puppet = no\n\t\t\t\thas_war = yes\n\t\t\t}\n\t\t}\n"
        ));
    }

    #[test]
    fn test_empty_header_literals_are_quoted() {
        let mut container = FociGridContainer::default();
        container.add_focus(Focus::new("A"));
        let text = serialize(&container);
        assert!(text.contains("\tid = \"\"\n"));
        assert!(text.contains("\t\t\ttag = \"\"\n"));
        assert!(Script::analyse(&text).is_ok());
    }

    #[test]
    fn test_focus_block() {
        let mut container = FociGridContainer::new("t", "GER");
        container.add_focus(Focus::new("A").with_image("goal_generic").at(0, 0));
        container.add_focus(Focus::new("B").at(1, 0));
        container.add_focus(
            Focus::new("C")
                .with_cost(7.5)
                .at(1, 1)
                .with_prerequisite(PrerequisiteSet::new(["A", "B"]))
                .with_prerequisite(PrerequisiteSet::new(Vec::<String>::new()))
                .with_script(Script::analyse("available = { has_war = yes }").unwrap()),
        );
        container.add_mutual_exclusion("A", "B");

        let text = serialize(&container);
        assert!(text.contains(
            "\tfocus = {\n\t\tid = A\n\t\ticon = GFX_goal_generic\n\t\tcost = 10.00\n\t\tmutually_exclusive = { focus = B }\n\t\tx = 0\n\t\ty = 0\n\t}\n"
        ));
        assert!(text.contains(
            "\tfocus = {\n\t\tid = C\n\t\ticon = GFX_\n\t\tcost = 7.50\n\t\tprerequisite = { focus = A focus = B }\n\t\tx = 1\n\t\ty = 1\n\t\tavailable = {\n\t\t\thas_war = yes\n\t\t}\n\t}\n"
        ));
        assert!(text.ends_with("\t}\n}\n"));
    }

    #[test]
    fn test_serialize_all_keys_by_tree_id() {
        let trees = vec![
            FociGridContainer::new("german tree", "GER"),
            FociGridContainer::new("soviet tree", "SOV"),
        ];
        let files = serialize_all(&trees, &OrderingOptions::default());
        assert_eq!(
            files.keys().collect::<Vec<_>>(),
            vec!["german_tree", "soviet_tree"]
        );
        assert!(files["soviet_tree"].contains("tag = SOV"));
    }
}
