//! Serialize, analyse and deserialize again: the model survives the trip

use focus_tree::clause::Script;
use focus_tree::focus::{
    deserialize, serialize, FociGridContainer, Focus, MutualExclusionEdge, PrerequisiteSet,
};
use focus_tree::testing::{diamond_container, populated_container};
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::HashSet;

fn round_trip(container: &FociGridContainer) -> (FociGridContainer, Vec<String>) {
    let text = serialize(container);
    let script = Script::analyse(&text).expect("serialized text analyses");
    let mut diagnostics: Vec<String> = Vec::new();
    let back = deserialize(&script, &mut diagnostics);
    (back, diagnostics)
}

fn edges(container: &FociGridContainer) -> HashSet<MutualExclusionEdge> {
    container.exclusions.iter().cloned().collect()
}

fn assert_same_model(original: &FociGridContainer, back: &FociGridContainer) {
    assert_eq!(back.container_id, original.tree_id());
    assert_eq!(back.tag, original.tag);
    assert_eq!(back.additional_mods, original.additional_mods);
    assert_eq!(back.foci.len(), original.foci.len());
    for focus in &original.foci {
        let read = back
            .focus(&focus.unique_name)
            .unwrap_or_else(|| panic!("{} survives", focus.unique_name));
        assert_eq!(read, focus);
    }
    assert_eq!(edges(back), edges(original));
}

#[test]
fn diamond_round_trip() {
    let original = diamond_container();
    let (back, diagnostics) = round_trip(&original);
    assert!(diagnostics.is_empty());
    assert_same_model(&original, &back);
}

#[test]
fn populated_round_trip() {
    let original = populated_container();
    let (back, diagnostics) = round_trip(&original);
    assert!(diagnostics.is_empty());
    assert_same_model(&original, &back);
    assert_eq!(
        back.focus("SOV_right").map(|focus| focus.internal_script.len()),
        Some(2)
    );
}

#[test]
fn empty_header_round_trip() {
    let mut original = FociGridContainer::default();
    original.add_focus(Focus::new("A"));
    original.add_focus(Focus::new("B").at(1, 0).with_prerequisite(PrerequisiteSet::new(["A"])));
    let (back, diagnostics) = round_trip(&original);
    assert!(diagnostics.is_empty());
    assert_same_model(&original, &back);
}

#[test]
fn fragment_without_a_tree_block_reads_back() {
    let script = Script::analyse("focus = { id = A x = 0 y = 0 }").expect("fragment analyses");
    let mut diagnostics: Vec<String> = Vec::new();
    let fragment = deserialize(&script, &mut diagnostics);
    assert_eq!((fragment.container_id.as_str(), fragment.tag.as_str()), ("", ""));

    let (back, diagnostics) = round_trip(&fragment);
    assert!(diagnostics.is_empty());
    assert_same_model(&fragment, &back);
}

#[test]
fn nested_modifier_lines_round_trip() {
    let mut original = FociGridContainer::new("dlc tree", "ITA");
    original.additional_mods =
        "has_dlc = \"By Blood Alone\"\nOR = {\n\thas_government = fascism\n\thas_war = yes\n}".to_string();
    let (back, diagnostics) = round_trip(&original);
    assert!(diagnostics.is_empty());
    assert_eq!(back.additional_mods, original.additional_mods);
    assert!(serialize(&original).contains("\t\t\tOR = {\n\t\t\t\thas_government = fascism\n"));
}

#[test]
fn second_serialization_is_stable() {
    let first = serialize(&populated_container());
    let (back, _) = round_trip(&populated_container());
    assert_eq!(serialize(&back), first);
}

fn word() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,10}"
}

fn image() -> impl Strategy<Value = String> {
    "[a-z_]{0,10}"
}

fn tree_name() -> impl Strategy<Value = String> {
    "([a-z][a-z ]{0,10})?"
}

fn acyclic_container() -> impl Strategy<Value = FociGridContainer> {
    let focus_spec = (
        image(),
        0u32..4000,
        0u32..8,
        0u32..8,
        prop::collection::vec(prop::collection::vec(any::<Index>(), 1..3), 0..3),
        prop::option::of(0u32..1000),
    );
    (
        prop::collection::vec(focus_spec, 1..10),
        prop::collection::vec((any::<Index>(), any::<Index>()), 0..5),
        tree_name(),
        "[A-Z]{0,3}",
    )
        .prop_map(|(specs, exclusions, id, tag)| {
            let count = specs.len();
            let mut container = FociGridContainer::new(id, tag);
            for (i, (image, cost, x, y, sets, reward)) in specs.into_iter().enumerate() {
                let mut focus = Focus::new(format!("F{}", i))
                    .with_image(image)
                    .with_cost(f64::from(cost) / 4.0)
                    .at(x, y);
                if i > 0 {
                    for set in sets {
                        focus = focus.with_prerequisite(
                            set.iter().map(|index| format!("F{}", index.index(i))).collect(),
                        );
                    }
                }
                if let Some(power) = reward {
                    let text = format!("completion_reward = {{ add_political_power = {} }}", power);
                    focus.internal_script = Script::analyse(&text).expect("reward analyses");
                }
                container.add_focus(focus);
            }
            for (a, b) in exclusions {
                let a = format!("F{}", a.index(count));
                let b = format!("F{}", b.index(count));
                container.add_mutual_exclusion(&a, &b);
            }
            container
        })
}

proptest! {
    #[test]
    fn acyclic_containers_round_trip(original in acyclic_container()) {
        let (back, diagnostics) = round_trip(&original);
        prop_assert!(diagnostics.is_empty());
        prop_assert_eq!(&back.container_id, &original.tree_id());
        prop_assert_eq!(&back.tag, &original.tag);
        prop_assert_eq!(back.foci.len(), original.foci.len());
        for focus in &original.foci {
            let read = back.focus(&focus.unique_name);
            prop_assert_eq!(read, Some(focus));
        }
        prop_assert_eq!(edges(&back), edges(&original));
    }
}

#[test]
fn duplicate_members_and_set_order_are_kept() {
    let mut container = FociGridContainer::new("t", "GER");
    container.add_focus(Focus::new("A"));
    container.add_focus(Focus::new("B").at(1, 0));
    container.add_focus(
        Focus::new("C")
            .at(2, 0)
            .with_prerequisite(PrerequisiteSet::new(["B", "A"]))
            .with_prerequisite(PrerequisiteSet::new(["A"])),
    );
    let (back, _) = round_trip(&container);
    assert_eq!(
        back.focus("C").map(|focus| focus.prerequisites.clone()),
        Some(vec![
            PrerequisiteSet::new(["B", "A"]),
            PrerequisiteSet::new(["A"])
        ])
    );
}
