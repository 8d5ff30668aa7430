//! Property and example tests for the canonical focus order

use focus_tree::focus::{
    canonical_order, canonical_order_with, serialize, FociGridContainer, Focus, OrderingOptions,
    PrerequisiteSet, Satisfaction,
};
use focus_tree::testing::{diamond_container, focus};
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::HashMap;

fn names<'a>(order: &[&'a Focus]) -> Vec<&'a str> {
    order.iter().map(|focus| focus.unique_name.as_str()).collect()
}

/// Foci named F0..Fn where every prerequisite of Fi is some Fj with j < i
fn acyclic_foci() -> impl Strategy<Value = Vec<Focus>> {
    prop::collection::vec(
        (
            0u32..6,
            0u32..6,
            prop::collection::vec(prop::collection::vec(any::<Index>(), 1..4), 0..3),
        ),
        1..16,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (x, y, sets))| {
                let mut focus = Focus::new(format!("F{}", i)).at(x, y);
                if i > 0 {
                    for set in sets {
                        focus.prerequisites.push(
                            set.iter().map(|index| format!("F{}", index.index(i))).collect(),
                        );
                    }
                }
                focus
            })
            .collect()
    })
}

/// Arbitrary foci over a small name pool: duplicates, cycles and dangling references included
fn arbitrary_foci() -> impl Strategy<Value = Vec<Focus>> {
    let name = (0u8..10).prop_map(|n| format!("N{}", n));
    prop::collection::vec(
        (
            name.clone(),
            0u32..5,
            0u32..5,
            prop::collection::vec(prop::collection::vec(name, 0..4), 0..3),
        ),
        0..20,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .map(|(name, x, y, sets)| {
                sets.into_iter()
                    .fold(Focus::new(name).at(x, y), |focus, set| {
                        focus.with_prerequisite(PrerequisiteSet::new(set))
                    })
            })
            .collect()
    })
}

fn satisfaction() -> impl Strategy<Value = Satisfaction> {
    prop_oneof![Just(Satisfaction::AllSets), Just(Satisfaction::AnySet)]
}

proptest! {
    #[test]
    fn order_is_a_permutation_of_the_input(foci in arbitrary_foci(), rule in satisfaction()) {
        let order = canonical_order_with(&foci, &OrderingOptions::new(rule));
        prop_assert_eq!(order.len(), foci.len());

        let mut seen = vec![false; foci.len()];
        for placed in &order {
            let index = foci
                .iter()
                .position(|candidate| std::ptr::eq(candidate, *placed))
                .expect("ordered focus comes from the input");
            prop_assert!(!seen[index], "focus at {} emitted twice", index);
            seen[index] = true;
        }
    }

    #[test]
    fn acyclic_order_is_topological(foci in acyclic_foci()) {
        let order = canonical_order_with(&foci, &OrderingOptions::default());
        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(at, focus)| (focus.unique_name.as_str(), at))
            .collect();

        for focus in &foci {
            for member in focus.prerequisites.iter().flat_map(|set| set.iter()) {
                prop_assert!(
                    position[member] < position[focus.unique_name.as_str()],
                    "{} placed before its prerequisite {}",
                    focus.unique_name,
                    member
                );
            }
        }
    }

    #[test]
    fn any_set_order_follows_at_least_one_set(foci in acyclic_foci()) {
        let order = canonical_order_with(&foci, &OrderingOptions::new(Satisfaction::AnySet));
        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(at, focus)| (focus.unique_name.as_str(), at))
            .collect();

        for focus in foci.iter().filter(|focus| focus.has_prerequisites()) {
            let own = position[focus.unique_name.as_str()];
            prop_assert!(focus
                .prerequisites
                .iter()
                .any(|set| set.iter().all(|member| position[member] < own)));
        }
    }
}

#[test]
fn diamond_orders_roots_first() {
    let container = diamond_container();
    let order = canonical_order(&container);
    assert_eq!(names(&order), vec!["A", "B", "C", "D"]);

    let text = serialize(&container);
    let d_block = &text[text.find("id = D").expect("D is emitted")..];
    let d_block = &d_block[..d_block.find("\t}\n").expect("D block is closed")];
    assert!(d_block.contains("prerequisite = { focus = B focus = C }"));
}

#[test]
fn alternative_prerequisites_depend_on_the_satisfaction_rule() {
    // "late" needs either "early" or "distant"; "distant" sits far right of it
    let mut container = FociGridContainer::new("either tree", "USA");
    container.add_focus(focus("early", 0, 0, &[]));
    container.add_focus(focus("late", 1, 1, &[&["early"], &["distant"]]));
    container.add_focus(focus("distant", 5, 0, &[&["gate"]]));
    container.add_focus(focus("gate", 4, 0, &[&["late"]]));

    // Every set is required: "distant" waits on "late", so the cycle falls to the end
    let all = canonical_order_with(&container.foci, &OrderingOptions::new(Satisfaction::AllSets));
    assert_eq!(names(&all), vec!["early", "late", "distant", "gate"]);

    // One set is enough: "late" unlocks "gate", which unlocks "distant"
    let any = canonical_order_with(&container.foci, &OrderingOptions::new(Satisfaction::AnySet));
    assert_eq!(names(&any), vec!["early", "late", "gate", "distant"]);
}
