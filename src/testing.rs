//! Factories shared by unit and integration tests
//!
//! Tests build their containers and documents from here instead of repeating literal
//! trees, so a change to the document layout is made in one place.

use crate::clause::Script;
use crate::focus::{FociGridContainer, Focus, PrerequisiteSet};

/// A well-formed document with a header, four foci and one exclusion.
///
/// D requires B and C as one set; B and C both require A; A and E exclude each other.
pub const SAMPLE_DOCUMENT: &str = r#"focus_tree = {
	id = sample_tree
	country = {
		factor = 0
		modifier = {
			add = 10
			tag = GER
			has_dlc = "Waking the Tiger"
		}
	}
	default = no
	focus = {
		id = D
		icon = GFX_goal_support_fascism
		cost = 5
		prerequisite = { focus = B focus = C }
		x = 2
		y = 0
		completion_reward = {
			add_political_power = 150
		}
	}
	focus = {
		id = A
		icon = GFX_goal_generic_army_doctrines
		cost = 10
		mutually_exclusive = { focus = E }
		x = 0
		y = 0
		available = {
			has_war = no
		}
	}
	focus = {
		id = B
		cost = 7,5
		prerequisite = { focus = A }
		x = 1
		y = 0
	}
	focus = {
		id = C
		prerequisite = { focus = A }
		x = 1
		y = 1
	}
	focus = {
		id = E
		mutually_exclusive = { focus = A }
		x = 3
		y = 0
	}
}
"#;

/// A focus at `(x, y)` with one prerequisite set per slice in `sets`
pub fn focus(name: &str, x: u32, y: u32, sets: &[&[&str]]) -> Focus {
    sets.iter().fold(Focus::new(name).at(x, y), |focus, set| {
        focus.with_prerequisite(PrerequisiteSet::new(set.iter().copied()))
    })
}

/// A, B(A), C(A), D(B and C) laid out on two rows
pub fn diamond_container() -> FociGridContainer {
    let mut container = FociGridContainer::new("diamond tree", "GER");
    container.add_focus(focus("D", 2, 0, &[&["B", "C"]]));
    container.add_focus(focus("C", 1, 1, &[&["A"]]));
    container.add_focus(focus("B", 1, 0, &[&["A"]]));
    container.add_focus(focus("A", 0, 0, &[]));
    container
}

/// A container with every field populated, including exclusions and internal scripts
pub fn populated_container() -> FociGridContainer {
    let mut container = FociGridContainer::new("populated tree", "SOV");
    container.additional_mods = "has_dlc = \"No Step Back\"".to_string();

    let reward = Script::analyse("completion_reward = { add_political_power = 120 }")
        .expect("reward script is well-formed");
    let gates = Script::analyse(
        "available = { has_war = no }\nbypass = { has_government = communism }",
    )
    .expect("gate script is well-formed");

    container.add_focus(
        Focus::new("SOV_root")
            .with_image("goal_generic_political_pressure")
            .with_cost(10.0)
            .with_script(reward),
    );
    container.add_focus(
        focus("SOV_left", 0, 1, &[&["SOV_root"]])
            .with_image("goal_generic_army_doctrines")
            .with_cost(5.5),
    );
    container.add_focus(
        focus("SOV_right", 2, 1, &[&["SOV_root"]])
            .with_image("goal_generic_industry")
            .with_cost(7.0)
            .with_script(gates),
    );
    container.add_focus(
        focus("SOV_final", 1, 2, &[&["SOV_left"], &["SOV_right"]])
            .with_image("goal_generic_major_war"),
    );
    container.add_mutual_exclusion("SOV_left", "SOV_right");
    container
}
