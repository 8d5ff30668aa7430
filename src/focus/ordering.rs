//! Canonical emission order
//!
//!     Foci are emitted in an order where every focus follows the foci it requires, ties
//!     broken by grid column and then row. The order is total: every focus appears exactly
//!     once, even when prerequisites are cyclic or name foci that do not exist.
//!
//! The Grid Scan
//!
//!         1. Seed the output with every focus that declares no prerequisites, by column, row
//!            and input position.
//!         2. Visit the occupied cells column by column, top to bottom. A focus whose
//!            prerequisites are satisfied is placed. Otherwise its direct prerequisites that
//!            are satisfiable right now are pulled forward and placed first; the focus is then
//!            placed if that was enough, or held.
//!         3. After every cell the held foci are swept until no more of them can be placed.
//!         4. Whatever was never placed is appended in input order.
//!
//!     Empty cells are skipped: a sweep there could not change anything, since nothing was
//!     placed since the previous sweep.
//!
//! Satisfaction
//!
//!     A prerequisite set is met once all of its members are placed. Whether a focus needs
//!     all of its sets met, or just one of them, is a [Satisfaction] setting; requiring all
//!     sets is the default.

use super::model::{FociGridContainer, Focus, PrerequisiteSet};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// How prerequisite sets combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Satisfaction {
    /// Every declared set must be met
    #[default]
    AllSets,
    /// Meeting any one declared set is enough
    AnySet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderingOptions {
    #[serde(default)]
    pub satisfaction: Satisfaction,
}

impl OrderingOptions {
    pub fn new(satisfaction: Satisfaction) -> Self {
        Self { satisfaction }
    }
}

/// Canonical order of a container's foci with the default options
pub fn canonical_order(container: &FociGridContainer) -> Vec<&Focus> {
    canonical_order_with(&container.foci, &OrderingOptions::default())
}

/// Canonical order of `foci`
pub fn canonical_order_with<'a>(foci: &'a [Focus], options: &OrderingOptions) -> Vec<&'a Focus> {
    let mut state = Placement::new(foci, options.satisfaction);

    let mut seeds: Vec<usize> = (0..foci.len())
        .filter(|&index| !foci[index].has_prerequisites())
        .collect();
    seeds.sort_by_key(|&index| (foci[index].x, foci[index].y, index));
    for index in seeds {
        state.place(index);
    }

    let mut cells: BTreeMap<(u32, u32), Vec<usize>> = BTreeMap::new();
    for (index, focus) in foci.iter().enumerate() {
        cells.entry(focus.position()).or_default().push(index);
    }
    for occupants in cells.values() {
        for &index in occupants {
            state.visit(index);
        }
        state.sweep();
    }

    for index in 0..foci.len() {
        if !state.placed[index] {
            state.place(index);
        }
    }

    state.order.into_iter().map(|index| &foci[index]).collect()
}

struct Placement<'a> {
    foci: &'a [Focus],
    satisfaction: Satisfaction,
    /// First index of every name
    by_name: HashMap<&'a str, usize>,
    placed: Vec<bool>,
    placed_names: HashSet<&'a str>,
    held: Vec<usize>,
    order: Vec<usize>,
}

impl<'a> Placement<'a> {
    fn new(foci: &'a [Focus], satisfaction: Satisfaction) -> Self {
        let mut by_name = HashMap::new();
        for (index, focus) in foci.iter().enumerate() {
            by_name.entry(focus.unique_name.as_str()).or_insert(index);
        }
        Self {
            foci,
            satisfaction,
            by_name,
            placed: vec![false; foci.len()],
            placed_names: HashSet::new(),
            held: Vec::new(),
            order: Vec::with_capacity(foci.len()),
        }
    }

    fn place(&mut self, index: usize) {
        if self.placed[index] {
            return;
        }
        self.placed[index] = true;
        self.placed_names.insert(self.foci[index].unique_name.as_str());
        self.order.push(index);
    }

    fn is_satisfied(&self, index: usize) -> bool {
        let sets = &self.foci[index].prerequisites;
        let met = |set: &PrerequisiteSet| {
            set.iter().all(|member| self.placed_names.contains(member))
        };
        match self.satisfaction {
            Satisfaction::AllSets => sets.iter().all(met),
            Satisfaction::AnySet => sets.is_empty() || sets.iter().any(met),
        }
    }

    fn visit(&mut self, index: usize) {
        if self.placed[index] {
            return;
        }
        if !self.is_satisfied(index) {
            self.pull_forward(index);
        }
        if self.is_satisfied(index) {
            self.place(index);
        } else if !self.held.contains(&index) {
            self.held.push(index);
        }
    }

    /// Place the direct prerequisites of `index` that are satisfiable right now
    fn pull_forward(&mut self, index: usize) {
        let foci = self.foci;
        for member in foci[index].prerequisites.iter().flat_map(|set| set.iter()) {
            if let Some(&candidate) = self.by_name.get(member) {
                if !self.placed[candidate] && self.is_satisfied(candidate) {
                    self.place(candidate);
                }
            }
        }
    }

    /// Place held foci until a full pass places nothing
    fn sweep(&mut self) {
        loop {
            let mut progressed = false;
            let mut still_held = Vec::with_capacity(self.held.len());
            for index in std::mem::take(&mut self.held) {
                if self.placed[index] {
                    progressed = true;
                } else if self.is_satisfied(index) {
                    self.place(index);
                    progressed = true;
                } else {
                    still_held.push(index);
                }
            }
            self.held = still_held;
            if !progressed {
                break;
            }
        }
    }
}
