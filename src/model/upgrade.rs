use std::collections::BTreeMap;

use crate::data::{UpgradeCatalog, UpgradeDefinition};
use crate::rules::COST_GROWTH;

pub fn cost_at_level(base_cost: f64, levels: u32) -> f64 {
    (base_cost * COST_GROWTH.powf(f64::from(levels))).floor()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpgradeState {
    pub id: u32,
    pub cost: f64,
    pub levels: u32,
}

impl UpgradeState {
    pub fn fresh(def: &UpgradeDefinition) -> Self {
        Self {
            id: def.id,
            cost: def.base_cost,
            levels: 0,
        }
    }

    pub fn with_levels(def: &UpgradeDefinition, levels: u32) -> Self {
        Self {
            id: def.id,
            cost: cost_at_level(def.base_cost, levels),
            levels,
        }
    }

    /// Bumps the level count and re-derives the cost from the definition.
    pub fn add_level(&mut self, def: &UpgradeDefinition) {
        self.levels = self.levels.saturating_add(1);
        self.cost = cost_at_level(def.base_cost, self.levels);
    }
}

/// Mutable per-upgrade state for every catalog entry, keyed by id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpgradeSet {
    entries: BTreeMap<u32, UpgradeState>,
}

impl UpgradeSet {
    pub fn fresh(catalog: &UpgradeCatalog) -> Self {
        Self {
            entries: catalog
                .iter()
                .map(|def| (def.id, UpgradeState::fresh(def)))
                .collect(),
        }
    }

    pub fn get(&self, id: u32) -> Option<&UpgradeState> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut UpgradeState> {
        self.entries.get_mut(&id)
    }

    pub fn levels(&self, id: u32) -> u32 {
        self.entries.get(&id).map_or(0, |state| state.levels)
    }

    /// Replaces the entry for `def` with one at `levels`. Ids outside the set are ignored.
    pub fn restore(&mut self, def: &UpgradeDefinition, levels: u32) {
        if let Some(state) = self.entries.get_mut(&def.id) {
            *state = UpgradeState::with_levels(def, levels);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &UpgradeState> {
        self.entries.values()
    }

    pub fn total_levels(&self) -> u64 {
        self.entries
            .values()
            .map(|state| u64::from(state.levels))
            .sum()
    }
}
