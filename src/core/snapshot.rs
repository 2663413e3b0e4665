use crate::data::{UpgradeDefinition, UpgradeKind};
use crate::model::{BulkAmount, UpgradeState};

use super::engine::Engine;

#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeSnapshot {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub kind: UpgradeKind,
    pub cost: f64,
    pub levels: u32,
    /// Cost of the next `bulk_amount` levels.
    pub bulk_cost: f64,
    pub affordable: bool,
    /// Flat kinds: amount added. Percent kinds: bonus in percent, as the rates apply it.
    pub effect: f64,
}

/// Read-only view handed to renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct EconomySnapshot {
    pub revision: u64,
    pub points: f64,
    pub total_accumulated: f64,
    pub prestige_points: u64,
    pub prestige_multiplier: f64,
    pub auto_rate: f64,
    pub click_bonus: f64,
    pub points_per_click: f64,
    pub can_prestige: bool,
    pub pending_prestige_points: u64,
    pub bulk_amount: BulkAmount,
    pub upgrades: Vec<UpgradeSnapshot>,
}

impl EconomySnapshot {
    pub fn capture(engine: &Engine, bulk_amount: BulkAmount) -> Self {
        let upgrades = engine
            .catalog()
            .iter()
            .filter_map(|def| {
                let state = engine.upgrade(def.id)?;
                Some(upgrade_snapshot(engine, def, state, bulk_amount))
            })
            .collect();

        Self {
            revision: engine.revision(),
            points: engine.points(),
            total_accumulated: engine.total_accumulated(),
            prestige_points: engine.prestige_points(),
            prestige_multiplier: engine.prestige_multiplier(),
            auto_rate: engine.auto_rate(),
            click_bonus: engine.click_bonus(),
            points_per_click: engine.points_per_click(),
            can_prestige: engine.can_prestige(),
            pending_prestige_points: engine.pending_prestige_points(),
            bulk_amount,
            upgrades,
        }
    }

    pub fn upgrade(&self, id: u32) -> Option<&UpgradeSnapshot> {
        self.upgrades.iter().find(|entry| entry.id == id)
    }

    pub fn owned_upgrades(&self) -> impl Iterator<Item = &UpgradeSnapshot> {
        self.upgrades.iter().filter(|entry| entry.levels > 0)
    }
}

fn upgrade_snapshot(
    engine: &Engine,
    def: &UpgradeDefinition,
    state: &UpgradeState,
    bulk_amount: BulkAmount,
) -> UpgradeSnapshot {
    UpgradeSnapshot {
        id: def.id,
        name: def.name.clone(),
        description: def.description.clone(),
        kind: def.kind,
        cost: state.cost,
        levels: state.levels,
        bulk_cost: engine.bulk_cost(def.id, bulk_amount.count()),
        affordable: engine.points() >= state.cost,
        effect: effect_summary(def, state.levels),
    }
}

/// Contribution of one upgrade at `levels`. Percent kinds stack linearly
/// (`1 + m * levels`), the same factor [`DerivedRates`](super::DerivedRates) uses.
pub fn effect_summary(def: &UpgradeDefinition, levels: u32) -> f64 {
    let amount = def.magnitude * f64::from(levels);
    if def.kind.is_percent() { amount * 100.0 } else { amount }
}

#[cfg(test)]
mod tests {
    use super::EconomySnapshot;
    use crate::core::Engine;
    use crate::model::BulkAmount;

    #[test]
    fn snapshot_reflects_engine_state() {
        let mut engine = Engine::default();
        engine.fund(1_200.0);
        engine.purchase(1, 2);
        engine.purchase(5, 1);

        let snapshot = EconomySnapshot::capture(&engine, BulkAmount::Ten);

        assert_eq!(snapshot.revision, engine.revision());
        assert_eq!(snapshot.points, engine.points());
        assert_eq!(snapshot.upgrades.len(), engine.catalog().len());
        assert_eq!(snapshot.bulk_amount, BulkAmount::Ten);
        assert!(!snapshot.can_prestige);
        assert_eq!(snapshot.pending_prestige_points, 0);

        let mk1 = snapshot.upgrade(1).expect("mk1 snapshot");
        assert_eq!(mk1.levels, 2);
        assert_eq!(mk1.bulk_cost, engine.bulk_cost(1, 10));
        assert!((mk1.effect - 0.2).abs() < 1e-9);

        assert_eq!(snapshot.owned_upgrades().count(), 1);
    }

    #[test]
    fn percent_effect_matches_applied_multiplier() {
        let mut engine = Engine::default();
        engine.restore(0.0, 0.0, 0, [(3, 1), (5, 10)], 0);

        let snapshot = EconomySnapshot::capture(&engine, BulkAmount::One);
        let optimizer = snapshot.upgrade(5).expect("optimizer snapshot");
        assert!((optimizer.effect - 50.0).abs() < 1e-9);
        assert!((snapshot.auto_rate - (1.0 + optimizer.effect / 100.0)).abs() < 1e-9);
        assert!(!optimizer.affordable);
    }
}
