use crate::data::UpgradeCatalog;
use crate::model::{UpgradeSet, UpgradeState, cost_at_level};
use crate::rules::{BASE_CLICK_VALUE, PRESTIGE_REQUIREMENT};

use super::idle::elapsed_seconds;
use super::point_store::PointStore;
use super::rates::{DerivedRates, prestige_multiplier};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PurchaseOutcome {
    pub levels_purchased: u32,
    pub points_spent: f64,
}

impl PurchaseOutcome {
    pub fn is_noop(&self) -> bool {
        self.levels_purchased == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrestigeOutcome {
    pub prestige_earned: u64,
    pub prestige_total: u64,
    pub points_forfeited: f64,
}

/// Owns the whole economy state for one session.
///
/// Every mutation goes through a method here so the cached [`DerivedRates`]
/// can never drift from the upgrade levels and prestige points they derive from.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    wallet: PointStore,
    catalog: UpgradeCatalog,
    upgrades: UpgradeSet,
    prestige_points: u64,
    last_checkpoint_ms: i64,
    rates: DerivedRates,
    revision: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(UpgradeCatalog::standard(), 0)
    }
}

impl Engine {
    pub fn new(catalog: UpgradeCatalog, now_ms: i64) -> Self {
        let upgrades = UpgradeSet::fresh(&catalog);
        Self {
            wallet: PointStore::default(),
            catalog,
            upgrades,
            prestige_points: 0,
            last_checkpoint_ms: now_ms,
            rates: DerivedRates::default(),
            revision: 0,
        }
    }

    pub fn catalog(&self) -> &UpgradeCatalog {
        &self.catalog
    }

    pub fn upgrades(&self) -> &UpgradeSet {
        &self.upgrades
    }

    pub fn upgrade(&self, id: u32) -> Option<&UpgradeState> {
        self.upgrades.get(id)
    }

    pub fn points(&self) -> f64 {
        self.wallet.points
    }

    pub fn total_accumulated(&self) -> f64 {
        self.wallet.total_accumulated
    }

    pub fn prestige_points(&self) -> u64 {
        self.prestige_points
    }

    pub fn last_checkpoint_ms(&self) -> i64 {
        self.last_checkpoint_ms
    }

    pub fn rates(&self) -> DerivedRates {
        self.rates
    }

    pub fn auto_rate(&self) -> f64 {
        self.rates.auto_rate
    }

    pub fn click_bonus(&self) -> f64 {
        self.rates.click_bonus
    }

    pub fn points_per_click(&self) -> f64 {
        BASE_CLICK_VALUE + self.rates.click_bonus
    }

    pub fn prestige_multiplier(&self) -> f64 {
        prestige_multiplier(self.prestige_points)
    }

    /// Bumped on every state change; renderers compare it to skip redraws.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn apply_click(&mut self) -> f64 {
        let earned = self.wallet.earn(self.points_per_click());
        self.touch();
        earned
    }

    /// Sole path for passive generation. Negative or non-finite deltas count as zero.
    pub fn advance_time(&mut self, delta_seconds: f64) -> f64 {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return 0.0;
        }
        let earned = self.wallet.earn(self.rates.auto_rate * delta_seconds);
        if earned > 0.0 {
            self.touch();
        }
        earned
    }

    /// Generates points for the wall-clock span since the last checkpoint, then
    /// rebases the checkpoint to `now_ms`. A clock that went backward grants
    /// nothing for that step; later steps measure from the new reading.
    pub fn advance_to(&mut self, now_ms: i64) -> f64 {
        let elapsed = elapsed_seconds(self.last_checkpoint_ms, now_ms);
        self.last_checkpoint_ms = now_ms;
        self.advance_time(elapsed)
    }

    pub fn purchase(&mut self, id: u32, requested_levels: u32) -> PurchaseOutcome {
        let Some(def) = self.catalog.get(id) else {
            tracing::debug!(upgrade_id = id, "purchase ignored: unknown upgrade");
            return PurchaseOutcome::default();
        };
        let Some(state) = self.upgrades.get_mut(id) else {
            return PurchaseOutcome::default();
        };

        let mut outcome = PurchaseOutcome::default();
        for _ in 0..requested_levels {
            let cost = state.cost;
            if !self.wallet.spend(cost) {
                break;
            }
            state.add_level(def);
            outcome.levels_purchased += 1;
            outcome.points_spent += cost;
        }

        if outcome.is_noop() {
            return outcome;
        }

        tracing::debug!(
            upgrade_id = id,
            levels = outcome.levels_purchased,
            spent = outcome.points_spent,
            next_cost = state.cost,
            "upgrade purchased"
        );
        self.recompute_rates();
        self.touch();
        outcome
    }

    /// Total cost of the next `amount` levels of `id`, without buying them. Unknown ids cost 0.
    pub fn bulk_cost(&self, id: u32, amount: u32) -> f64 {
        let (Some(def), Some(state)) = (self.catalog.get(id), self.upgrades.get(id)) else {
            return 0.0;
        };
        if amount == 0 {
            return 0.0;
        }
        let first = state.cost;
        (1..amount).fold(first, |total, offset| {
            total + cost_at_level(def.base_cost, state.levels.saturating_add(offset))
        })
    }

    /// How many levels of `id` the current points would buy, capped at `limit`.
    pub fn affordable_levels(&self, id: u32, limit: u32) -> u32 {
        let (Some(def), Some(state)) = (self.catalog.get(id), self.upgrades.get(id)) else {
            return 0;
        };
        let mut remaining = self.wallet.points;
        let mut levels = state.levels;
        let mut cost = state.cost;
        let mut bought = 0;
        while bought < limit && remaining >= cost {
            remaining -= cost;
            levels = levels.saturating_add(1);
            cost = cost_at_level(def.base_cost, levels);
            bought += 1;
        }
        bought
    }

    pub fn can_prestige(&self) -> bool {
        self.wallet.points >= PRESTIGE_REQUIREMENT
    }

    /// Prestige points a prestige would grant right now.
    pub fn pending_prestige_points(&self) -> u64 {
        if !self.can_prestige() {
            return 0;
        }
        (self.wallet.points / PRESTIGE_REQUIREMENT).floor() as u64
    }

    pub fn perform_prestige(&mut self, now_ms: i64) -> Option<PrestigeOutcome> {
        if !self.can_prestige() {
            tracing::debug!(points = self.wallet.points, "prestige refused: requirement not met");
            return None;
        }

        let earned = self.pending_prestige_points();
        let forfeited = self.wallet.points;
        self.prestige_points = self.prestige_points.saturating_add(earned);
        self.wallet.clear();
        self.upgrades = UpgradeSet::fresh(&self.catalog);
        self.last_checkpoint_ms = now_ms;
        self.recompute_rates();
        self.touch();

        tracing::info!(
            earned,
            total = self.prestige_points,
            forfeited,
            "prestige performed"
        );
        Some(PrestigeOutcome {
            prestige_earned: earned,
            prestige_total: self.prestige_points,
            points_forfeited: forfeited,
        })
    }

    /// Wipes everything, prestige points included.
    pub fn reset_all(&mut self, now_ms: i64) {
        self.wallet.clear();
        self.prestige_points = 0;
        self.upgrades = UpgradeSet::fresh(&self.catalog);
        self.last_checkpoint_ms = now_ms;
        self.recompute_rates();
        self.touch();
    }

    /// Replaces the persistent state wholesale, e.g. from a save.
    /// `levels` entries whose id is not in the catalog are skipped.
    pub fn restore(
        &mut self,
        points: f64,
        total_accumulated: f64,
        prestige_points: u64,
        levels: impl IntoIterator<Item = (u32, u32)>,
        last_checkpoint_ms: i64,
    ) {
        self.wallet.clear();
        self.wallet.points = sanitize(points);
        self.wallet.total_accumulated = sanitize(total_accumulated);
        self.prestige_points = prestige_points;

        let mut upgrades = UpgradeSet::fresh(&self.catalog);
        for (id, count) in levels {
            if let Some(def) = self.catalog.get(id) {
                upgrades.restore(def, count);
            }
        }
        self.upgrades = upgrades;
        self.last_checkpoint_ms = last_checkpoint_ms;
        self.recompute_rates();
        self.touch();
    }

    #[cfg(test)]
    pub(crate) fn fund(&mut self, points: f64) {
        self.wallet.points = points;
        self.wallet.total_accumulated = self.wallet.total_accumulated.max(points);
        self.touch();
    }

    fn recompute_rates(&mut self) {
        self.rates = DerivedRates::compute(&self.catalog, &self.upgrades, self.prestige_points);
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::Engine;
    use crate::model::cost_at_level;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    fn funded(points: f64) -> Engine {
        let mut engine = Engine::default();
        engine.wallet.points = points;
        engine.wallet.total_accumulated = points;
        engine
    }

    #[test]
    fn click_grants_base_value_plus_bonus() {
        let mut engine = Engine::default();
        assert_close(engine.apply_click(), 1.0);

        let mut engine = funded(100.0);
        engine.purchase(2, 1);
        assert_close(engine.points_per_click(), 2.0);
        let before_total = engine.total_accumulated();
        engine.apply_click();
        assert_close(engine.points(), 2.0);
        assert_close(engine.total_accumulated(), before_total + 2.0);
    }

    #[test]
    fn advance_time_clamps_bad_deltas() {
        let mut engine = funded(500.0);
        engine.purchase(3, 1);
        let points = engine.points();
        let revision = engine.revision();

        assert_eq!(engine.advance_time(-5.0), 0.0);
        assert_eq!(engine.advance_time(f64::NAN), 0.0);
        assert_eq!(engine.points(), points);
        assert_eq!(engine.revision(), revision);

        assert_close(engine.advance_time(2.5), 2.5);
    }

    #[test]
    fn backward_clock_step_grants_nothing_and_rebases() {
        let mut engine = funded(500.0);
        engine.purchase(3, 1);

        assert_close(engine.advance_to(4_000), 4.0);
        assert_eq!(engine.last_checkpoint_ms(), 4_000);
        assert_eq!(engine.advance_to(1_000), 0.0);
        assert_eq!(engine.last_checkpoint_ms(), 1_000);
        assert_close(engine.advance_to(2_500), 1.5);
    }

    #[test]
    fn generation_resumes_right_after_clock_jumps_back_an_hour() {
        let mut engine = Engine::default();
        engine.restore(0.0, 0.0, 0, [(3, 10)], 0);
        assert_close(engine.auto_rate(), 10.0);

        engine.advance_to(3_600_000);
        let before = engine.points();
        for step in 0..=6_000i64 {
            engine.advance_to(step * 100);
        }

        assert!((engine.points() - before - 6_000.0).abs() <= 1e-6);
    }

    #[test]
    fn purchase_stops_at_first_unaffordable_level() {
        // 50 + 57 + 66 = 173; the fourth level costs 76.
        let mut engine = funded(200.0);
        let outcome = engine.purchase(1, 10);

        assert_eq!(outcome.levels_purchased, 3);
        assert_close(outcome.points_spent, 173.0);
        assert_close(engine.points(), 27.0);
        assert_close(engine.total_accumulated(), 200.0);
        let state = engine.upgrade(1).expect("state");
        assert_eq!(state.levels, 3);
        assert_eq!(state.cost, cost_at_level(50.0, 3));
        assert_close(engine.auto_rate(), 0.3);
    }

    #[test]
    fn unaffordable_or_unknown_purchase_is_noop() {
        let mut engine = funded(10.0);
        let revision = engine.revision();

        assert!(engine.purchase(1, 1).is_noop());
        assert!(engine.purchase(42, 5).is_noop());
        assert!(engine.purchase(1, 0).is_noop());
        assert_eq!(engine.points(), 10.0);
        assert_eq!(engine.revision(), revision);
        assert_eq!(engine.bulk_cost(42, 3), 0.0);
        assert_eq!(engine.bulk_cost(1, 0), 0.0);
    }

    #[test]
    fn bulk_cost_matches_points_spent() {
        let mut engine = funded(1_000_000.0);
        engine.purchase(4, 7);
        let preview = engine.bulk_cost(4, 10);
        let outcome = engine.purchase(4, 10);

        assert_eq!(outcome.levels_purchased, 10);
        assert_eq!(outcome.points_spent, preview);
    }

    #[test]
    fn affordable_levels_agrees_with_purchase() {
        let mut engine = funded(12_345.0);
        let expected = engine.affordable_levels(3, 100);
        let outcome = engine.purchase(3, 100);
        assert_eq!(outcome.levels_purchased, expected);
        assert_eq!(engine.affordable_levels(3, 100), 0);
    }

    #[test]
    fn chunked_purchases_match_single_purchases() {
        let mut chunked = funded(1_000_000.0);
        chunked.purchase(5, 10);
        chunked.purchase(5, 5);

        let mut single = funded(1_000_000.0);
        for _ in 0..15 {
            single.purchase(5, 1);
        }

        assert_eq!(chunked.upgrade(5), single.upgrade(5));
        assert_eq!(chunked.points(), single.points());
        assert_eq!(chunked.rates(), single.rates());
        assert_eq!(
            chunked.upgrade(5).map(|state| state.cost),
            Some(cost_at_level(10_000.0, 15))
        );
    }

    #[test]
    fn prestige_below_requirement_changes_nothing() {
        let mut engine = funded(999_999.0);
        engine.purchase(1, 3);
        let before = engine.clone();

        assert!(!engine.can_prestige());
        assert!(engine.perform_prestige(9_000).is_none());
        assert_eq!(engine, before);
    }

    #[test]
    fn prestige_converts_points_and_resets_progress() {
        let mut engine = funded(2_600_000.0);
        engine.purchase(3, 20);
        engine.wallet.points = 2_500_000.0;

        let outcome = engine.perform_prestige(7_000).expect("prestige should run");

        assert_eq!(outcome.prestige_earned, 2);
        assert_eq!(engine.prestige_points(), 2);
        assert_eq!(engine.points(), 0.0);
        assert_eq!(engine.total_accumulated(), 0.0);
        assert_eq!(engine.last_checkpoint_ms(), 7_000);
        assert_eq!(engine.upgrades().total_levels(), 0);
        for def in engine.catalog().iter() {
            assert_eq!(engine.upgrade(def.id).map(|s| s.cost), Some(def.base_cost));
        }
    }

    #[test]
    fn prestige_bonus_applies_to_zero_base_after_reset() {
        let mut engine = funded(3_000_000.0);
        engine.purchase(3, 5);
        engine.wallet.points = 3_000_000.0;
        engine.perform_prestige(0).expect("prestige");

        assert_eq!(engine.prestige_points(), 3);
        assert_eq!(engine.auto_rate(), 0.0);
        assert_eq!(engine.click_bonus(), 0.0);

        engine.wallet.points = 500.0;
        engine.purchase(3, 1);
        assert_close(engine.auto_rate(), 1.03);
    }

    #[test]
    fn reset_all_also_clears_prestige() {
        let mut engine = funded(5_000_000.0);
        engine.perform_prestige(0).expect("prestige");
        engine.wallet.points = 1_000.0;
        engine.purchase(2, 2);

        engine.reset_all(123);

        assert_eq!(engine.prestige_points(), 0);
        assert_eq!(engine.points(), 0.0);
        assert_eq!(engine.total_accumulated(), 0.0);
        assert_eq!(engine.upgrades().total_levels(), 0);
        assert_eq!(engine.last_checkpoint_ms(), 123);
        assert_eq!(engine.points_per_click(), 1.0);
    }

    #[test]
    fn restore_skips_unknown_ids_and_recomputes_rates() {
        let mut engine = Engine::default();
        engine.restore(12.0, 40.0, 10, [(3, 2), (99, 4)], 500);

        assert_eq!(engine.points(), 12.0);
        assert_eq!(engine.total_accumulated(), 40.0);
        assert_eq!(engine.upgrade(3).map(|s| s.levels), Some(2));
        assert!(engine.upgrade(99).is_none());
        assert_close(engine.auto_rate(), 2.0 * 1.1);
        assert_eq!(engine.last_checkpoint_ms(), 500);
    }
}
