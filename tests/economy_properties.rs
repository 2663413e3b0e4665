use idle_clicker::{Engine, UpgradeCatalog, cost_at_level, reconcile_on_resume};
use proptest::prelude::*;

fn funded(points: f64) -> Engine {
    let mut engine = Engine::new(UpgradeCatalog::standard(), 0);
    engine.restore(points, points, 0, std::iter::empty::<(u32, u32)>(), 0);
    engine
}

fn arb_upgrade_id() -> impl Strategy<Value = u32> {
    1u32..=7
}

proptest! {
    #[test]
    fn prop_cost_depends_only_on_total_levels(
        id in arb_upgrade_id(),
        chunks in prop::collection::vec(1u32..12, 1..6),
    ) {
        let total: u32 = chunks.iter().sum();
        let mut chunked = funded(1e12);
        for chunk in &chunks {
            chunked.purchase(id, *chunk);
        }
        let mut single = funded(1e12);
        for _ in 0..total {
            single.purchase(id, 1);
        }

        let base_cost = chunked.catalog().get(id).map(|def| def.base_cost).unwrap_or_default();
        prop_assert_eq!(chunked.upgrade(id), single.upgrade(id));
        prop_assert_eq!(chunked.points(), single.points());
        prop_assert_eq!(
            chunked.upgrade(id).map(|state| state.cost),
            Some(cost_at_level(base_cost, total))
        );
    }

    #[test]
    fn prop_bulk_cost_equals_points_spent(
        id in arb_upgrade_id(),
        owned in 0u32..20,
        amount in 1u32..=100,
    ) {
        let mut engine = funded(1e15);
        engine.purchase(id, owned);
        let preview = engine.bulk_cost(id, amount);
        let points_before = engine.points();

        let outcome = engine.purchase(id, amount);

        prop_assert_eq!(outcome.levels_purchased, amount);
        prop_assert_eq!(outcome.points_spent, preview);
        prop_assert!((points_before - engine.points() - preview).abs() <= preview * 1e-12);
    }

    #[test]
    fn prop_purchase_never_overdraws(
        id in arb_upgrade_id(),
        points in 0.0f64..2_000_000.0,
        amount in 1u32..=100,
    ) {
        let mut engine = funded(points);
        let expected = engine.affordable_levels(id, amount);
        let outcome = engine.purchase(id, amount);

        prop_assert!(engine.points() >= 0.0);
        prop_assert_eq!(outcome.levels_purchased, expected);
        prop_assert_eq!(engine.total_accumulated(), points);
    }

    #[test]
    fn prop_advance_time_is_linear(
        levels in 1u32..50,
        t1 in 0.0f64..10_000.0,
        t2 in 0.0f64..10_000.0,
    ) {
        let mut split = Engine::new(UpgradeCatalog::standard(), 0);
        split.restore(0.0, 0.0, 3, [(3, levels), (5, 2)], 0);
        let mut whole = split.clone();

        split.advance_time(t1);
        split.advance_time(t2);
        whole.advance_time(t1 + t2);

        let tolerance = 1e-9 * whole.points().max(1.0);
        prop_assert!((split.points() - whole.points()).abs() <= tolerance);
    }

    #[test]
    fn prop_idle_grant_is_rate_times_elapsed(
        levels in 0u32..40,
        away_ms in 0i64..86_400_000,
    ) {
        let mut engine = Engine::new(UpgradeCatalog::standard(), 1_000);
        engine.restore(0.0, 0.0, 0, [(1, levels), (3, levels / 2)], 1_000);
        let rate = engine.auto_rate();

        let report = reconcile_on_resume(&mut engine, 1_000 + away_ms);
        let expected = rate * away_ms as f64 / 1000.0;

        prop_assert!((report.points_granted - expected).abs() <= 1e-9 * expected.max(1.0));
    }

    #[test]
    fn prop_prestige_below_requirement_is_noop(points in 0.0f64..999_999.0) {
        let mut engine = funded(points);
        let before = engine.clone();

        prop_assert!(engine.perform_prestige(5).is_none());
        prop_assert_eq!(engine, before);
    }

    #[test]
    fn prop_prestige_grants_floor_of_millions(points in 1_000_000.0f64..50_000_000.0) {
        let mut engine = funded(points);
        let outcome = engine.perform_prestige(5).expect("requirement met");

        prop_assert_eq!(outcome.prestige_earned, (points / 1_000_000.0).floor() as u64);
        prop_assert_eq!(engine.points(), 0.0);
        prop_assert_eq!(engine.total_accumulated(), 0.0);
        prop_assert_eq!(engine.auto_rate(), 0.0);
        prop_assert_eq!(engine.click_bonus(), 0.0);
    }
}
