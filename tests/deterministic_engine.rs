use idle_clicker::{Engine, UpgradeCatalog, cost_at_level, reconcile_on_resume};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= EPSILON,
        "expected {expected}, got {actual}"
    );
}

fn funded(points: f64) -> Engine {
    let mut engine = Engine::new(UpgradeCatalog::standard(), 0);
    engine.restore(points, points, 0, std::iter::empty::<(u32, u32)>(), 0);
    engine
}

#[test]
fn repeated_sessions_are_deterministic() {
    let mut a = funded(250_000.0);
    a.purchase(1, 25);
    a.purchase(3, 10);
    a.purchase(5, 2);
    a.purchase(2, 4);
    let mut b = a.clone();

    for step in 1..=64 {
        a.advance_to(step * 100);
        b.advance_to(step * 100);
        a.apply_click();
        b.apply_click();
        assert_eq!(a, b);
    }
}

#[test]
fn early_game_click_and_buy_loop() {
    let mut engine = Engine::new(UpgradeCatalog::standard(), 0);
    for _ in 0..50 {
        engine.apply_click();
    }
    assert_close(engine.points(), 50.0);

    let outcome = engine.purchase(1, 1);
    assert_eq!(outcome.levels_purchased, 1);
    assert_close(engine.points(), 0.0);
    assert_close(engine.total_accumulated(), 50.0);
    assert_close(engine.auto_rate(), 0.1);

    engine.advance_to(10_000);
    assert_close(engine.points(), 1.0);
    assert_eq!(engine.upgrade(1).map(|state| state.cost), Some(57.0));
}

#[test]
fn total_accumulated_never_decreases_between_prestiges() {
    let mut engine = funded(5_000.0);
    let mut last_total = engine.total_accumulated();

    for step in 1..=200i64 {
        match step % 4 {
            0 => {
                engine.purchase(2, 3);
            }
            1 => {
                engine.apply_click();
            }
            2 => {
                engine.advance_to(step * 250);
            }
            _ => {
                engine.purchase(1, 10);
            }
        }
        assert!(engine.total_accumulated() >= last_total);
        last_total = engine.total_accumulated();
    }
}

#[test]
fn full_prestige_cycle_keeps_only_the_multiplier() {
    // Both purchases together cost well under 100k, leaving 2.5M+ to convert.
    let mut engine = funded(2_600_000.0);
    engine.purchase(3, 5);
    engine.purchase(4, 5);
    assert_eq!(engine.pending_prestige_points(), 2);

    let outcome = engine.perform_prestige(60_000).expect("prestige");
    assert_eq!(outcome.prestige_earned, 2);
    assert_eq!(engine.prestige_points(), 2);
    assert_eq!(engine.auto_rate(), 0.0);
    assert_eq!(engine.click_bonus(), 0.0);
    assert_close(engine.points_per_click(), 1.0);

    for _ in 0..500 {
        engine.apply_click();
    }
    engine.purchase(3, 1);
    assert_close(engine.auto_rate(), 1.02);
    assert_eq!(engine.upgrade(3).map(|state| state.cost), Some(cost_at_level(500.0, 1)));

    let report = reconcile_on_resume(&mut engine, 60_000 + 100_000);
    assert_close(report.points_granted, 102.0);
}
