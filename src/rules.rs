//! Fixed economy constants shared by the engine and the save format.

/// Per-level cost growth: `cost = floor(base_cost * COST_GROWTH^levels)`.
pub const COST_GROWTH: f64 = 1.15;

/// Points needed to prestige, and the divisor for prestige points earned.
pub const PRESTIGE_REQUIREMENT: f64 = 1_000_000.0;

/// Rate and click bonus multiplier gained per prestige point.
pub const PRESTIGE_BONUS_RATE: f64 = 0.01;

/// Unconditional value of a click before any upgrade bonus.
pub const BASE_CLICK_VALUE: f64 = 1.0;

/// Key of the persisted save blob.
pub const SAVE_KEY: &str = "idleClickerSave";
