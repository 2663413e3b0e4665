mod engine;
mod idle;
mod point_store;
mod rates;
mod snapshot;

pub use engine::{Engine, PrestigeOutcome, PurchaseOutcome};
pub use idle::{IdleReport, elapsed_seconds, reconcile_on_resume};
pub use point_store::PointStore;
pub use rates::{DerivedRates, prestige_multiplier};
pub use snapshot::{EconomySnapshot, UpgradeSnapshot, effect_summary};
