use crate::data::{UpgradeCatalog, UpgradeKind};
use crate::model::UpgradeSet;
use crate::rules::PRESTIGE_BONUS_RATE;

/// Cached generation rates. Always a pure function of upgrade levels and prestige points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivedRates {
    pub auto_rate: f64,
    pub click_bonus: f64,
}

impl DerivedRates {
    pub fn compute(catalog: &UpgradeCatalog, upgrades: &UpgradeSet, prestige_points: u64) -> Self {
        let mut flat_auto = 0.0;
        let mut flat_click = 0.0;
        let mut pct_auto = 1.0;
        let mut pct_click = 1.0;

        for def in catalog.iter() {
            let levels = f64::from(upgrades.levels(def.id));
            let amount = def.magnitude * levels;
            match def.kind {
                UpgradeKind::FlatAuto => flat_auto += amount,
                UpgradeKind::FlatClick => flat_click += amount,
                UpgradeKind::PercentAuto => pct_auto *= 1.0 + amount,
                UpgradeKind::PercentClick => pct_click *= 1.0 + amount,
            }
        }

        let prestige = prestige_multiplier(prestige_points);
        Self {
            auto_rate: flat_auto * pct_auto * prestige,
            click_bonus: flat_click * pct_click * prestige,
        }
    }
}

pub fn prestige_multiplier(prestige_points: u64) -> f64 {
    1.0 + prestige_points as f64 * PRESTIGE_BONUS_RATE
}
