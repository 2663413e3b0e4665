use std::collections::HashSet;

use crate::core::Engine;

use super::{SaveData, SaveUpgrade};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreSummary {
    pub upgrades_applied: usize,
    pub upgrades_ignored: usize,
}

pub fn save_data_from_engine(engine: &Engine) -> SaveData {
    let upgrades = engine
        .catalog()
        .iter()
        .filter_map(|def| {
            let state = engine.upgrade(def.id)?;
            Some(SaveUpgrade {
                id: def.id,
                name: def.name.clone(),
                cost: state.cost,
                base_cost: def.base_cost,
                multiplier: def.magnitude,
                kind: def.kind.tag().to_string(),
                purchased: state.levels,
                description: def.description.clone(),
            })
        })
        .collect();

    SaveData {
        points: engine.points(),
        click_multiplier: engine.click_bonus(),
        auto_points_per_second: engine.auto_rate(),
        prestige_points: engine.prestige_points(),
        upgrades,
        last_active_time: Some(engine.last_checkpoint_ms()),
        total_points_accumulated: engine.total_accumulated(),
    }
}

/// Loads `save` into `engine`, merging saved upgrade entries onto a fresh
/// catalog set by id. Cached rates in the blob are ignored and recomputed.
/// A save without `lastActiveTime` checkpoints at `now_ms`.
pub fn apply_save_data(engine: &mut Engine, save: &SaveData, now_ms: i64) -> RestoreSummary {
    let mut summary = RestoreSummary::default();
    let mut seen = HashSet::new();
    let mut levels = Vec::with_capacity(save.upgrades.len());

    for entry in &save.upgrades {
        let Some(def) = engine.catalog().get(entry.id) else {
            summary.upgrades_ignored += 1;
            continue;
        };
        if !seen.insert(entry.id) {
            summary.upgrades_ignored += 1;
            continue;
        }
        let expected_cost = crate::model::cost_at_level(def.base_cost, entry.purchased);
        if entry.cost != expected_cost {
            tracing::debug!(
                upgrade_id = entry.id,
                saved_cost = entry.cost,
                expected_cost,
                "saved cost disagrees with level count; using level count"
            );
        }
        levels.push((entry.id, entry.purchased));
        summary.upgrades_applied += 1;
    }

    engine.restore(
        save.points,
        save.total_points_accumulated,
        save.prestige_points,
        levels,
        save.last_active_time.unwrap_or(now_ms),
    );

    if summary.upgrades_ignored > 0 {
        tracing::warn!(
            ignored = summary.upgrades_ignored,
            "save listed unknown or duplicate upgrade ids"
        );
    }
    summary
}
