use anyhow::Result;

use crate::clock::Clock;
use crate::core::{
    EconomySnapshot, Engine, IdleReport, PrestigeOutcome, PurchaseOutcome, reconcile_on_resume,
};
use crate::data::UpgradeCatalog;
use crate::model::BulkAmount;
use crate::rules::SAVE_KEY;
use crate::save::{
    BlobStore, SaveData, apply_save_data, export_to_base64, import_from_base64,
    load_from_json_string, save_data_from_engine, save_to_json_string,
};

const STATUS_VISIBLE_MS: i64 = 2_500;
const FAILURE_STATUS_VISIBLE_MS: i64 = 3_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveTrigger {
    Manual,
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatusKind {
    Saved,
    AutoSaved,
    SaveFailed(String),
    LoadFailed(String),
    ClearFailed(String),
    RecoveredFromCorruptSave,
}

/// Transient persistence feedback for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveStatus {
    pub kind: SaveStatusKind,
    pub at_ms: i64,
}

impl SaveStatus {
    pub fn message(&self) -> &'static str {
        match self.kind {
            SaveStatusKind::Saved => "Game Saved!",
            SaveStatusKind::AutoSaved => "Game auto-saved",
            SaveStatusKind::SaveFailed(_) => "Save Failed!",
            SaveStatusKind::LoadFailed(_) => "Load Failed!",
            SaveStatusKind::ClearFailed(_) => "Could not clear save data",
            SaveStatusKind::RecoveredFromCorruptSave => "Save data was corrupt; game reset",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self.kind,
            SaveStatusKind::SaveFailed(_)
                | SaveStatusKind::LoadFailed(_)
                | SaveStatusKind::ClearFailed(_)
        )
    }

    pub fn visible_at(&self, now_ms: i64) -> bool {
        let window = if self.is_failure() {
            FAILURE_STATUS_VISIBLE_MS
        } else {
            STATUS_VISIBLE_MS
        };
        now_ms >= self.at_ms && now_ms - self.at_ms < window
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    NoSave,
    Restored(IdleReport),
    RecoveredFromCorruptSave,
    Failed,
}

/// The handle a renderer holds: engine plus persistence, clock and UI preferences.
pub struct GameSession<S, C> {
    engine: Engine,
    store: S,
    clock: C,
    bulk_amount: BulkAmount,
    status: Option<SaveStatus>,
}

impl<S: BlobStore, C: Clock> GameSession<S, C> {
    pub fn new(catalog: UpgradeCatalog, store: S, clock: C) -> Self {
        let engine = Engine::new(catalog, clock.now_ms());
        Self {
            engine,
            store,
            clock,
            bulk_amount: BulkAmount::default(),
            status: None,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn snapshot(&self) -> EconomySnapshot {
        EconomySnapshot::capture(&self.engine, self.bulk_amount)
    }

    pub fn bulk_amount(&self) -> BulkAmount {
        self.bulk_amount
    }

    /// Accepts 1, 10 or 100; anything else leaves the preference unchanged.
    pub fn set_bulk_amount(&mut self, count: u32) -> bool {
        match BulkAmount::from_count(count) {
            Some(amount) => {
                self.bulk_amount = amount;
                true
            }
            None => false,
        }
    }

    pub fn cycle_bulk_amount(&mut self) -> BulkAmount {
        self.bulk_amount = self.bulk_amount.next();
        self.bulk_amount
    }

    pub fn apply_click(&mut self) -> f64 {
        self.engine.apply_click()
    }

    pub fn purchase(&mut self, id: u32, amount: u32) -> PurchaseOutcome {
        self.engine.purchase(id, amount)
    }

    pub fn purchase_with_bulk_amount(&mut self, id: u32) -> PurchaseOutcome {
        self.engine.purchase(id, self.bulk_amount.count())
    }

    pub fn bulk_cost(&self, id: u32, amount: u32) -> f64 {
        self.engine.bulk_cost(id, amount)
    }

    /// Live tick: generates points for the time since the last checkpoint.
    pub fn tick(&mut self) -> f64 {
        let now = self.clock.now_ms();
        self.engine.advance_to(now)
    }

    /// Runs prestige and, when it happens, saves right away.
    pub fn perform_prestige(&mut self) -> Option<PrestigeOutcome> {
        let now = self.clock.now_ms();
        let outcome = self.engine.perform_prestige(now)?;
        self.save(SaveTrigger::Manual);
        Some(outcome)
    }

    /// Wipes the game and its persisted save. Returns `false` when the save
    /// could not be cleared; the in-memory reset happens either way.
    pub fn reset_all(&mut self) -> bool {
        let now = self.clock.now_ms();
        tracing::warn!("resetting game state to defaults");
        self.engine.reset_all(now);
        match self.store.remove(SAVE_KEY) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = ?err, "failed to clear persisted save");
                self.set_status(SaveStatusKind::ClearFailed(format!("{err:#}")));
                false
            }
        }
    }

    /// Persists the current state. Failures become a status, never an error.
    pub fn save(&mut self, trigger: SaveTrigger) -> bool {
        self.tick();
        let result = save_to_json_string(&save_data_from_engine(&self.engine))
            .and_then(|json| self.store.set(SAVE_KEY, &json));

        match result {
            Ok(()) => {
                tracing::debug!(?trigger, "game saved");
                self.set_status(match trigger {
                    SaveTrigger::Manual => SaveStatusKind::Saved,
                    SaveTrigger::Auto => SaveStatusKind::AutoSaved,
                });
                true
            }
            Err(err) => {
                tracing::warn!(?trigger, error = ?err, "failed to save game");
                self.set_status(SaveStatusKind::SaveFailed(format!("{err:#}")));
                false
            }
        }
    }

    /// Restores the persisted blob and applies idle gains for the time away.
    /// A corrupt blob resets the game; a store failure leaves state untouched.
    pub fn load(&mut self) -> LoadOutcome {
        let raw = match self.store.get(SAVE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!("no saved game found");
                return LoadOutcome::NoSave;
            }
            Err(err) => {
                tracing::warn!(error = ?err, "failed to read saved game");
                self.set_status(SaveStatusKind::LoadFailed(format!("{err:#}")));
                return LoadOutcome::Failed;
            }
        };

        match load_from_json_string(&raw) {
            Ok(save) => LoadOutcome::Restored(self.restore(&save)),
            Err(err) => {
                tracing::warn!(error = ?err, "saved game is corrupt; resetting");
                // A failed clear keeps its own status; the corrupt blob is still there.
                if self.reset_all() {
                    self.set_status(SaveStatusKind::RecoveredFromCorruptSave);
                }
                LoadOutcome::RecoveredFromCorruptSave
            }
        }
    }

    pub fn export_save(&mut self) -> Result<String> {
        self.tick();
        export_to_base64(&save_data_from_engine(&self.engine))
    }

    /// Replaces the current game with an exported one. Invalid input leaves state untouched.
    pub fn import_save(&mut self, encoded: &str) -> Result<IdleReport> {
        let save = import_from_base64(encoded)?;
        let report = self.restore(&save);
        self.save(SaveTrigger::Manual);
        Ok(report)
    }

    pub fn status(&self) -> Option<&SaveStatus> {
        self.status.as_ref()
    }

    pub fn visible_status(&self) -> Option<&SaveStatus> {
        let now = self.clock.now_ms();
        self.status.as_ref().filter(|status| status.visible_at(now))
    }

    fn restore(&mut self, save: &SaveData) -> IdleReport {
        let now = self.clock.now_ms();
        let summary = apply_save_data(&mut self.engine, save, now);
        tracing::info!(
            upgrades = summary.upgrades_applied,
            prestige_points = self.engine.prestige_points(),
            "game loaded"
        );
        reconcile_on_resume(&mut self.engine, now)
    }

    fn set_status(&mut self, kind: SaveStatusKind) {
        self.status = Some(SaveStatus {
            kind,
            at_ms: self.clock.now_ms(),
        });
    }
}
