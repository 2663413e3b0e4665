pub mod clock;
pub mod core;
pub mod data;
pub mod model;
pub mod rules;
pub mod save;
pub mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use crate::core::{
    DerivedRates, EconomySnapshot, Engine, IdleReport, PrestigeOutcome, PurchaseOutcome,
    UpgradeSnapshot, reconcile_on_resume,
};
pub use data::{
    UpgradeCatalog, UpgradeDataFile, UpgradeDefinition, UpgradeKind, load_upgrade_catalog,
    load_upgrade_catalog_from_path, upgrade_catalog_from_json,
};
pub use model::{BulkAmount, UpgradeSet, UpgradeState, cost_at_level};
pub use save::{
    BlobStore, FileStore, MemoryStore, SaveData, SaveUpgrade, apply_save_data, export_to_base64,
    import_from_base64, load_from_json_string, save_data_from_engine, save_to_json_string,
};
pub use session::{GameSession, LoadOutcome, SaveStatus, SaveStatusKind, SaveTrigger};
