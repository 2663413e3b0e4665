mod loader;
mod upgrade_data;

pub use loader::{
    load_upgrade_catalog, load_upgrade_catalog_from_path, upgrade_catalog_from_json,
    upgrade_data_path,
};
pub use upgrade_data::{UpgradeCatalog, UpgradeDataFile, UpgradeDefinition, UpgradeKind};
