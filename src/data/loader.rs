use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{UpgradeCatalog, UpgradeDataFile};

const UPGRADE_DATA_RELATIVE_PATH: &str = "assets/upgrades.json";

pub fn upgrade_data_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(UPGRADE_DATA_RELATIVE_PATH)
}

pub fn load_upgrade_catalog() -> Result<UpgradeCatalog> {
    load_upgrade_catalog_from_path(upgrade_data_path())
}

pub fn load_upgrade_catalog_from_path(path: impl AsRef<Path>) -> Result<UpgradeCatalog> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading upgrade data file: {}", path.display()))?;

    upgrade_catalog_from_json(&raw)
        .with_context(|| format!("invalid upgrade data file: {}", path.display()))
}

pub fn upgrade_catalog_from_json(json: &str) -> Result<UpgradeCatalog> {
    let file: UpgradeDataFile =
        serde_json::from_str(json).context("failed parsing upgrade data as JSON")?;
    UpgradeCatalog::from_file(file)
}
