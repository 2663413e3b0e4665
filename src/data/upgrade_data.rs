use std::collections::HashSet;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    #[serde(rename = "auto")]
    FlatAuto,
    #[serde(rename = "click")]
    FlatClick,
    #[serde(rename = "auto_percent")]
    PercentAuto,
    #[serde(rename = "click_percent")]
    PercentClick,
}

impl UpgradeKind {
    pub fn is_percent(self) -> bool {
        matches!(self, Self::PercentAuto | Self::PercentClick)
    }

    /// Save-format tag, matching the serde names.
    pub fn tag(self) -> &'static str {
        match self {
            Self::FlatAuto => "auto",
            Self::FlatClick => "click",
            Self::PercentAuto => "auto_percent",
            Self::PercentClick => "click_percent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeDefinition {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub base_cost: f64,
    pub magnitude: f64,
    pub kind: UpgradeKind,
}

impl UpgradeDefinition {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        base_cost: f64,
        magnitude: f64,
        kind: UpgradeKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            base_cost,
            magnitude,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeDataFile {
    #[serde(default)]
    pub upgrades: Vec<UpgradeDefinition>,
}

/// Validated, read-only list of upgrade definitions in store order.
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeCatalog {
    definitions: Vec<UpgradeDefinition>,
}

impl Default for UpgradeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl UpgradeCatalog {
    pub fn new(definitions: Vec<UpgradeDefinition>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(definitions.len());
        for def in &definitions {
            if def.id == 0 {
                bail!("upgrade '{}' has id 0; ids must be positive", def.name);
            }
            if !seen.insert(def.id) {
                bail!("duplicate upgrade id {}", def.id);
            }
            if !def.base_cost.is_finite() || def.base_cost <= 0.0 {
                bail!(
                    "upgrade {} has invalid base cost {}",
                    def.id,
                    def.base_cost
                );
            }
            if !def.magnitude.is_finite() || def.magnitude < 0.0 {
                bail!(
                    "upgrade {} has invalid effect magnitude {}",
                    def.id,
                    def.magnitude
                );
            }
        }
        Ok(Self { definitions })
    }

    pub fn from_file(file: UpgradeDataFile) -> Result<Self> {
        Self::new(file.upgrades)
    }

    pub fn standard() -> Self {
        use UpgradeKind::*;

        Self {
            definitions: vec![
                UpgradeDefinition::new(
                    1,
                    "Auto-Clicker Mk1",
                    "Generates 0.1 points per second.",
                    50.0,
                    0.1,
                    FlatAuto,
                ),
                UpgradeDefinition::new(
                    2,
                    "Power Click Mk1",
                    "Adds 1 point to each click.",
                    100.0,
                    1.0,
                    FlatClick,
                ),
                UpgradeDefinition::new(
                    3,
                    "Auto-Clicker Mk2",
                    "Generates 1 point per second.",
                    500.0,
                    1.0,
                    FlatAuto,
                ),
                UpgradeDefinition::new(
                    4,
                    "Power Click Mk2",
                    "Adds 5 points to each click.",
                    1000.0,
                    5.0,
                    FlatClick,
                ),
                UpgradeDefinition::new(
                    5,
                    "Optimization Algorithm Mk1",
                    "Increases total points per second by 5%.",
                    10_000.0,
                    0.05,
                    PercentAuto,
                ),
                UpgradeDefinition::new(
                    6,
                    "Ergonomic Mouse Mk1",
                    "Increases total points per click by 5%.",
                    20_000.0,
                    0.05,
                    PercentClick,
                ),
                UpgradeDefinition::new(
                    7,
                    "Quantum Computing Cloud",
                    "Increases total points per second by 10%.",
                    500_000.0,
                    0.10,
                    PercentAuto,
                ),
            ],
        }
    }

    pub fn get(&self, id: u32) -> Option<&UpgradeDefinition> {
        self.definitions.iter().find(|def| def.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UpgradeDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
