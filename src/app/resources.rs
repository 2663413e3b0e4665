use std::path::PathBuf;

use bevy::prelude::*;
use idle_clicker::{FileStore, GameSession, SystemClock, data::upgrade_data_path};

#[derive(Resource, Debug, Clone)]
pub struct RuntimeConfig {
    pub tick_hz: f32,
    pub auto_save_interval_seconds: f32,
    pub save_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_hz: 10.0,
            auto_save_interval_seconds: 300.0,
            save_dir: PathBuf::from("saves"),
            catalog_path: Some(upgrade_data_path()),
        }
    }
}

#[derive(Resource)]
pub struct SessionState {
    pub session: GameSession<FileStore, SystemClock>,
    pub tick_timer: Timer,
    pub autosave_timer: Timer,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerIntent {
    Click,
    /// Store slot, in catalog order.
    Buy(usize),
    CycleBulkAmount,
    Prestige,
    Save,
    Export,
    Reset,
}

#[derive(Component)]
pub struct HudText;
