use bevy::prelude::*;
use idle_clicker::{
    FileStore, GameSession, LoadOutcome, SystemClock, UpgradeCatalog,
    load_upgrade_catalog_from_path,
};

use super::resources::{RuntimeConfig, SessionState};
use super::state::AppPhase;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("PrimaryCamera"), Camera2d));
}

pub fn bootstrap_session(
    mut commands: Commands,
    config: Res<RuntimeConfig>,
    mut next_phase: ResMut<NextState<AppPhase>>,
) {
    let catalog = match &config.catalog_path {
        Some(path) => load_upgrade_catalog_from_path(path).unwrap_or_else(|err| {
            warn!("falling back to built-in upgrades: {err:#}");
            UpgradeCatalog::standard()
        }),
        None => UpgradeCatalog::standard(),
    };

    let mut session = GameSession::new(
        catalog,
        FileStore::new(config.save_dir.clone()),
        SystemClock,
    );

    match session.load() {
        LoadOutcome::Restored(report) => info!(
            "resumed after {:.1}s away, earned {:.1} points",
            report.elapsed_seconds, report.points_granted
        ),
        LoadOutcome::NoSave => info!("starting a new game"),
        LoadOutcome::RecoveredFromCorruptSave => warn!("save was corrupt, started over"),
        LoadOutcome::Failed => warn!("could not read save, playing unsaved"),
    }

    commands.insert_resource(SessionState {
        session,
        tick_timer: Timer::from_seconds((1.0 / config.tick_hz).max(0.01), TimerMode::Repeating),
        autosave_timer: Timer::from_seconds(
            config.auto_save_interval_seconds.max(1.0),
            TimerMode::Repeating,
        ),
    });

    next_phase.set(AppPhase::InGame);
}
