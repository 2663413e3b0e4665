mod input;
mod resources;
mod setup;
mod simulation;
mod state;
mod view;

use bevy::prelude::*;

use resources::{PlayerIntent, RuntimeConfig};
use state::AppPhase;

pub struct IdleAppPlugin;

impl Plugin for IdleAppPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppPhase>()
            .init_resource::<RuntimeConfig>()
            .add_event::<PlayerIntent>()
            .add_systems(Startup, setup::spawn_camera)
            .add_systems(OnEnter(AppPhase::Boot), setup::bootstrap_session)
            .add_systems(OnEnter(AppPhase::InGame), view::spawn_hud)
            .add_systems(
                Update,
                (
                    input::emit_keyboard_intents,
                    simulation::apply_player_intents,
                    simulation::tick_session,
                    simulation::autosave_session,
                    view::refresh_hud,
                )
                    .chain()
                    .run_if(in_state(AppPhase::InGame)),
            );
    }
}
