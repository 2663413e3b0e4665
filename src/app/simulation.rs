use bevy::prelude::*;
use idle_clicker::SaveTrigger;

use super::resources::{PlayerIntent, SessionState};

pub fn apply_player_intents(
    mut intents: EventReader<PlayerIntent>,
    mut state: ResMut<SessionState>,
) {
    let session = &mut state.session;

    for intent in intents.read() {
        match *intent {
            PlayerIntent::Click => {
                session.apply_click();
            }
            PlayerIntent::Buy(slot) => {
                let Some(id) = session.engine().catalog().iter().nth(slot).map(|def| def.id)
                else {
                    continue;
                };
                let outcome = session.purchase_with_bulk_amount(id);
                if outcome.is_noop() {
                    debug!("not enough points for upgrade {id}");
                }
            }
            PlayerIntent::CycleBulkAmount => {
                session.cycle_bulk_amount();
            }
            PlayerIntent::Prestige => {
                if let Some(outcome) = session.perform_prestige() {
                    info!(
                        "prestiged for {} points (total {})",
                        outcome.prestige_earned, outcome.prestige_total
                    );
                }
            }
            PlayerIntent::Save => {
                session.save(SaveTrigger::Manual);
            }
            PlayerIntent::Export => match session.export_save() {
                Ok(encoded) => info!("exported save: {encoded}"),
                Err(err) => warn!("export failed: {err:#}"),
            },
            PlayerIntent::Reset => {
                session.reset_all();
            }
        }
    }
}

pub fn tick_session(time: Res<Time>, mut state: ResMut<SessionState>) {
    let steps = state
        .tick_timer
        .tick(time.delta())
        .times_finished_this_tick();

    // Generation is wall-clock based, so one catch-up covers any number of missed steps.
    if steps > 0 {
        state.session.tick();
    }
}

pub fn autosave_session(time: Res<Time>, mut state: ResMut<SessionState>) {
    if state.autosave_timer.tick(time.delta()).just_finished() {
        state.session.save(SaveTrigger::Auto);
    }
}
