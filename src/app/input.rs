use bevy::prelude::*;

use super::resources::PlayerIntent;

const STORE_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

pub fn emit_keyboard_intents(
    keys: Res<ButtonInput<KeyCode>>,
    mut intents: EventWriter<PlayerIntent>,
) {
    if keys.just_pressed(KeyCode::Space) {
        intents.send(PlayerIntent::Click);
    }

    for (slot, key) in STORE_KEYS.iter().enumerate() {
        if keys.just_pressed(*key) {
            intents.send(PlayerIntent::Buy(slot));
        }
    }

    if keys.just_pressed(KeyCode::KeyB) {
        intents.send(PlayerIntent::CycleBulkAmount);
    }
    if keys.just_pressed(KeyCode::KeyP) {
        intents.send(PlayerIntent::Prestige);
    }
    if keys.just_pressed(KeyCode::KeyS) {
        intents.send(PlayerIntent::Save);
    }
    if keys.just_pressed(KeyCode::KeyE) {
        intents.send(PlayerIntent::Export);
    }

    // Shift+Backspace, so a stray keypress cannot wipe prestige.
    let shift = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
    if shift && keys.just_pressed(KeyCode::Backspace) {
        intents.send(PlayerIntent::Reset);
    }
}
