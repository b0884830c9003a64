use bevy::prelude::*;

use super::core::Keys;
use super::UpdateSet;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, input_system.in_set(UpdateSet::Input));
    }
}

/// Browser-style lower-cased key name for the keys the game listens to.
/// Everything else is dropped before it reaches the tracker.
pub(crate) fn key_name(code: KeyCode) -> Option<&'static str> {
    let name = match code {
        KeyCode::KeyW => "w",
        KeyCode::KeyA => "a",
        KeyCode::KeyS => "s",
        KeyCode::KeyD => "d",
        KeyCode::KeyK => "k",
        KeyCode::KeyX => "x",
        KeyCode::ArrowUp => "arrowup",
        KeyCode::ArrowDown => "arrowdown",
        KeyCode::ArrowLeft => "arrowleft",
        KeyCode::ArrowRight => "arrowright",
        _ => return None,
    };
    Some(name)
}

fn input_system(mut keys: ResMut<Keys>, input: Res<ButtonInput<KeyCode>>) {
    for code in input.get_just_pressed() {
        if let Some(name) = key_name(*code) {
            keys.tracker.on_key_down(name);
        }
    }
    for code in input.get_just_released() {
        if let Some(name) = key_name(*code) {
            keys.tracker.on_key_up(name);
        }
    }
}
