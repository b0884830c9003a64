use bevy::prelude::*;
use soccer_shared::game_loop::tick;

use super::actors::SceneSync;
use super::audio::{KickAudio, KickSounds};
use super::core::{Keys, Session};
use super::hud::ScoreLabels;
use super::UpdateSet;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, simulation_system.in_set(UpdateSet::Simulate));
    }
}

/// One game tick per rendered frame.
fn simulation_system(
    mut session: ResMut<Session>,
    keys: Res<Keys>,
    mut scene: SceneSync,
    mut labels: ScoreLabels,
    mut audio: KickAudio,
) {
    let mut sound = KickSounds::new(&mut audio);
    let outcome = tick(
        &mut session.state,
        &keys.tracker,
        &mut scene,
        &mut labels,
        &mut sound,
    );

    if outcome.tick == 1 {
        info!("kick-off");
    }
    if !outcome.kicks.is_empty() {
        trace!("tick {} kicks {:?}", outcome.tick, outcome.kicks);
    }
}
