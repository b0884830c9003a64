mod spawn;
mod systems;
mod types;

use bevy::prelude::*;

pub(crate) use systems::ScoreLabels;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (spawn::spawn_hud, systems::seed_score_labels).chain(),
        );
    }
}
