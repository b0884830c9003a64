use bevy::prelude::*;
use soccer_shared::entities::Goal;
use soccer_shared::state::Field;

use crate::constants::{color_from_hex, Colors, GOAL_DEPTH, GOAL_HEIGHT, GOAL_WIDTH};

pub struct PitchPlugin;

impl Plugin for PitchPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_pitch);
    }
}

fn spawn_pitch(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let field = Field::STANDARD;
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(field.width, field.depth))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color_from_hex(Colors::GRASS),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::default(),
    ));

    // Frames are scenery only; scoring uses the goal volumes in the core.
    let frame = meshes.add(Cuboid::new(GOAL_DEPTH, GOAL_HEIGHT, GOAL_WIDTH));
    let frame_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::GOAL),
        ..default()
    });
    for goal in [Goal::LEFT, Goal::RIGHT] {
        commands.spawn((
            Mesh3d(frame.clone()),
            MeshMaterial3d(frame_material.clone()),
            Transform::from_xyz(goal.center_x(), GOAL_HEIGHT * 0.5, 0.0),
        ));
    }
}
