use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use soccer_shared::entities::{Ball, PlayerId};
use soccer_shared::ports::Renderer;
use soccer_shared::state::SceneView;

use crate::constants::{
    color_from_hex, player_color, Colors, BALL_RADIUS, PLAYER_LENGTH, PLAYER_RADIUS,
};
use crate::coord::{camera_transform, to_world};

use super::core::MainCamera;

pub struct ActorsPlugin;

/// Scene entity mirroring one body of the core game state.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Actor {
    Player(PlayerId),
    Ball,
}

impl Plugin for ActorsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_actors);
    }
}

fn spawn_actors(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let capsule = meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_LENGTH));
    for id in PlayerId::ALL {
        commands.spawn((
            Mesh3d(capsule.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color_from_hex(player_color(id)),
                ..default()
            })),
            Transform::from_translation(to_world(id.spawn())),
            Actor::Player(id),
        ));
    }

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(BALL_RADIUS).mesh().uv(32, 32))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color_from_hex(Colors::BALL),
            ..default()
        })),
        Transform::from_translation(to_world(Ball::default().position)),
        Actor::Ball,
    ));
}

type ActorTransformQuery<'w, 's> =
    Query<'w, 's, (&'static Actor, &'static mut Transform), Without<MainCamera>>;
type CameraTransformQuery<'w, 's> =
    Query<'w, 's, &'static mut Transform, (With<MainCamera>, Without<Actor>)>;

/// Scene graph as seen by the game loop: drawing a frame means moving the
/// mirrored entities; bevy's renderer does the rest.
#[derive(SystemParam)]
pub(crate) struct SceneSync<'w, 's> {
    actors: ActorTransformQuery<'w, 's>,
    camera: CameraTransformQuery<'w, 's>,
}

impl Renderer for SceneSync<'_, '_> {
    fn draw(&mut self, scene: &SceneView<'_>) {
        for (actor, mut transform) in &mut self.actors {
            let position = match actor {
                Actor::Player(id) => scene.players[id.index()].position,
                Actor::Ball => scene.ball.position,
            };
            transform.translation = to_world(position);
        }

        let pose = camera_transform(scene.camera);
        for mut transform in &mut self.camera {
            // Skip the write so change detection stays quiet on a fixed camera.
            if *transform != pose {
                *transform = pose;
            }
        }
    }
}
