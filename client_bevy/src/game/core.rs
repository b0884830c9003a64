use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use soccer_shared::camera::{CameraPose, Viewport, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};
use soccer_shared::input::InputTracker;
use soccer_shared::state::GameState;

use crate::config::ClientConfig;
use crate::constants::{color_from_hex, Colors, AMBIENT_BRIGHTNESS, SUN_ILLUMINANCE, SUN_POSITION};
use crate::coord::camera_transform;

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum UpdateSet {
    Input,
    Simulate,
}

pub struct CorePlugin {
    pub config: ClientConfig,
}

/// The one match being played.
#[derive(Resource, Default)]
pub(crate) struct Session {
    pub(crate) state: GameState,
}

#[derive(Resource, Default)]
pub(crate) struct Keys {
    pub(crate) tracker: InputTracker,
}

/// Logical size of the primary window, the unit `WindowResized` reports in.
#[derive(Resource, Default)]
pub(crate) struct ViewportState {
    pub(crate) viewport: Viewport,
}

#[derive(Resource, Clone)]
pub(crate) struct Settings(pub(crate) ClientConfig);

#[derive(Component)]
pub(crate) struct MainCamera;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Settings(self.config.clone()))
            .init_resource::<Session>()
            .init_resource::<Keys>()
            .init_resource::<ViewportState>()
            .insert_resource(ClearColor(color_from_hex(Colors::SKY)))
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: AMBIENT_BRIGHTNESS,
                ..default()
            })
            .configure_sets(Update, (UpdateSet::Input, UpdateSet::Simulate).chain())
            .add_systems(Startup, (setup_camera, setup_lights, seed_viewport))
            .add_systems(Update, fit_camera_to_window);
    }
}

fn setup_camera(mut commands: Commands) {
    // WebGL2 MSAA is expensive (often CPU fallback).
    #[cfg(target_arch = "wasm32")]
    let msaa = Msaa::Off;
    #[cfg(not(target_arch = "wasm32"))]
    let msaa = Msaa::Sample4;

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        // No tonemapping LUTs are bundled; flat colours look as authored.
        Tonemapping::None,
        msaa,
        camera_transform(CameraPose::TOP_DOWN),
        MainCamera,
    ));
}

fn setup_lights(mut commands: Commands, settings: Res<Settings>) {
    let [x, y, z] = SUN_POSITION;
    commands.spawn((
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: settings.0.shadows,
            ..default()
        },
        Transform::from_xyz(x, y, z).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn seed_viewport(
    q_window: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportState>,
) {
    let Ok(window) = q_window.single() else {
        return;
    };
    viewport.viewport = Viewport::new(window.width(), window.height());
}

/// Resize hook. Bevy's camera system also derives the aspect ratio from the
/// render target; writing the same ratio here keeps the projection and
/// `ViewportState` in step within the frame the resize arrives.
fn fit_camera_to_window(
    mut resized: MessageReader<WindowResized>,
    mut viewport: ResMut<ViewportState>,
    mut q_projection: Query<&mut Projection, With<MainCamera>>,
) {
    let Some(last) = resized.read().last() else {
        return;
    };

    if !viewport.viewport.resize(last.width, last.height) {
        return;
    }
    let Some(aspect) = viewport.viewport.aspect_ratio() else {
        debug!("viewport collapsed to {}x{}", last.width, last.height);
        return;
    };

    for mut projection in &mut q_projection {
        if let Projection::Perspective(perspective) = &mut *projection {
            perspective.aspect_ratio = aspect;
        }
    }
    debug!("viewport resized to {}x{}", last.width, last.height);
}
