mod config;
mod constants;
mod coord;
mod game;

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use game::{
    ActorsPlugin, CorePlugin, HudPlugin, InputPlugin, PitchPlugin, SimulationPlugin, SoundPlugin,
};

fn main() {
    let (config, warnings) = config::load_or_default();

    // Validate configuration before starting
    if let Err(e) = config.validate() {
        eprintln!("Invalid client configuration: {}", e);
        std::process::exit(1);
    }

    let present_mode = if config.vsync {
        PresentMode::AutoVsync
    } else {
        PresentMode::AutoNoVsync
    };

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: config.window_title.clone(),
                    resolution: WindowResolution::new(config.window_width, config.window_height),
                    present_mode,
                    resizable: true,
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: config.log_filter.clone(),
                level: Level::INFO,
                ..default()
            }),
    );

    for warning in &warnings {
        warn!("{}", warning);
    }
    info!(
        "Starting {} ({}x{})",
        config.window_title, config.window_width, config.window_height
    );

    app.add_plugins(CorePlugin { config })
        .add_plugins(PitchPlugin)
        .add_plugins(ActorsPlugin)
        .add_plugins(SoundPlugin)
        .add_plugins(HudPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(SimulationPlugin)
        .run();
}
