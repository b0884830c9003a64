mod actors;
mod audio;
mod core;
mod hud;
mod input;
mod pitch;
mod simulation;

pub use actors::ActorsPlugin;
pub use audio::SoundPlugin;
pub use core::CorePlugin;
pub(crate) use core::UpdateSet;
pub use hud::HudPlugin;
pub use input::InputPlugin;
pub use pitch::PitchPlugin;
pub use simulation::SimulationPlugin;
