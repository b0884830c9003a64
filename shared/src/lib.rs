//! Engine-agnostic core of the top-down soccer game.
//!
//! Everything here is plain data plus the per-frame update. Hosts own a
//! [`state::GameState`] and an [`input::InputTracker`], feed key events into
//! the tracker, and call [`game_loop::tick`] once per displayed frame with
//! their own [`ports`] implementations.

pub mod camera;
pub mod entities;
pub mod game_loop;
pub mod input;
pub mod ports;
pub mod rules;
pub mod score;
pub mod state;
pub mod vec3;
