//! Capabilities the game loop needs from its host.
//!
//! None of these can fail from the loop's point of view: a host that cannot
//! draw, print or play a sound swallows the problem itself.

use crate::entities::PlayerId;
use crate::state::SceneView;

pub trait Renderer {
    fn draw(&mut self, scene: &SceneView<'_>);
}

pub trait ScoreDisplay {
    fn set_score_text(&mut self, player: PlayerId, value: u32);
}

pub trait SoundPlayer {
    /// Fire and forget. A kick while the previous one is still audible
    /// restarts the effect from the beginning.
    fn play_kick(&mut self);
}
