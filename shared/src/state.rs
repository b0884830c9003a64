use crate::camera::CameraPose;
use crate::entities::{Ball, Goal, Player, PlayerId};
use crate::rules::{FIELD_DEPTH, FIELD_WIDTH};
use crate::score::Score;

/// Everything the game loop mutates. Owned by the host, borrowed per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub players: [Player; 2],
    pub ball: Ball,
    pub goals: [Goal; 2],
    pub score: Score,
    pub camera: CameraPose,
    /// Ticks run since the session started.
    pub tick: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            players: PlayerId::ALL.map(Player::spawn),
            ball: Ball::default(),
            goals: [Goal::LEFT, Goal::RIGHT],
            score: Score::default(),
            camera: CameraPose::TOP_DOWN,
            tick: 0,
        }
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Kick-off positions. Score, input and tick count are untouched.
    pub fn reset_positions(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.ball.reset();
        tracing::debug!(tick = self.tick, "positions reset");
    }

    pub fn scene(&self) -> SceneView<'_> {
        SceneView {
            players: &self.players,
            ball: &self.ball,
            goals: &self.goals,
            field: Field::STANDARD,
            camera: self.camera,
        }
    }
}

/// Render-only pitch extent, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub depth: f32,
}

impl Field {
    pub const STANDARD: Field = Field {
        width: FIELD_WIDTH,
        depth: FIELD_DEPTH,
    };
}

/// What a renderer gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub players: &'a [Player; 2],
    pub ball: &'a Ball,
    pub goals: &'a [Goal; 2],
    pub field: Field,
    pub camera: CameraPose,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::vec3;

    #[test]
    fn new_state_is_at_kickoff() {
        let state = GameState::new();
        assert_eq!(state.player(PlayerId::One).position, vec3(-10.0, 2.0, 0.0));
        assert_eq!(state.player(PlayerId::Two).position, vec3(10.0, 2.0, 0.0));
        assert_eq!(state.ball.position, vec3(0.0, 1.0, 0.0));
        assert_eq!(state.ball.velocity, vec3(0.0, 0.0, 0.0));
    }

    #[test]
    fn reset_positions_is_idempotent() {
        let mut state = GameState::new();
        state.player_mut(PlayerId::One).step(5.0, 3.0);
        state.player_mut(PlayerId::Two).step(-7.0, 1.0);
        state.ball.position = vec3(20.0, 1.0, 8.0);
        state.ball.set_planar_velocity(1.0, -1.0);

        state.reset_positions();
        let once = state.clone();
        state.reset_positions();
        assert_eq!(state, once);
        assert_eq!(state.players, GameState::new().players);
        assert_eq!(state.ball, GameState::new().ball);
    }

    #[test]
    fn reset_keeps_the_score() {
        let mut state = GameState::new();
        struct Sink;
        impl crate::ports::ScoreDisplay for Sink {
            fn set_score_text(&mut self, _: PlayerId, _: u32) {}
        }
        state.score.on_goal(PlayerId::One, &mut Sink);
        state.reset_positions();
        assert_eq!(state.score.get(PlayerId::One), 1);
    }

    #[test]
    fn scene_exposes_current_positions() {
        let mut state = GameState::new();
        state.ball.position = vec3(3.0, 1.0, -2.0);
        let scene = state.scene();
        assert_eq!(scene.ball.position, vec3(3.0, 1.0, -2.0));
        assert_eq!(scene.field.width, 100.0);
        assert_eq!(scene.field.depth, 60.0);
        assert_eq!(scene.goals[0].center_x(), -48.0);
    }
}
