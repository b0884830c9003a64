use crate::camera::CameraPose;
use crate::entities::PlayerId;
use crate::input::{Controls, InputTracker};
use crate::ports::{Renderer, ScoreDisplay, SoundPlayer};
use crate::rules::{KICK_FACTOR, KICK_RADIUS, MOVE_SPEED};
use crate::state::GameState;
use crate::vec3::distance;

/// Summary of one tick, for host-side logging and effects.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    /// Tick number this outcome belongs to (1 for the first tick).
    pub tick: u64,
    /// Players whose kick landed, in evaluation order.
    pub kicks: Vec<PlayerId>,
    pub goal: Option<PlayerId>,
}

/// Run one frame of the game: move, kick, roll, score, aim the camera, draw.
/// Scheduling the next frame is the host's job.
pub fn tick<R, D, S>(
    state: &mut GameState,
    input: &InputTracker,
    renderer: &mut R,
    display: &mut D,
    sound: &mut S,
) -> TickOutcome
where
    R: Renderer,
    D: ScoreDisplay,
    S: SoundPlayer,
{
    state.tick += 1;
    let mut outcome = TickOutcome {
        tick: state.tick,
        ..Default::default()
    };

    move_players(state, input);
    outcome.kicks = resolve_kicks(state, input, sound);
    state.ball.integrate();
    outcome.goal = detect_goal(state, display);

    state.camera = CameraPose::TOP_DOWN;
    renderer.draw(&state.scene());

    outcome
}

pub fn move_players(state: &mut GameState, input: &InputTracker) {
    for id in PlayerId::ALL {
        let player = state.player_mut(id);
        for (dx, dz) in Controls::for_player(id).steps(input, MOVE_SPEED) {
            player.step(dx, dz);
        }
    }
}

/// Players are evaluated in order; when both reach the ball in the same tick
/// the later kick replaces the earlier one.
pub fn resolve_kicks(
    state: &mut GameState,
    input: &InputTracker,
    sound: &mut impl SoundPlayer,
) -> Vec<PlayerId> {
    let mut kicks = Vec::new();
    for id in PlayerId::ALL {
        if !Controls::for_player(id).kick_held(input) {
            continue;
        }
        let player = state.player(id).position;
        let ball = state.ball.position;
        if distance(player, ball) >= KICK_RADIUS {
            continue;
        }

        let vx = (ball.x - player.x) * KICK_FACTOR;
        let vz = (ball.z - player.z) * KICK_FACTOR;
        state.ball.set_planar_velocity(vx, vz);
        sound.play_kick();
        tracing::debug!(player = id.number(), vx, vz, "kick");
        kicks.push(id);
    }
    kicks
}

/// Checks each goal in turn against the live ball position. A goal resets
/// the ball to the centre spot, so the second check cannot also fire.
pub fn detect_goal(state: &mut GameState, display: &mut impl ScoreDisplay) -> Option<PlayerId> {
    let mut scored = None;
    for goal in state.goals {
        if !goal.contains(state.ball.position) {
            continue;
        }
        let scorer = goal.scorer();
        let value = state.score.on_goal(scorer, display);
        tracing::info!(
            scorer = scorer.number(),
            score = value,
            player1 = state.score.get(PlayerId::One),
            player2 = state.score.get(PlayerId::Two),
            "goal"
        );
        state.reset_positions();
        scored = Some(scorer);
    }
    scored
}
