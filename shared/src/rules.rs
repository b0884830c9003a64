//! Gameplay constants. All distances are world units, all rates are per tick.

use crate::vec3::Vec3;

/// Distance a player moves per held direction key per tick.
pub const MOVE_SPEED: f32 = 0.6;

/// A kick only lands when the player is strictly closer than this to the ball.
pub const KICK_RADIUS: f32 = 3.0;

/// Ball velocity after a kick is the player-to-ball offset times this.
pub const KICK_FACTOR: f32 = 0.5;

/// Multiplicative velocity decay applied after each integration step.
pub const BALL_FRICTION: f32 = 0.96;

/// Goal mouths sit beyond |x| > GOAL_LINE_X.
pub const GOAL_LINE_X: f32 = 48.0;

/// Goal mouths span |z| < GOAL_HALF_WIDTH.
pub const GOAL_HALF_WIDTH: f32 = 5.0;

pub const PLAYER_HEIGHT: f32 = 2.0;
pub const BALL_HEIGHT: f32 = 1.0;

pub const PLAYER1_SPAWN: Vec3 = Vec3::new(-10.0, PLAYER_HEIGHT, 0.0);
pub const PLAYER2_SPAWN: Vec3 = Vec3::new(10.0, PLAYER_HEIGHT, 0.0);
pub const BALL_SPAWN: Vec3 = Vec3::new(0.0, BALL_HEIGHT, 0.0);

/// Pitch extent along x.
pub const FIELD_WIDTH: f32 = 100.0;
/// Pitch extent along z.
pub const FIELD_DEPTH: f32 = 60.0;
