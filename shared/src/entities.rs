use crate::rules::{
    BALL_FRICTION, BALL_SPAWN, GOAL_HALF_WIDTH, GOAL_LINE_X, PLAYER1_SPAWN, PLAYER2_SPAWN,
};
use crate::vec3::{add, scale, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Evaluation order inside a tick.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// 1 or 2, as shown to humans.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn spawn(self) -> Vec3 {
        match self {
            PlayerId::One => PLAYER1_SPAWN,
            PlayerId::Two => PLAYER2_SPAWN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub position: Vec3,
}

impl Player {
    pub fn spawn(id: PlayerId) -> Self {
        Self {
            id,
            position: id.spawn(),
        }
    }

    /// Shift along the pitch plane; height is left alone.
    pub fn step(&mut self, dx: f32, dz: f32) {
        self.position.x += dx;
        self.position.z += dz;
    }

    pub fn reset(&mut self) {
        self.position = self.id.spawn();
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            position: BALL_SPAWN,
            velocity: Vec3::ZERO,
        }
    }
}

impl Ball {
    /// Replace the horizontal velocity. The vertical component stays zero.
    pub fn set_planar_velocity(&mut self, vx: f32, vz: f32) {
        self.velocity.x = vx;
        self.velocity.z = vz;
    }

    /// One Euler step with unit timestep, then friction. Decay comes after
    /// the move, so a fresh kick travels its full velocity on the first tick.
    pub fn integrate(&mut self) {
        self.position = add(self.position, self.velocity);
        self.velocity = scale(self.velocity, BALL_FRICTION);
    }

    pub fn reset(&mut self) {
        self.position.set(BALL_SPAWN.x, BALL_SPAWN.y, BALL_SPAWN.z);
        self.velocity.set(0.0, 0.0, 0.0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalSide {
    Left,
    Right,
}

/// Scoring volume behind one goal line. Never collides with anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    pub side: GoalSide,
    /// Distance of the goal line from the centre spot along x.
    pub line_x: f32,
    /// Half the width of the mouth along z.
    pub half_width: f32,
}

impl Goal {
    pub const LEFT: Goal = Goal {
        side: GoalSide::Left,
        line_x: GOAL_LINE_X,
        half_width: GOAL_HALF_WIDTH,
    };

    pub const RIGHT: Goal = Goal {
        side: GoalSide::Right,
        line_x: GOAL_LINE_X,
        half_width: GOAL_HALF_WIDTH,
    };

    /// Signed x of the goal line.
    pub fn center_x(&self) -> f32 {
        match self.side {
            GoalSide::Left => -self.line_x,
            GoalSide::Right => self.line_x,
        }
    }

    pub fn contains(&self, p: Vec3) -> bool {
        let past_line = match self.side {
            GoalSide::Left => p.x < -self.line_x,
            GoalSide::Right => p.x > self.line_x,
        };
        past_line && p.z.abs() < self.half_width
    }

    /// The player credited when the ball ends up in this goal.
    pub fn scorer(&self) -> PlayerId {
        match self.side {
            GoalSide::Left => PlayerId::Two,
            GoalSide::Right => PlayerId::One,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::vec3;

    #[test]
    fn player_numbers_follow_index() {
        assert_eq!(PlayerId::One.number(), 1);
        assert_eq!(PlayerId::Two.number(), 2);
        assert_eq!(PlayerId::ALL.map(PlayerId::index), [0, 1]);
    }

    #[test]
    fn player_step_keeps_height() {
        let mut p = Player::spawn(PlayerId::One);
        p.step(0.6, -0.6);
        assert_eq!(p.position.y, 2.0);
        assert!((p.position.x + 9.4).abs() < 1e-5);
        assert!((p.position.z + 0.6).abs() < 1e-5);
    }

    #[test]
    fn ball_moves_before_decaying() {
        let mut ball = Ball::default();
        ball.set_planar_velocity(2.0, 0.0);
        ball.integrate();
        assert!((ball.position.x - 2.0).abs() < 1e-6);
        assert!((ball.velocity.x - 1.92).abs() < 1e-6);
        ball.integrate();
        assert!((ball.position.x - 3.92).abs() < 1e-5);
    }

    #[test]
    fn ball_reset_clears_velocity() {
        let mut ball = Ball {
            position: vec3(30.0, 1.0, -4.0),
            velocity: vec3(1.0, 0.0, 1.0),
        };
        ball.reset();
        assert_eq!(ball, Ball::default());
    }

    #[test]
    fn left_goal_credits_player_two() {
        assert_eq!(Goal::LEFT.scorer(), PlayerId::Two);
        assert_eq!(Goal::RIGHT.scorer(), PlayerId::One);
        assert_eq!(Goal::LEFT.center_x(), -48.0);
    }

    #[test]
    fn goal_region_is_strict() {
        assert!(Goal::LEFT.contains(vec3(-49.0, 1.0, 0.0)));
        assert!(!Goal::LEFT.contains(vec3(-48.0, 1.0, 0.0)));
        assert!(!Goal::LEFT.contains(vec3(-49.0, 1.0, 5.0)));
        assert!(!Goal::LEFT.contains(vec3(-49.0, 1.0, -6.0)));
        assert!(Goal::RIGHT.contains(vec3(48.5, 1.0, -4.9)));
        assert!(!Goal::RIGHT.contains(vec3(-49.0, 1.0, 0.0)));
    }
}
