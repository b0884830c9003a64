use serde::{Deserialize, Serialize};

use crate::entities::PlayerId;
use crate::ports::ScoreDisplay;

/// Goals per player for the current session. Counters only ever go up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    player1: u32,
    player2: u32,
}

impl Score {
    pub fn get(&self, player: PlayerId) -> u32 {
        match player {
            PlayerId::One => self.player1,
            PlayerId::Two => self.player2,
        }
    }

    /// Credit a goal and push the new tally to the display.
    pub fn on_goal(&mut self, scorer: PlayerId, display: &mut impl ScoreDisplay) -> u32 {
        let counter = match scorer {
            PlayerId::One => &mut self.player1,
            PlayerId::Two => &mut self.player2,
        };
        *counter = counter.saturating_add(1);
        let value = *counter;
        display.set_score_text(scorer, value);
        value
    }

    /// Push both counters, e.g. to initialise freshly spawned labels.
    pub fn publish(&self, display: &mut impl ScoreDisplay) {
        for player in PlayerId::ALL {
            display.set_score_text(player, self.get(player));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Labels {
        writes: Vec<(PlayerId, u32)>,
    }

    impl ScoreDisplay for Labels {
        fn set_score_text(&mut self, player: PlayerId, value: u32) {
            self.writes.push((player, value));
        }
    }

    #[test]
    fn new_session_starts_at_zero() {
        let score = Score::default();
        assert_eq!(score.get(PlayerId::One), 0);
        assert_eq!(score.get(PlayerId::Two), 0);
    }

    #[test]
    fn goal_increments_only_the_scorer() {
        let mut score = Score::default();
        let mut labels = Labels::default();
        assert_eq!(score.on_goal(PlayerId::Two, &mut labels), 1);
        assert_eq!(score.on_goal(PlayerId::Two, &mut labels), 2);
        assert_eq!(score.get(PlayerId::One), 0);
        assert_eq!(labels.writes, vec![(PlayerId::Two, 1), (PlayerId::Two, 2)]);
    }

    #[test]
    fn counter_saturates_instead_of_wrapping() {
        let mut score = Score {
            player1: u32::MAX,
            player2: 0,
        };
        let mut labels = Labels::default();
        assert_eq!(score.on_goal(PlayerId::One, &mut labels), u32::MAX);
    }

    #[test]
    fn publish_writes_both_labels() {
        let mut score = Score::default();
        let mut labels = Labels::default();
        score.on_goal(PlayerId::One, &mut labels);
        labels.writes.clear();
        score.publish(&mut labels);
        assert_eq!(labels.writes, vec![(PlayerId::One, 1), (PlayerId::Two, 0)]);
    }
}
