use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use soccer_shared::entities::PlayerId;
use soccer_shared::ports::ScoreDisplay;

use crate::game::core::Session;

use super::types::HudScoreText;

type ScoreTextQuery<'w, 's> = Query<'w, 's, (&'static HudScoreText, &'static mut Text)>;

/// Score labels as seen by the game loop.
#[derive(SystemParam)]
pub(crate) struct ScoreLabels<'w, 's> {
    texts: ScoreTextQuery<'w, 's>,
}

impl ScoreDisplay for ScoreLabels<'_, '_> {
    fn set_score_text(&mut self, player: PlayerId, value: u32) {
        for (label, mut text) in &mut self.texts {
            if label.player == player {
                text.0 = value.to_string();
            }
        }
    }
}

/// Fill freshly spawned labels from the session score.
pub(super) fn seed_score_labels(session: Res<Session>, mut labels: ScoreLabels) {
    session.state.score.publish(&mut labels);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ignore;

    impl ScoreDisplay for Ignore {
        fn set_score_text(&mut self, _player: PlayerId, _value: u32) {}
    }

    fn make_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<Session>();
        app
    }

    fn spawn_labels(app: &mut App) -> [Entity; 2] {
        PlayerId::ALL.map(|player| {
            app.world_mut()
                .spawn((HudScoreText { player }, Text::new("-")))
                .id()
        })
    }

    fn label(app: &App, entity: Entity) -> &str {
        &app.world().get::<Text>(entity).unwrap().0
    }

    fn score_three_for_player_two(mut labels: ScoreLabels) {
        labels.set_score_text(PlayerId::Two, 3);
    }

    #[test]
    fn score_text_rewrites_only_that_player() {
        let mut app = make_test_app();
        app.add_systems(Update, score_three_for_player_two);
        let [one, two] = spawn_labels(&mut app);

        app.update();

        assert_eq!(label(&app, one), "-");
        assert_eq!(label(&app, two), "3");
    }

    #[test]
    fn labels_are_seeded_from_the_session_score() {
        let mut app = make_test_app();
        app.add_systems(Update, seed_score_labels);
        let [one, two] = spawn_labels(&mut app);
        {
            let mut session = app.world_mut().resource_mut::<Session>();
            session.state.score.on_goal(PlayerId::One, &mut Ignore);
        }

        app.update();

        assert_eq!(label(&app, one), "1");
        assert_eq!(label(&app, two), "0");
    }
}
