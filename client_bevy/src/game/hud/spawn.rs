use bevy::prelude::*;
use soccer_shared::entities::PlayerId;

use crate::constants::{color_from_hex, player_color, Colors};

use super::types::{
    panel_bg, team_name, HudScoreText, NAME_FONT_SIZE, SCORE_FONT_SIZE, SCORE_SIDE, SCORE_TOP,
};

pub(super) fn spawn_hud(mut commands: Commands) {
    for player in PlayerId::ALL {
        let mut node = Node {
            position_type: PositionType::Absolute,
            top: Val::Px(SCORE_TOP),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        };
        match player {
            PlayerId::One => node.left = Val::Px(SCORE_SIDE),
            PlayerId::Two => node.right = Val::Px(SCORE_SIDE),
        }
        let kit = color_from_hex(player_color(player));

        commands
            .spawn((
                node,
                BackgroundColor(panel_bg(0.45)),
                BorderColor::all(kit),
                BorderRadius::all(Val::Px(6.0)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(team_name(player)),
                    TextFont::from_font_size(NAME_FONT_SIZE),
                    TextColor(kit),
                ));
                // Filled in by `seed_score_labels`.
                parent.spawn((
                    Text::default(),
                    TextFont::from_font_size(SCORE_FONT_SIZE),
                    TextColor(color_from_hex(Colors::HUD_TEXT)),
                    HudScoreText { player },
                ));
            });
    }
}
