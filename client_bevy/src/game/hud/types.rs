use bevy::prelude::*;
use soccer_shared::entities::PlayerId;

pub(super) const SCORE_TOP: f32 = 16.0;
pub(super) const SCORE_SIDE: f32 = 24.0;
pub(super) const SCORE_FONT_SIZE: f32 = 32.0;
pub(super) const NAME_FONT_SIZE: f32 = 14.0;

/// Number label showing one player's goals.
#[derive(Component)]
pub(crate) struct HudScoreText {
    pub(crate) player: PlayerId,
}

pub(super) fn team_name(player: PlayerId) -> &'static str {
    match player {
        PlayerId::One => "BLUE",
        PlayerId::Two => "RED",
    }
}

pub(super) fn panel_bg(alpha: f32) -> Color {
    Color::srgba(0.0, 0.0, 0.0, alpha)
}
