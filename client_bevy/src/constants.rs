//! Render-only dimensions and colours. Gameplay numbers live in
//! `soccer_shared::rules`.

pub const PLAYER_RADIUS: f32 = 1.0;
/// Length of the capsule's cylindrical middle.
pub const PLAYER_LENGTH: f32 = 2.0;
pub const BALL_RADIUS: f32 = 1.0;

/// Goal frame: depth along x, height, mouth width along z.
pub const GOAL_DEPTH: f32 = 2.0;
pub const GOAL_HEIGHT: f32 = 4.0;
pub const GOAL_WIDTH: f32 = 10.0;

pub const SUN_POSITION: [f32; 3] = [50.0, 100.0, 50.0];
pub const SUN_ILLUMINANCE: f32 = 12_000.0;
pub const AMBIENT_BRIGHTNESS: f32 = 400.0;

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const SKY: u32 = 0x87ceeb;
    pub const GRASS: u32 = 0x3f9b3a;
    pub const PLAYER1: u32 = 0x0066ff;
    pub const PLAYER2: u32 = 0xff3333;
    pub const BALL: u32 = 0xffffff;
    pub const GOAL: u32 = 0xffffff;
    pub const HUD_TEXT: u32 = 0xffffff;
}

pub fn color_from_hex(rgb: u32) -> bevy::prelude::Color {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    bevy::prelude::Color::srgb(r, g, b)
}

pub fn player_color(id: soccer_shared::entities::PlayerId) -> u32 {
    match id {
        soccer_shared::entities::PlayerId::One => Colors::PLAYER1,
        soccer_shared::entities::PlayerId::Two => Colors::PLAYER2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soccer_shared::entities::PlayerId;

    #[test]
    fn color_from_hex_parses_correctly() {
        let c = color_from_hex(0xFF8040);
        // Color::srgb returns Srgba, check the components
        if let bevy::prelude::Color::Srgba(srgba) = c {
            assert!((srgba.red - 1.0).abs() < 1e-3);
            assert!((srgba.green - 0.502).abs() < 1e-2);
            assert!((srgba.blue - 0.251).abs() < 1e-2);
        } else {
            panic!("Expected Srgba color variant");
        }
    }

    #[test]
    fn players_wear_different_kits() {
        assert_ne!(player_color(PlayerId::One), player_color(PlayerId::Two));
    }

    #[test]
    fn goal_frame_matches_scoring_mouth() {
        assert_eq!(GOAL_WIDTH * 0.5, soccer_shared::rules::GOAL_HALF_WIDTH);
    }
}
