use std::collections::HashMap;

use crate::entities::PlayerId;

/// Which keys are currently held, keyed by lower-cased key name.
///
/// Entries appear on the first event for a key and flip back to `false` on
/// release. Keys nobody has touched read as released.
#[derive(Debug, Default, Clone)]
pub struct InputTracker {
    keys: HashMap<String, bool>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key(&mut self, name: &str, pressed: bool) {
        if name.is_empty() {
            return;
        }
        self.keys.insert(name.to_lowercase(), pressed);
    }

    pub fn is_pressed(&self, name: &str) -> bool {
        if name.bytes().any(|b| b.is_ascii_uppercase()) || !name.is_ascii() {
            return self.keys.get(&name.to_lowercase()).copied().unwrap_or(false);
        }
        self.keys.get(name).copied().unwrap_or(false)
    }

    pub fn on_key_down(&mut self, name: &str) {
        self.set_key(name, true);
    }

    pub fn on_key_up(&mut self, name: &str) {
        self.set_key(name, false);
    }

    /// Number of keys seen so far, held or not.
    pub fn known_keys(&self) -> usize {
        self.keys.len()
    }
}

/// Key names bound to one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Toward -z.
    pub up: &'static str,
    /// Toward +z.
    pub down: &'static str,
    /// Toward -x.
    pub left: &'static str,
    /// Toward +x.
    pub right: &'static str,
    pub kick: &'static str,
}

impl Controls {
    pub const PLAYER1: Controls = Controls {
        up: "w",
        down: "s",
        left: "a",
        right: "d",
        kick: "k",
    };

    pub const PLAYER2: Controls = Controls {
        up: "arrowup",
        down: "arrowdown",
        left: "arrowleft",
        right: "arrowright",
        kick: "x",
    };

    pub fn for_player(id: PlayerId) -> Controls {
        match id {
            PlayerId::One => Self::PLAYER1,
            PlayerId::Two => Self::PLAYER2,
        }
    }

    /// Per-tick (dx, dz) steps for the held direction keys, in up, down,
    /// left, right order. Each step is applied on its own, so diagonals are
    /// faster than straight runs and opposite keys cancel.
    pub fn steps<'a>(
        &self,
        input: &'a InputTracker,
        speed: f32,
    ) -> impl Iterator<Item = (f32, f32)> + 'a {
        [
            (self.up, (0.0, -speed)),
            (self.down, (0.0, speed)),
            (self.left, (-speed, 0.0)),
            (self.right, (speed, 0.0)),
        ]
        .into_iter()
        .filter(move |(key, _)| input.is_pressed(key))
        .map(|(_, step)| step)
    }

    pub fn kick_held(&self, input: &InputTracker) -> bool {
        input.is_pressed(self.kick)
    }

    pub fn keys(&self) -> [&'static str; 5] {
        [self.up, self.down, self.left, self.right, self.kick]
    }
}
