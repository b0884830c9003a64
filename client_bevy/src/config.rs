use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_FILTER: &str = "info,wgpu=error,naga=warn";

/// Host settings. Gameplay rules are fixed and live in `soccer_shared::rules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ClientConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    pub vsync: bool,
    /// Directional light casts shadows.
    pub shadows: bool,
    /// Kick effect, relative to the bevy asset folder. No sound file ships
    /// with the game, so kicks are silent unless one is configured.
    pub kick_sound_path: Option<String>,
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            window_title: "Top-Down Soccer".to_string(),
            window_width: 1280,
            window_height: 720,
            vsync: true,
            shadows: true,
            kick_sound_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err("window_width and window_height must be > 0".to_string());
        }
        if self.window_title.trim().is_empty() {
            return Err("window_title must not be empty".to_string());
        }
        if self
            .kick_sound_path
            .as_deref()
            .is_some_and(|path| path.trim().is_empty())
        {
            return Err("kick_sound_path must not be empty".to_string());
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid config: {e}"))
    }

    /// Apply overrides from an environment lookup. Bad values are reported
    /// back as warnings and skipped.
    pub fn apply_env<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        if let Some(filter) = lookup("SOCCER_LOG") {
            if filter.trim().is_empty() {
                warnings.push("SOCCER_LOG is empty, using default".to_string());
            } else {
                self.log_filter = filter;
            }
        }

        for (key, slot) in [
            ("SOCCER_WINDOW_WIDTH", &mut self.window_width),
            ("SOCCER_WINDOW_HEIGHT", &mut self.window_height),
        ] {
            let Some(raw) = lookup(key) else {
                continue;
            };
            match raw.parse::<u32>() {
                Ok(parsed) if parsed > 0 => *slot = parsed,
                _ => warnings.push(format!("Invalid {key} '{raw}', using default")),
            }
        }

        warnings
    }
}

/// Config file named by `SOCCER_CONFIG` (if any) plus environment overrides.
/// Problems are returned as warnings so they can be logged once logging is up.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_or_default() -> (ClientConfig, Vec<String>) {
    let mut warnings = Vec::new();
    let mut config = match std::env::var("SOCCER_CONFIG") {
        Ok(path) => match std::fs::read_to_string(&path) {
            Ok(text) => ClientConfig::from_json(&text).unwrap_or_else(|e| {
                warnings.push(format!("{path}: {e}, using defaults"));
                ClientConfig::default()
            }),
            Err(e) => {
                warnings.push(format!("cannot read {path}: {e}, using defaults"));
                ClientConfig::default()
            }
        },
        Err(_) => ClientConfig::default(),
    };
    warnings.extend(config.apply_env(|key| std::env::var(key).ok()));
    (config, warnings)
}

#[cfg(target_arch = "wasm32")]
pub fn load_or_default() -> (ClientConfig, Vec<String>) {
    (ClientConfig::default(), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_config_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_window_size_invalid() {
        let mut config = ClientConfig::default();
        config.window_height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_sound_path_invalid() {
        let mut config = ClientConfig::default();
        config.kick_sound_path = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn kick_sound_is_off_by_default() {
        assert_eq!(ClientConfig::default().kick_sound_path, None);
    }

    #[test]
    fn kick_sound_path_from_json() {
        let config = ClientConfig::from_json(r#"{"kickSoundPath": "sounds/kick.ogg"}"#).unwrap();
        assert_eq!(config.kick_sound_path.as_deref(), Some("sounds/kick.ogg"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ClientConfig::from_json(r#"{"windowWidth": 800, "shadows": false}"#).unwrap();
        assert_eq!(config.window_width, 800);
        assert!(!config.shadows);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.kick_sound_path, None);
    }

    #[test]
    fn unknown_json_field_rejected() {
        let err = ClientConfig::from_json(r#"{"moveSpeed": 2.0}"#).unwrap_err();
        assert!(err.starts_with("invalid config"));
    }

    #[test]
    fn env_overrides_apply_and_warn() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SOCCER_LOG", "debug"),
            ("SOCCER_WINDOW_WIDTH", "1024"),
            ("SOCCER_WINDOW_HEIGHT", "tall"),
        ]);
        let mut config = ClientConfig::default();
        let warnings = config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 720);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("SOCCER_WINDOW_HEIGHT"));
    }

    #[test]
    fn zero_window_override_ignored() {
        let mut config = ClientConfig::default();
        let warnings = config.apply_env(|key| (key == "SOCCER_WINDOW_WIDTH").then(|| "0".to_string()));
        assert_eq!(config.window_width, 1280);
        assert_eq!(warnings.len(), 1);
    }
}
