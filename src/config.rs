use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::game::{GameSettings, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Largest board edge that still fits a terminal.
pub const MAX_BOARD_EDGE: usize = 20;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Tell the player the game is over when they keep dropping pieces after it ended.
    pub notify_on_post_game_input: bool,
    pub end_notice_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            notify_on_post_game_input: false,
            end_notice_delay_ms: 800,
        }
    }
}

impl GameConfig {
    pub fn settings(&self) -> GameSettings {
        GameSettings {
            width: self.width,
            height: self.height,
            notify_on_post_game_input: self.notify_on_post_game_input,
            end_notice_delay: Duration::from_millis(self.end_notice_delay_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for a key press before redrawing.
    pub poll_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.width == 0 || self.game.width > MAX_BOARD_EDGE {
            return Err(ConfigError::Validation(format!(
                "game.width must be in 1..={MAX_BOARD_EDGE}"
            )));
        }
        if self.game.height == 0 || self.game.height > MAX_BOARD_EDGE {
            return Err(ConfigError::Validation(format!(
                "game.height must be in 1..={MAX_BOARD_EDGE}"
            )));
        }
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
