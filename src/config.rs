use std::path::{Path, PathBuf};

use log::warn;

use crate::ai::Difficulty;
use crate::error::ConfigError;

/// Longest pause allowed before the computer plays.
const MAX_AI_DELAY_MS: u64 = 10_000;

/// Game session settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Starting difficulty, 1..=5.
    pub difficulty: u8,
    /// Whether the human moves first in every new game.
    pub human_starts: bool,
    /// Pause before the computer's move, in milliseconds.
    pub ai_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            difficulty: 1,
            human_starts: true,
            ai_delay_ms: 500,
        }
    }
}

impl GameConfig {
    /// The configured difficulty. Call [`AppConfig::validate`] first.
    pub fn difficulty(&self) -> Result<Difficulty, ConfigError> {
        Difficulty::try_from(self.difficulty).map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Write log output to this file instead of stderr.
    pub file: Option<PathBuf>,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub log: LogConfig,
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
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=5).contains(&self.game.difficulty) {
            return Err(ConfigError::Validation(
                "game.difficulty must be in 1..=5".into(),
            ));
        }
        if self.game.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "game.ai_delay_ms must be <= {MAX_AI_DELAY_MS}"
            )));
        }
        if self
            .log
            .file
            .as_ref()
            .is_some_and(|file| file.as_os_str().is_empty())
        {
            return Err(ConfigError::Validation(
                "log.file must not be empty".into(),
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
