//! Engine configuration.

use crate::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Naming conventions the engine uses when writing audit entries.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Actor recorded for resets and contained faults.
    #[serde(default = "default_system_actor")]
    system_actor: String,

    /// Prefix for move actors; the mark is appended (`playerX`).
    #[serde(default = "default_player_actor_prefix")]
    player_actor_prefix: String,

    /// Reason recorded when a reset gives none.
    #[serde(default = "default_reset_reason")]
    default_reset_reason: String,
}

fn default_system_actor() -> String {
    "system".to_string()
}

fn default_player_actor_prefix() -> String {
    "player".to_string()
}

fn default_reset_reason() -> String {
    "reset".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            system_actor: default_system_actor(),
            player_actor_prefix: default_player_actor_prefix(),
            default_reset_reason: default_reset_reason(),
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with explicit values.
    pub fn new(
        system_actor: impl Into<String>,
        player_actor_prefix: impl Into<String>,
        default_reset_reason: impl Into<String>,
    ) -> Self {
        Self {
            system_actor: system_actor.into(),
            player_actor_prefix: player_actor_prefix.into(),
            default_reset_reason: default_reset_reason.into(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(system_actor = %config.system_actor, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML document. Missing keys take defaults.
    #[track_caller]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Renders the configuration as TOML.
    #[track_caller]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }

    /// Actor id recorded for a move by `player`.
    pub fn player_actor(&self, player: Player) -> String {
        format!("{}{}", self.player_actor_prefix, player)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_records_caller_location() {
        let line = line!() + 1;
        let err = ConfigError::new("bad key");
        assert_eq!(err.file, file!());
        assert_eq!(err.line, line);
        assert!(err.to_string().starts_with("Config error: bad key at "));
    }

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.system_actor(), "system");
        assert_eq!(config.default_reset_reason(), "reset");
        assert_eq!(config.player_actor(Player::X), "playerX");
        assert_eq!(config.player_actor(Player::O), "playerO");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = EngineConfig::from_toml(r#"system_actor = "admin""#).unwrap();
        assert_eq!(config.system_actor(), "admin");
        assert_eq!(config.player_actor_prefix(), "player");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            EngineConfig::from_toml("").unwrap(),
            EngineConfig::default()
        );
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = EngineConfig::from_toml("system_actor = [").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::new("ops", "seat-", "new round");
        let text = config.to_toml().unwrap();
        assert_eq!(EngineConfig::from_toml(&text).unwrap(), config);
    }
}
