//! Session configuration.

use crate::games::tictactoe::{HeuristicOpponent, Side};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for a game session.
///
/// Every field has a default, so an empty TOML file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Side that opens every game.
    #[serde(default = "default_first_side")]
    first_side: Side,

    /// Side played by the heuristic opponent.
    #[serde(default = "default_opponent_side")]
    opponent_side: Side,

    /// Pause before the opponent replies, in milliseconds.
    #[serde(default = "default_opponent_delay_ms")]
    opponent_delay_ms: u64,

    /// Seed for the opponent's random choices; OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_first_side() -> Side {
    Side::First
}

fn default_opponent_side() -> Side {
    Side::Second
}

fn default_opponent_delay_ms() -> u64 {
    1000
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_side: default_first_side(),
            opponent_side: default_opponent_side(),
            opponent_delay_ms: default_opponent_delay_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Side played by the human.
    pub fn human_side(&self) -> Side {
        self.opponent_side.opponent()
    }

    /// Pause before the opponent replies.
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    /// Builds the heuristic opponent described by this configuration.
    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn opponent(&self) -> HeuristicOpponent {
        match self.seed {
            Some(seed) => HeuristicOpponent::seeded(seed),
            None => HeuristicOpponent::from_entropy(),
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.human_side(), Side::First);
        assert_eq!(config.opponent_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::from_toml(
            r#"
            first_side = "second"
            opponent_side = "first"
            opponent_delay_ms = 0
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(*config.first_side(), Side::Second);
        assert_eq!(config.human_side(), Side::Second);
        assert_eq!(*config.seed(), Some(42));
        assert!(config.opponent_delay().is_zero());
    }

    #[test]
    fn test_bad_side_is_error() {
        let err = GameConfig::from_toml(r#"first_side = "third""#).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "opponent_delay_ms = 250").unwrap();
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.opponent_delay_ms(), 250);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = GameConfig::from_file("/nonexistent/strictly_noughts.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_setters() {
        let config = GameConfig::default().with_seed(Some(7)).with_opponent_delay_ms(0);
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(*config.opponent_delay_ms(), 0);
    }
}
