//! Game configuration for the terminal front end.

use connect_model::{BoardConfig, DEFAULT_SIDE};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How accepted moves are written to the output.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// A grid of `.`, `X` and `O` with row and column indices.
    #[default]
    Text,
    /// One JSON snapshot per line.
    Json,
}

/// Configuration loaded from a TOML file, with every key optional.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    #[serde(default = "default_side")]
    side: usize,

    /// Output format.
    #[serde(default)]
    output: OutputFormat,
}

#[instrument]
fn default_side() -> usize {
    DEFAULT_SIDE
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            side: default_side(),
            output: OutputFormat::default(),
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

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(side = config.side, output = %config.output, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of file or default values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, side: Option<usize>, output: Option<OutputFormat>) -> Self {
        if let Some(side) = side {
            self.side = side;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }

    /// Validates the board part of the configuration.
    #[instrument(skip(self), fields(side = self.side))]
    pub fn board_config(&self) -> Result<BoardConfig, ConfigError> {
        BoardConfig::new(self.side).map_err(|e| ConfigError::new(e.to_string()))
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

    #[test]
    fn test_default_board_is_five_by_five() {
        let config = GameConfig::default();
        assert_eq!(*config.side(), 5);
        assert_eq!(*config.output(), OutputFormat::Text);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: GameConfig = toml::from_str("output = \"json\"").unwrap();
        assert_eq!(*config.side(), DEFAULT_SIDE);
        assert_eq!(*config.output(), OutputFormat::Json);
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::default().with_overrides(Some(8), None);
        assert_eq!(*config.side(), 8);
        assert_eq!(*config.output(), OutputFormat::Text);
    }

    #[test]
    fn test_small_board_rejected() {
        let config = GameConfig::default().with_overrides(Some(3), None);
        let err = config.board_config().unwrap_err();
        assert!(err.message.contains("too small"), "{}", err);
    }

    #[test]
    fn test_oversized_board_rejected() {
        let config = GameConfig::default().with_overrides(Some(usize::MAX / 2), None);
        let err = config.board_config().unwrap_err();
        assert!(err.message.contains("too large"), "{}", err);
    }
}
