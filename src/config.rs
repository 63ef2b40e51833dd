//! Engine configuration loaded from TOML.

use crate::games::mill::{GeneratorConfig, OpponentMode, SearchConfig};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Tunables for board generation, search, and the default opponent.
///
/// Every key is optional; missing keys take the defaults.
///
/// ```toml
/// opponent = "ai"
///
/// [search]
/// depth = 2
///
/// [generator]
/// max_attempts = 100
/// horizon = 3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct MillConfig {
    /// Who plays White in a new game.
    #[serde(default)]
    opponent: OpponentMode,

    /// Automated opponent search settings.
    #[serde(default)]
    search: SearchConfig,

    /// Starting board generation settings.
    #[serde(default)]
    generator: GeneratorConfig,
}

impl MillConfig {
    /// Creates a configuration from its parts.
    pub fn new(opponent: OpponentMode, search: SearchConfig, generator: GeneratorConfig) -> Self {
        Self {
            opponent,
            search,
            generator,
        }
    }

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
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns a copy with a different default opponent.
    pub fn with_opponent(mut self, opponent: OpponentMode) -> Self {
        self.opponent = opponent;
        self
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
