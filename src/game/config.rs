use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::error::GameError;
use super::grid::Board;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of board rows
    pub rows: usize,
    /// Number of board columns
    pub columns: usize,
    /// Interval between ticks, in milliseconds. Read by the host scheduler,
    /// never by the engine itself.
    pub tick_interval_ms: u64,
    /// Whether running into the chain's own body ends the game
    pub self_collision_fatal: bool,
    /// Seed for item placement; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
            tick_interval_ms: 200,
            self_collision_fatal: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom board size
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(5, 5)
    }

    /// Create a large board
    pub fn large() -> Self {
        Self::new(30, 30)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_self_collision(mut self, fatal: bool) -> Self {
        self.self_collision_fatal = fatal;
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), GameError> {
        Self::validate_dimension("rows", self.rows)?;
        Self::validate_dimension("columns", self.columns)?;
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidConfiguration(
                "tick_interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_dimension(name: &str, value: usize) -> Result<(), GameError> {
        if value == 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "{name} must be at least 1"
            )));
        }
        // One step past the far edge must still be representable
        if value >= i32::MAX as usize {
            return Err(GameError::InvalidConfiguration(format!(
                "{name} = {value} exceeds the coordinate range"
            )));
        }
        Ok(())
    }

    /// Board described by this configuration
    pub fn board(&self) -> Result<Board, GameError> {
        self.validate()?;
        // Both dimensions fit in i32 once validated.
        Ok(Board::new(self.rows as i32, self.columns as i32))
    }

    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Failed to parse game config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid config in {}", path.display()))
    }
}
