//! Runtime configuration shared by the CLI and the command session.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating a [`LifeConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Simulation and display settings.
///
/// `width` and `height` bound only the starting rectangle used for random
/// seeding and the initial viewport; the simulation itself is unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub width: u32,
    pub height: u32,
    /// Fraction of the starting rectangle made alive by random seeding.
    pub fill_ratio: f64,
    pub seed: u64,
    pub alive_glyph: char,
    pub dead_glyph: char,
    /// Pause between frames when animating several generations.
    pub frame_delay_ms: u64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 30,
            fill_ratio: 1.0 / 3.0,
            seed: 0,
            alive_glyph: '#',
            dead_glyph: '-',
            frame_delay_ms: 200,
        }
    }
}

impl LifeConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "starting rectangle must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !(0.0..=1.0).contains(&self.fill_ratio) {
            return Err(ConfigError::Invalid(format!(
                "fill_ratio must be within [0, 1], got {}",
                self.fill_ratio
            )));
        }
        if self.alive_glyph == self.dead_glyph {
            return Err(ConfigError::Invalid(
                "alive and dead glyphs must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of cells in the starting rectangle.
    pub fn capacity(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Number of live cells random seeding should place.
    pub fn initial_count(&self) -> usize {
        let count = (self.capacity() as f64 * self.fill_ratio).floor() as u64;
        usize::try_from(count.min(self.capacity())).unwrap_or(usize::MAX)
    }
}
