//! Game configuration.
//!
//! `GameConfig` fixes the board size, the spawn odds and the tile ceiling
//! for a session. Hosts build it in code with the `with_*` methods or load
//! it from TOML:
//!
//! ```
//! use rust_2048::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str("size = 5\nfour_probability = 0.2").unwrap();
//! assert_eq!(config.size, 5);
//! assert_eq!(config.max_exponent, 20);
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::scheme::ColorScheme;

/// Default board edge length.
pub const DEFAULT_SIZE: usize = 4;

/// Largest supported board edge length.
pub const MAX_SIZE: usize = 16;

/// Default probability that a spawned tile is a 4 rather than a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Default tile ceiling as an exponent: 2^20 = 1,048,576.
pub const DEFAULT_MAX_EXPONENT: u8 = 20;

/// Largest ceiling whose face value still fits a `u32`.
pub const MAX_EXPONENT_LIMIT: u8 = 31;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board edge length (N for an NxN grid).
    pub size: usize,

    /// Probability in `[0, 1]` that a spawn produces a 4.
    pub four_probability: f64,

    /// Highest tile exponent. Tiles at the ceiling never merge.
    pub max_exponent: u8,

    /// Initial display scheme handed to renderers.
    pub scheme: ColorScheme,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            max_exponent: DEFAULT_MAX_EXPONENT,
            scheme: ColorScheme::default(),
        }
    }
}

impl GameConfig {
    /// Classic 4x4 configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board edge length.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Set the tile ceiling exponent.
    #[must_use]
    pub fn with_max_exponent(mut self, max_exponent: u8) -> Self {
        self.max_exponent = max_exponent;
        self
    }

    /// Set the initial display scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, GameError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.size < 2 {
            return Err(GameError::InvalidConfig("size must be at least 2".into()));
        }
        if self.size > MAX_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "size must be at most {MAX_SIZE}"
            )));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(GameError::InvalidConfig(
                "four_probability must be in [0, 1]".into(),
            ));
        }
        if !(2..=MAX_EXPONENT_LIMIT).contains(&self.max_exponent) {
            return Err(GameError::InvalidConfig(format!(
                "max_exponent must be in [2, {MAX_EXPONENT_LIMIT}]"
            )));
        }
        Ok(())
    }
}
