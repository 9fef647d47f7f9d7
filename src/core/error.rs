//! Error types for boundary validation.
//!
//! The move/spawn/detect operations are total over well-formed grids and
//! never fail. Errors only arise where outside data enters the crate:
//! configuration and hand-built grids.

/// Errors returned when constructing configs, grids and sessions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse config: {0}")]
    ConfigParse(String),

    #[error("grid has no rows")]
    EmptyGrid,

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("tile exponent {exponent} at ({row}, {col}) exceeds ceiling {max}")]
    TileOverflow {
        row: usize,
        col: usize,
        exponent: u8,
        max: u8,
    },
}

impl From<toml::de::Error> for GameError {
    fn from(err: toml::de::Error) -> Self {
        GameError::ConfigParse(err.to_string())
    }
}
