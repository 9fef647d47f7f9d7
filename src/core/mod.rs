//! Core types: grid, configuration, errors, RNG, colour scheme.
//!
//! Everything the move rules operate on lives here. The rules themselves
//! are in `crate::rules`.

pub mod config;
pub mod error;
pub mod grid;
pub mod rng;
pub mod scheme;

pub use config::{GameConfig, DEFAULT_FOUR_PROBABILITY, DEFAULT_MAX_EXPONENT, DEFAULT_SIZE};
pub use error::GameError;
pub use grid::{face_value, EmptyCells, Grid, Position};
pub use rng::{GameRng, RandomSource};
pub use scheme::{ColorScheme, TileColors};
