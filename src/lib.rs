//! # rust-2048
//!
//! Core mechanics of the 2048 sliding-tile puzzle.
//!
//! ## Design Principles
//!
//! 1. **One merge primitive**: every direction is a rotation or mirror of
//!    the grid followed by `slide_left_row` on each row.
//!
//! 2. **No global state**: a `Session` is an explicit value owning its grid,
//!    score and random source.
//!
//! 3. **Injected randomness**: spawning draws from a `RandomSource`, so
//!    placement is reproducible from a seed or fully scripted in tests.
//!
//! ## Modules
//!
//! - `core`: Grid, configuration, errors, RNG, colour schemes
//! - `rules`: Line transform, move engine, spawner, game-over detection
//! - `game`: Session lifecycle and the turn sequence
//! - `render`: Text renderer
//! - `input`: Key-to-command translation for hosts
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, GameConfig, Session};
//!
//! let mut session = Session::with_seed(GameConfig::default(), 42).unwrap();
//! assert_eq!(session.grid().tile_count(), 2);
//!
//! for direction in Direction::ALL {
//!     let result = session.apply_move(direction);
//!     if result.changed {
//!         assert!(result.spawned.is_some());
//!     }
//! }
//! ```

pub mod core;
pub mod rules;
pub mod game;
pub mod render;
pub mod input;

// Re-export commonly used types
pub use crate::core::{
    ColorScheme, GameConfig, GameError, GameRng, Grid, Position, RandomSource,
};

pub use crate::rules::{
    apply_move, is_game_over, slide_left_row, spawn_tile,
    Direction, LineOutcome, MoveOutcome, Spawned,
};

pub use crate::game::{GameStatus, MoveResult, Session};

pub use crate::render::TextRenderer;

pub use crate::input::Command;
