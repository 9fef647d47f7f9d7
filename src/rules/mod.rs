//! Game rules: line transform, move engine, spawning, game-over detection.
//!
//! All functions here are pure over a [`Grid`](crate::core::Grid) (plus an
//! injected random source for spawning). `crate::game::Session` sequences
//! them into turns.

pub mod line;
pub mod moves;
pub mod spawn;
pub mod terminal;

pub use line::{slide_left_row, LineOutcome};
pub use moves::{apply_move, legal_moves, Direction, MoveOutcome};
pub use spawn::{spawn_tile, Spawned};
pub use terminal::{has_adjacent_pair, is_game_over};
