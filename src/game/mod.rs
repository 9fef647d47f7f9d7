//! Game sessions: the turn loop around the rules.
//!
//! A session starts `Active` and becomes `GameOver` exactly once, when no
//! move can change the grid. Only `restart` brings it back.

mod session;

pub use session::{GameStatus, MoveResult, Session, INITIAL_TILES};
