//! A single game session.
//!
//! `Session` bundles the grid, score, display scheme and random source, and
//! sequences one turn: slide, and if anything moved, add the score, spawn a
//! tile and check for game over. Sessions are plain values; any number can
//! coexist.

use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::core::{face_value, ColorScheme, GameConfig, GameError, GameRng, Grid, RandomSource};
use crate::rules::{self, Direction, Spawned};

/// Tiles placed when a game starts.
pub const INITIAL_TILES: usize = 2;

/// Session lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    GameOver,
}

/// What a call to [`Session::apply_move`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveResult {
    /// True iff the grid changed. Only then was a tile spawned.
    pub changed: bool,
    /// Points added to the score by this move.
    pub score_gained: u64,
    /// Tile placed after the move, if any.
    pub spawned: Option<Spawned>,
}

/// An in-memory 2048 game.
#[derive(Clone, Debug)]
pub struct Session<R = GameRng> {
    config: GameConfig,
    grid: Grid,
    score: u64,
    scheme: ColorScheme,
    status: GameStatus,
    moves: u32,
    rng: R,
}

impl Session<GameRng> {
    /// Start a game driven by a seeded [`GameRng`].
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::new_game(config, GameRng::new(seed))
    }
}

impl<R: RandomSource> Session<R> {
    /// Start a game: empty grid, zero score, two spawned tiles.
    pub fn new_game(config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let mut session = Self {
            grid: Grid::new(config.size, config.max_exponent),
            score: 0,
            scheme: config.scheme,
            status: GameStatus::Active,
            moves: 0,
            rng,
            config,
        };
        session.reset();
        Ok(session)
    }

    /// Resume from an existing position with zero score. No tiles are
    /// spawned.
    pub fn from_grid(config: GameConfig, grid: Grid, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        if grid.size() != config.size || grid.max_exponent() != config.max_exponent {
            return Err(GameError::InvalidConfig(format!(
                "grid is {0}x{0} with ceiling {1}, config expects {2}x{2} with ceiling {3}",
                grid.size(),
                grid.max_exponent(),
                config.size,
                config.max_exponent,
            )));
        }

        let status = if rules::is_game_over(&grid) {
            GameStatus::GameOver
        } else {
            GameStatus::Active
        };
        Ok(Self {
            grid,
            score: 0,
            scheme: config.scheme,
            status,
            moves: 0,
            rng,
            config,
        })
    }

    /// Throw away the current game and start a new one with the same
    /// config and random source. The display scheme is kept.
    pub fn restart(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.grid = Grid::new(self.config.size, self.config.max_exponent);
        self.score = 0;
        self.moves = 0;
        self.status = GameStatus::Active;
        for _ in 0..INITIAL_TILES {
            rules::spawn_tile(&mut self.grid, &mut self.rng, self.config.four_probability);
        }
        debug!(size = self.config.size, "new game");
    }

    /// Play one move.
    ///
    /// An ineffective move, or any move after game over, leaves the session
    /// untouched and returns `changed == false`.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        if self.status == GameStatus::GameOver {
            return MoveResult::default();
        }

        let outcome = rules::apply_move(&mut self.grid, direction);
        if !outcome.changed {
            trace!(%direction, "move had no effect");
            return MoveResult::default();
        }

        self.score += outcome.score;
        self.moves += 1;
        let spawned = rules::spawn_tile(&mut self.grid, &mut self.rng, self.config.four_probability);
        trace!(%direction, gained = outcome.score, score = self.score, ?spawned, "move applied");

        if rules::is_game_over(&self.grid) {
            self.status = GameStatus::GameOver;
            info!(
                score = self.score,
                moves = self.moves,
                highest_tile = self.highest_tile(),
                "game over"
            );
        }

        MoveResult {
            changed: true,
            score_gained: outcome.score,
            spawned,
        }
    }

    /// Directions that would change the grid right now.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[Direction; 4]> {
        if self.status == GameStatus::GameOver {
            return SmallVec::new();
        }
        rules::legal_moves(&self.grid)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn current_score(&self) -> u64 {
        self.score
    }

    /// Effective moves played since the game started.
    #[must_use]
    pub fn moves_made(&self) -> u32 {
        self.moves
    }

    /// Face value of the largest tile.
    #[must_use]
    pub fn highest_tile(&self) -> u32 {
        face_value(self.grid.highest_exponent())
    }

    /// Read-only view of the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Tile exponents row by row (0 = empty).
    #[must_use]
    pub fn grid_snapshot(&self) -> Vec<Vec<u8>> {
        self.grid.snapshot()
    }

    /// Tile face values row by row (0 = empty).
    #[must_use]
    pub fn tile_values(&self) -> Vec<Vec<u32>> {
        self.grid.tile_values()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }
}
