//! Session lifecycle integration tests.
//!
//! These tests drive `Session` through whole turns with a scripted random
//! source so spawn placement is exact.

use rust_2048::core::{GameConfig, GameRng, Grid, RandomSource};
use rust_2048::game::{GameStatus, MoveResult, Session, INITIAL_TILES};
use rust_2048::render::{ColorScheme, TextRenderer};
use rust_2048::rules::{Direction, Spawned};
use rust_2048::input::Command;

/// Random source that replays fixed picks; coin flips default to "2".
#[derive(Debug, Default)]
struct Scripted {
    picks: Vec<usize>,
    fours: Vec<bool>,
}

impl Scripted {
    fn new(picks: &[usize], fours: &[bool]) -> Self {
        Self {
            picks: picks.to_vec(),
            fours: fours.to_vec(),
        }
    }
}

impl RandomSource for Scripted {
    fn pick_index(&mut self, len: usize) -> usize {
        let pick = if self.picks.is_empty() { 0 } else { self.picks.remove(0) };
        assert!(pick < len, "scripted pick {pick} out of range {len}");
        pick
    }

    fn chance(&mut self, _probability: f64) -> bool {
        if self.fours.is_empty() {
            false
        } else {
            self.fours.remove(0)
        }
    }
}

fn grid(rows: &[[u8; 4]; 4]) -> Grid {
    Grid::from_rows(rows, GameConfig::default().max_exponent).unwrap()
}

// =============================================================================
// New Game
// =============================================================================

/// Test that a new game places exactly two tiles and starts at zero.
#[test]
fn test_new_game_two_tiles_zero_score() {
    for seed in 0..50 {
        let session = Session::with_seed(GameConfig::default(), seed).unwrap();
        assert_eq!(session.grid().tile_count(), INITIAL_TILES);
        assert_eq!(session.current_score(), 0);
        assert!(!session.is_game_over());

        let values: Vec<u32> = session.tile_values().into_iter().flatten().filter(|&v| v != 0).collect();
        assert!(values.iter().all(|&v| v == 2 || v == 4));
    }
}

/// Test that scripted spawns land where they are told to.
#[test]
fn test_new_game_scripted_placement() {
    // first pick among 16 empties, second among the remaining 15
    let source = Scripted::new(&[0, 14], &[false, true]);
    let session = Session::new_game(GameConfig::default(), source).unwrap();

    assert_eq!(
        session.grid_snapshot(),
        vec![
            vec![1, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 2],
        ]
    );
}

/// Test that new games work on non-default board sizes.
#[test]
fn test_new_game_other_sizes() {
    for size in [2, 3, 5, 8] {
        let session = Session::with_seed(GameConfig::new().with_size(size), 9).unwrap();
        assert_eq!(session.grid().size(), size);
        assert_eq!(session.grid().tile_count(), INITIAL_TILES);
        assert_eq!(session.grid_snapshot().len(), size);
    }
}

// =============================================================================
// Moves
// =============================================================================

/// Test that an effective move scores, spawns once and counts.
#[test]
fn test_effective_move_spawns_one_tile() {
    let start = grid(&[
        [1, 1, 2, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);
    let mut session = Session::from_grid(GameConfig::default(), start, Scripted::new(&[0], &[])).unwrap();

    let result = session.apply_move(Direction::Left);

    assert!(result.changed);
    assert_eq!(result.score_gained, 4);
    // empties after the slide: (0,2) is first in row-major order
    assert_eq!(result.spawned, Some(Spawned { row: 0, col: 2, exponent: 1 }));
    assert_eq!(session.current_score(), 4);
    assert_eq!(session.moves_made(), 1);
    assert_eq!(session.grid().row(0), &[2, 2, 1, 0]);
}

/// Test that a move which changes nothing does not spawn or score.
#[test]
fn test_ineffective_move_is_free() {
    let start = grid(&[
        [1, 2, 3, 4],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);
    let mut session = Session::from_grid(GameConfig::default(), start.clone(), GameRng::new(1)).unwrap();

    assert_eq!(session.apply_move(Direction::Left), MoveResult::default());
    assert_eq!(session.apply_move(Direction::Up), MoveResult::default());
    assert_eq!(session.apply_move(Direction::Right), MoveResult::default());
    assert_eq!(session.grid(), &start);
    assert_eq!(session.moves_made(), 0);

    assert!(session.apply_move(Direction::Down).changed);
    assert_eq!(session.grid().tile_count(), 5);
}

/// Test that score accumulates over several merges.
#[test]
fn test_score_accumulates() {
    let start = grid(&[
        [1, 1, 1, 1],
        [2, 2, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ]);
    let mut session = Session::from_grid(GameConfig::default(), start, Scripted::default()).unwrap();

    let first = session.apply_move(Direction::Left);
    // 4 + 4 from row 0, 8 from row 1
    assert_eq!(first.score_gained, 16);

    // row 0 is now [4, 4, 2, 0] after the spawn at (0, 2)
    let second = session.apply_move(Direction::Left);
    assert_eq!(second.score_gained, 8);
    assert_eq!(session.current_score(), 24);
}

// =============================================================================
// Game Over
// =============================================================================

/// Test the Active -> GameOver transition after the last effective move.
#[test]
fn test_transition_to_game_over() {
    let start = grid(&[
        [1, 2, 1, 2],
        [2, 1, 2, 1],
        [1, 2, 1, 2],
        [2, 1, 3, 3],
    ]);
    let mut session = Session::from_grid(GameConfig::default(), start, Scripted::default()).unwrap();
    assert_eq!(session.status(), GameStatus::Active);

    let result = session.apply_move(Direction::Left);
    assert!(result.changed);
    assert_eq!(result.score_gained, 16);
    assert_eq!(result.spawned, Some(Spawned { row: 3, col: 3, exponent: 1 }));

    assert_eq!(session.status(), GameStatus::GameOver);
    assert!(session.is_game_over());
    assert!(session.legal_moves().is_empty());

    // Further input is ignored
    let snapshot = session.grid_snapshot();
    for direction in Direction::ALL {
        assert!(!session.apply_move(direction).changed);
    }
    assert_eq!(session.grid_snapshot(), snapshot);
    assert_eq!(session.current_score(), 16);
}

/// Test that a checkerboard position is recognised as finished on load.
#[test]
fn test_checkerboard_loads_as_game_over() {
    let start = grid(&[
        [1, 2, 1, 2],
        [2, 1, 2, 1],
        [1, 2, 1, 2],
        [2, 1, 2, 1],
    ]);
    let session = Session::from_grid(GameConfig::default(), start, GameRng::new(0)).unwrap();
    assert!(session.is_game_over());
}

/// Test that restart returns a finished session to Active.
#[test]
fn test_restart_after_game_over() {
    let start = grid(&[
        [1, 2, 1, 2],
        [2, 1, 2, 1],
        [1, 2, 1, 2],
        [2, 1, 2, 1],
    ]);
    let mut session = Session::from_grid(GameConfig::default(), start, GameRng::new(0)).unwrap();
    session.restart();

    assert_eq!(session.status(), GameStatus::Active);
    assert_eq!(session.grid().tile_count(), INITIAL_TILES);
    assert_eq!(session.current_score(), 0);
}

/// Test that random play always terminates in GameOver.
#[test]
fn test_random_play_reaches_game_over() {
    let mut session = Session::with_seed(GameConfig::default(), 1234).unwrap();
    let mut policy = GameRng::new(1234).for_context("policy");
    let mut last_score = 0;

    for _ in 0..100_000 {
        let legal = session.legal_moves();
        let Some(&direction) = policy.choose(&legal) else {
            break;
        };
        let result = session.apply_move(direction);
        assert!(result.changed);
        assert!(session.current_score() >= last_score);
        last_score = session.current_score();
    }

    assert!(session.is_game_over());
    assert!(session.highest_tile() >= 4);
}

// =============================================================================
// Collaborators
// =============================================================================

/// Test that key commands drive a session the way a host loop would.
#[test]
fn test_host_loop_with_commands() {
    let mut session = Session::with_seed(GameConfig::default(), 5).unwrap();

    for key in "wasdxq".chars() {
        match Command::from_key(key) {
            Some(Command::Move(direction)) => {
                session.apply_move(direction);
            }
            Some(Command::Restart) => session.restart(),
            Some(Command::Quit) => break,
            None => {}
        }
    }

    assert!(session.grid().tile_count() >= INITIAL_TILES);
}

/// Test that rendering reads the session's scheme and score.
#[test]
fn test_render_session() {
    let start = grid(&[
        [11, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 1],
    ]);
    let mut session = Session::from_grid(GameConfig::default(), start, GameRng::new(0)).unwrap();
    session.set_scheme(ColorScheme::BlackWhite);

    let text = TextRenderer::colored().render_session(&session);
    assert!(text.starts_with("2048"));
    assert!(text.contains("2048 "));
    assert!(text.contains(&ColorScheme::BlackWhite.colors(11).ansi()));
}
