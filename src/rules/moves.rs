//! Move engine: orient, slide every row, orient back.

use smallvec::SmallVec;
use std::fmt;

use super::line::{slide_left_row, LineOutcome};
use crate::core::Grid;

/// Slide direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in host code order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a host input code (0 = up, 1 = down, 2 = left, 3 = right).
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Host input code for this direction.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Outcome of a whole-grid move.
pub type MoveOutcome = LineOutcome;

/// Apply `direction` to `grid` in place.
///
/// Right mirrors the rows around a left slide; Up and Down rotate the grid
/// so their columns become rows, slide left, and rotate back.
pub fn apply_move(grid: &mut Grid, direction: Direction) -> MoveOutcome {
    match direction {
        Direction::Left => slide_rows(grid),
        Direction::Right => {
            let mut mirrored = grid.reverse_rows();
            let outcome = slide_rows(&mut mirrored);
            *grid = mirrored.reverse_rows();
            outcome
        }
        Direction::Up => {
            let mut turned = grid.rotate_back();
            let outcome = slide_rows(&mut turned);
            *grid = turned.rotate();
            outcome
        }
        Direction::Down => {
            let mut turned = grid.rotate();
            let outcome = slide_rows(&mut turned);
            *grid = turned.rotate_back();
            outcome
        }
    }
}

fn slide_rows(grid: &mut Grid) -> MoveOutcome {
    let max_exponent = grid.max_exponent();
    let mut total = MoveOutcome::default();
    for row in grid.rows_mut() {
        total.absorb(slide_left_row(row, max_exponent));
    }
    total
}

/// Directions that would change `grid`, in [`Direction::ALL`] order.
#[must_use]
pub fn legal_moves(grid: &Grid) -> SmallVec<[Direction; 4]> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| apply_move(&mut grid.clone(), direction).changed)
        .collect()
}
