//! Game-over detection.
//!
//! A grid is terminal when it has no empty cell and no two orthogonally
//! adjacent tiles that could merge. Tiles at the ceiling never merge, so an
//! adjacent pair of ceiling tiles does not keep the game alive.

use crate::core::Grid;

/// True when some row or column holds an adjacent mergeable pair.
#[must_use]
pub fn has_adjacent_pair(grid: &Grid) -> bool {
    let n = grid.size();
    let max = grid.max_exponent();
    let mergeable = |a: u8, b: u8| a != 0 && a == b && a < max;

    for row in 0..n {
        for col in 0..n {
            let here = grid.get(row, col);
            if col + 1 < n && mergeable(here, grid.get(row, col + 1)) {
                return true;
            }
            if row + 1 < n && mergeable(here, grid.get(row + 1, col)) {
                return true;
            }
        }
    }
    false
}

/// True iff no move in any direction can change `grid`.
#[must_use]
pub fn is_game_over(grid: &Grid) -> bool {
    !grid.has_empty() && !has_adjacent_pair(grid)
}
