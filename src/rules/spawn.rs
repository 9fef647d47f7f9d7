//! Random tile placement.

use crate::core::{Grid, RandomSource};

/// Exponent of a freshly spawned 2.
pub const TWO: u8 = 1;

/// Exponent of a freshly spawned 4.
pub const FOUR: u8 = 2;

/// A tile placed by [`spawn_tile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spawned {
    pub row: usize,
    pub col: usize,
    pub exponent: u8,
}

/// Place one tile on a uniformly chosen empty cell.
///
/// The cell is drawn first, then the value: a 4 with probability
/// `four_probability`, otherwise a 2. A full grid is left untouched and
/// `None` is returned.
pub fn spawn_tile<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    source: &mut R,
    four_probability: f64,
) -> Option<Spawned> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[source.pick_index(empty.len())];
    let exponent = if source.chance(four_probability) { FOUR } else { TWO };
    grid.set(row, col, exponent);

    Some(Spawned { row, col, exponent })
}
