//! The NxN tile grid.
//!
//! Cells hold tile exponents: 0 is empty, `e > 0` is the tile `2^e`.
//! Storage is row-major so a row is a contiguous slice, which is what the
//! line transform operates on.

use smallvec::SmallVec;
use std::fmt;

use super::config::MAX_EXPONENT_LIMIT;
use super::error::GameError;

/// Cell coordinates as `(row, col)`.
pub type Position = (usize, usize);

/// Empty-cell list, inline for boards up to 4x4.
pub type EmptyCells = SmallVec<[Position; 16]>;

/// Square grid of tile exponents with a fixed ceiling.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    max_exponent: u8,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an empty `size` x `size` grid.
    pub fn new(size: usize, max_exponent: u8) -> Self {
        assert!(size > 0, "Grid size must be positive");
        assert!(
            (2..=MAX_EXPONENT_LIMIT).contains(&max_exponent),
            "Grid ceiling must be in 2..={MAX_EXPONENT_LIMIT}"
        );
        Self {
            size,
            max_exponent,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid from rows of exponents.
    ///
    /// Rows must form a square, `max_exponent` must be in
    /// `2..=MAX_EXPONENT_LIMIT`, and every exponent must be at most
    /// `max_exponent`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R], max_exponent: u8) -> Result<Self, GameError> {
        if !(2..=MAX_EXPONENT_LIMIT).contains(&max_exponent) {
            return Err(GameError::InvalidConfig(format!(
                "max_exponent must be in [2, {MAX_EXPONENT_LIMIT}]"
            )));
        }
        let size = rows.len();
        if size == 0 {
            return Err(GameError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GameError::RaggedRow {
                    row: row_idx,
                    len: row.len(),
                    expected: size,
                });
            }
            for (col_idx, &exponent) in row.iter().enumerate() {
                if exponent > max_exponent {
                    return Err(GameError::TileOverflow {
                        row: row_idx,
                        col: col_idx,
                        exponent,
                        max: max_exponent,
                    });
                }
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            size,
            max_exponent,
            cells,
        })
    }

    /// Edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Highest exponent a tile may reach.
    #[must_use]
    pub fn max_exponent(&self) -> u8 {
        self.max_exponent
    }

    /// Exponent at `(row, col)`.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.size + col]
    }

    /// Set the exponent at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, exponent: u8) {
        debug_assert!(exponent <= self.max_exponent, "tile exponent above ceiling");
        self.cells[row * self.size + col] = exponent;
    }

    /// Face value at `(row, col)`: `2^e`, or 0 when empty.
    #[must_use]
    pub fn tile_value(&self, row: usize, col: usize) -> u32 {
        face_value(self.get(row, col))
    }

    /// A single row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.size)
    }

    /// Iterate mutably over rows.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.cells.chunks_mut(self.size)
    }

    /// Number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&e| e == 0).count()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.len() - self.count_empty()
    }

    /// True when at least one cell is empty.
    #[must_use]
    pub fn has_empty(&self) -> bool {
        self.cells.contains(&0)
    }

    /// Positions of all empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Largest exponent on the board, 0 for an empty board.
    #[must_use]
    pub fn highest_exponent(&self) -> u8 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Rotate 90 degrees clockwise.
    ///
    /// `(row, col)` moves to `(col, size - 1 - row)`. Four rotations are
    /// the identity.
    #[must_use]
    pub fn rotate(&self) -> Grid {
        let n = self.size;
        let mut cells = vec![0; n * n];
        for row in 0..n {
            for col in 0..n {
                cells[col * n + (n - 1 - row)] = self.cells[row * n + col];
            }
        }
        Grid {
            size: n,
            max_exponent: self.max_exponent,
            cells,
        }
    }

    /// Rotate 90 degrees counter-clockwise (three clockwise turns).
    #[must_use]
    pub fn rotate_back(&self) -> Grid {
        self.rotate().rotate().rotate()
    }

    /// Mirror every row left-to-right.
    #[must_use]
    pub fn reverse_rows(&self) -> Grid {
        let mut out = self.clone();
        for row in out.rows_mut() {
            row.reverse();
        }
        out
    }

    /// Exponents as owned rows.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }

    /// Face values as owned rows.
    #[must_use]
    pub fn tile_values(&self) -> Vec<Vec<u32>> {
        self.rows()
            .map(|row| row.iter().map(|&e| face_value(e)).collect())
            .collect()
    }
}

/// Face value of an exponent: `2^e`, or 0 for the empty cell.
#[inline]
#[must_use]
pub fn face_value(exponent: u8) -> u32 {
    if exponent == 0 {
        0
    } else {
        1 << exponent
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|&e| match e {
                    0 => ".".to_string(),
                    _ => face_value(e).to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
