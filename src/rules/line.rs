//! Slide-and-merge on a single line.
//!
//! Every direction reduces to this primitive: the move engine orients the
//! grid so the slide goes toward index 0, then runs `slide_left_row` on each
//! row.

use smallvec::SmallVec;

/// Result of sliding one line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineOutcome {
    /// True iff the line differs from its input.
    pub changed: bool,
    /// Sum of the face values of every tile produced by a merge.
    pub score: u64,
}

impl LineOutcome {
    /// Fold another line's outcome into this one.
    pub fn absorb(&mut self, other: LineOutcome) {
        self.changed |= other.changed;
        self.score += other.score;
    }
}

/// Slide `row` toward index 0, merging equal neighbours once.
///
/// Non-zero exponents are compacted left in order. Scanning left to right,
/// an equal pair becomes one tile of exponent `e + 1`; the merged tile is
/// final for this call, so `[2, 2, 2, 2]` yields `[4, 4, 0, 0]` and never
/// `8`. Tiles already at `max_exponent` do not merge.
pub fn slide_left_row(row: &mut [u8], max_exponent: u8) -> LineOutcome {
    let mut out: SmallVec<[u8; 16]> = SmallVec::with_capacity(row.len());
    let mut score = 0u64;
    let mut pending: Option<u8> = None;

    for &exponent in row.iter().filter(|&&e| e != 0) {
        match pending {
            Some(held) if held == exponent && exponent < max_exponent => {
                let merged = exponent + 1;
                out.push(merged);
                score += 1u64 << merged;
                pending = None;
            }
            Some(held) => {
                out.push(held);
                pending = Some(exponent);
            }
            None => pending = Some(exponent),
        }
    }
    if let Some(held) = pending {
        out.push(held);
    }
    out.resize(row.len(), 0);

    let changed = out.as_slice() != &*row;
    if changed {
        row.copy_from_slice(&out);
    }

    LineOutcome { changed, score }
}
