//! Grid coordinates and the two distance metrics used by planning and routing.

use std::fmt;

/// A `(row, col)` cell coordinate.
///
/// The derived `Ord` is lexicographic on `(row, col)`, which is row-major
/// scan order. Placement tie-breaking relies on this: among candidates with
/// equal coverage scores, the first coordinate in row-major order wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, 0-based from the top.
    pub row: i32,
    /// Column index, 0-based from the left.
    pub col: i32,
}

impl Coord {
    /// Construct a coordinate from row and column indices.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Chebyshev (L-inf) distance: `max(|Δrow|, |Δcol|)`.
    ///
    /// The metric of the 8-connected grid, where a diagonal step costs 1.
    /// Coverage footprints and route adjacency are both Chebyshev balls.
    pub fn chebyshev(self, other: Coord) -> u32 {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr.max(dc)
    }

    /// Manhattan (L1) distance: `|Δrow| + |Δcol|`.
    ///
    /// Used only as the heuristic term in the route search priority.
    pub fn manhattan(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}
