//! Dense cell storage, bounds-checked access, and Chebyshev neighbourhoods.

use indexmap::IndexSet;
use relaygrid_core::{CellState, Coord, GridError};
use smallvec::SmallVec;

/// All 8 adjacency offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A 2D obstructed grid with a fixed coverage radius.
///
/// Cells are stored row-major. The tower registry is insertion-ordered and
/// duplicate-free, and is maintained inside [`Grid::set_state`]: every
/// registry entry is guaranteed to name a [`CellState::Tower`] cell.
///
/// `Obstructed` and `Tower` cells are immutable once set; any transition
/// out of a non-terminal (`Empty` or `Covered`) state is accepted. The
/// planner itself only ever performs `Empty -> Covered` and
/// `Empty | Covered -> Tower`.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: u32,
    cols: u32,
    radius: u32,
    cells: Vec<CellState>,
    towers: IndexSet<Coord>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-`Empty` grid with the given coverage radius.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if `rows`, `cols`, or `radius` is zero, or if a
    /// dimension exceeds [`Grid::MAX_DIM`]. Rejected before any allocation.
    pub fn new(rows: u32, cols: u32, radius: u32) -> Result<Self, GridError> {
        for (name, value) in [("rows", rows), ("cols", cols), ("radius", radius)] {
            if value == 0 {
                return Err(GridError::InvalidDimension { name, value });
            }
        }
        for (name, value) in [("rows", rows), ("cols", cols)] {
            if value > Self::MAX_DIM {
                return Err(GridError::InvalidDimension { name, value });
            }
        }
        Ok(Self {
            rows,
            cols,
            radius,
            cells: vec![CellState::Empty; rows as usize * cols as usize],
            towers: IndexSet::new(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Coverage radius (Chebyshev) of every tower on this grid.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Row-major slice of every cell's logical state.
    ///
    /// For read-only consumers such as renderers.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Tower coordinates in placement order. Never contains duplicates.
    pub fn towers(&self) -> &IndexSet<Coord> {
        &self.towers
    }

    /// Whether `coord` lies within `[0, rows) x [0, cols)`.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.row < self.rows as i32
            && coord.col >= 0
            && coord.col < self.cols as i32
    }

    /// Check bounds and return the row-major index.
    fn check_bounds(&self, coord: Coord) -> Result<usize, GridError> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds {
                coord,
                bounds: format!("[0, {}) x [0, {})", self.rows, self.cols),
            });
        }
        Ok(coord.row as usize * self.cols as usize + coord.col as usize)
    }

    /// Logical state of one cell.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for a coordinate outside the grid. Access never clamps.
    pub fn state(&self, coord: Coord) -> Result<CellState, GridError> {
        self.check_bounds(coord).map(|i| self.cells[i])
    }

    /// Set one cell's logical state.
    ///
    /// Writing a cell's current state back is a no-op `Ok`. Transitioning a
    /// cell to `Tower` also appends it to the tower registry.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for a coordinate outside the grid, `InvalidTransition`
    /// when the current state is terminal (`Obstructed` or `Tower`).
    pub fn set_state(&mut self, coord: Coord, state: CellState) -> Result<(), GridError> {
        let i = self.check_bounds(coord)?;
        let from = self.cells[i];
        if from == state {
            return Ok(());
        }
        if from.is_terminal() {
            return Err(GridError::InvalidTransition {
                coord,
                from,
                to: state,
            });
        }
        self.cells[i] = state;
        if state == CellState::Tower {
            self.towers.insert(coord);
        }
        Ok(())
    }

    /// All in-bounds cells within Chebyshev `radius` of `center`, center
    /// included, in row-major order.
    ///
    /// Clips at the grid edges rather than erroring or wrapping: the
    /// coverage footprint of a tower near a border is simply smaller. The
    /// same iteration drives coverage scoring, footprint marking, and
    /// (through [`Grid::adjacent`]) route expansion.
    pub fn neighbourhood(&self, center: Coord, radius: u32) -> impl Iterator<Item = Coord> {
        let r = radius.min(Self::MAX_DIM) as i32;
        let row_lo = center.row.saturating_sub(r).max(0);
        let row_hi = center.row.saturating_add(r).min(self.rows as i32 - 1);
        let col_lo = center.col.saturating_sub(r).max(0);
        let col_hi = center.col.saturating_add(r).min(self.cols as i32 - 1);
        (row_lo..=row_hi)
            .flat_map(move |row| (col_lo..=col_hi).map(move |col| Coord::new(row, col)))
    }

    /// The 8-connected in-bounds neighbours of `center`, center excluded.
    pub fn adjacent(&self, center: Coord) -> SmallVec<[Coord; 8]> {
        let mut out = SmallVec::new();
        for (dr, dc) in OFFSETS_8 {
            let nb = Coord::new(center.row + dr, center.col + dc);
            if self.contains(nb) {
                out.push(nb);
            }
        }
        out
    }
}
