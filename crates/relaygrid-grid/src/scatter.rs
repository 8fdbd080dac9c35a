//! Seeded random obstruction placement.
//!
//! Marks exactly `floor(rows * cols * fraction)` distinct cells `Obstructed`
//! by rejection sampling. Respects the workspace determinism contract: the
//! RNG is a `ChaCha8Rng` seeded from an explicit `u64`, so the same seed
//! always yields the same obstruction layout.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use relaygrid_core::{CellState, Coord, GridError};

use crate::grid::Grid;

/// Scatter obstructions over `grid`, returning how many cells were marked.
///
/// Samples cells uniformly and re-rolls collisions until exactly
/// `floor(cell_count * fraction)` distinct cells have transitioned
/// `Empty -> Obstructed`. Intended to run once, on a freshly constructed
/// grid, before any planning.
///
/// # Errors
///
/// `InvalidFraction` if `fraction` is not finite, not within `[0, 1]`, or
/// asks for more obstructions than the grid currently has `Empty` cells
/// (only possible on a grid that is no longer all-`Empty`).
pub fn scatter_obstructions(
    grid: &mut Grid,
    fraction: f64,
    seed: u64,
) -> Result<usize, GridError> {
    if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
        return Err(GridError::InvalidFraction { value: fraction });
    }
    let target = (grid.cell_count() as f64 * fraction) as usize;
    let empty = grid
        .cells()
        .iter()
        .filter(|&&s| s == CellState::Empty)
        .count();
    if target > empty {
        return Err(GridError::InvalidFraction { value: fraction });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut marked = 0;
    while marked < target {
        let coord = Coord::new(
            rng.random_range(0..grid.rows() as i32),
            rng.random_range(0..grid.cols() as i32),
        );
        // Re-roll cells that are already obstructed (or otherwise taken):
        // each sample either marks a fresh cell or counts for nothing.
        if grid.state(coord)? == CellState::Empty {
            grid.set_state(coord, CellState::Obstructed)?;
            marked += 1;
        }
    }
    Ok(marked)
}
