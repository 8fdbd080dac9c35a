//! Coverage scoring: how much new ground a candidate tower would claim.

use relaygrid_core::{CellState, Coord};
use relaygrid_grid::Grid;

/// Number of currently-`Empty` cells within the grid's coverage radius of
/// `candidate`, the candidate cell included.
///
/// Pure: reads the grid and mutates nothing. Ties between equally scored
/// candidates are resolved by the caller, not here.
pub fn coverage_score(grid: &Grid, candidate: Coord) -> usize {
    grid.neighbourhood(candidate, grid.radius())
        .filter(|&c| matches!(grid.state(c), Ok(CellState::Empty)))
        .count()
}
