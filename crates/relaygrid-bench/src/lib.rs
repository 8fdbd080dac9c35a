//! Benchmark profiles for the relaygrid workspace.
//!
//! Provides pre-built obstructed grids so the benches measure the
//! algorithms, not the setup.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use relaygrid_grid::{scatter_obstructions, Grid};

/// Build a reference profile: a 64x64 grid, radius 3, 30% obstructed,
/// fixed seed so every run measures the same workload.
pub fn reference_grid() -> Grid {
    let mut grid = Grid::new(64, 64, 3).expect("reference dimensions");
    scatter_obstructions(&mut grid, 0.3, 42).expect("reference scatter");
    grid
}
