//! Relaygrid: greedy coverage placement and routing on a 2D obstructed grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all relaygrid sub-crates. For most users, adding `relaygrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use relaygrid::prelude::*;
//!
//! // A 10x10 grid where each tower covers a Chebyshev radius of 2.
//! let mut grid = Grid::new(10, 10, 2).unwrap();
//!
//! // Block 30% of the cells, deterministically per seed.
//! scatter_obstructions(&mut grid, 0.3, 42).unwrap();
//!
//! // Greedy placement: after this, nothing is Empty.
//! let towers = place_towers(&mut grid).unwrap();
//! assert!(!towers.is_empty());
//!
//! // Route between the first and last tower, then draw the result.
//! let (a, b) = (towers[0], towers[towers.len() - 1]);
//! if let Some(route) = find_route(&grid, a, b).unwrap() {
//!     let overlay = RouteOverlay::from_route(&route);
//!     println!("{}", render_ascii(&grid, Some(&overlay)));
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `relaygrid-core` | `Coord`, `CellState`, `GridError` |
//! | [`grid`] | `relaygrid-grid` | `Grid`, neighbourhoods, obstruction scatter |
//! | [`plan`] | `relaygrid-plan` | coverage scoring, greedy placement |
//! | [`route`] | `relaygrid-route` | A* search, `Route`, `RouteOverlay` |
//! | [`render`] | `relaygrid-render` | read-only ASCII rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`relaygrid-core`).
///
/// The coordinate type with its Chebyshev and Manhattan metrics, the
/// logical [`types::CellState`] enum, and [`types::GridError`].
pub use relaygrid_core as types;

/// The obstructed coverage grid (`relaygrid-grid`).
///
/// [`grid::Grid`] owns the dense cell array and the insertion-ordered
/// tower registry; [`grid::scatter_obstructions`] sets a grid up.
pub use relaygrid_grid as grid;

/// Greedy coverage planning (`relaygrid-plan`).
///
/// [`plan::coverage_score`] and [`plan::place_towers`].
pub use relaygrid_plan as plan;

/// Read-only ASCII rendering (`relaygrid-render`).
pub use relaygrid_render as render;

/// Route search and display overlays (`relaygrid-route`).
///
/// [`route::find_route`], [`route::Route`], and [`route::RouteOverlay`].
pub use relaygrid_route as route;

/// Common imports for typical relaygrid usage.
///
/// ```rust
/// use relaygrid::prelude::*;
/// ```
pub mod prelude {
    pub use relaygrid_core::{CellState, Coord, GridError};
    pub use relaygrid_grid::{scatter_obstructions, Grid};
    pub use relaygrid_plan::{coverage_score, place_towers};
    pub use relaygrid_render::render_ascii;
    pub use relaygrid_route::{find_route, Route, RouteMarker, RouteOverlay};
}
