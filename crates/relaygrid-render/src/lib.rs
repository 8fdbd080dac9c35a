//! Read-only ASCII rendering of grid state.
//!
//! The renderer is a pure consumer: it reads the grid's logical cell
//! states and, when given a route overlay, lets the overlay's display
//! marks win over the underlying state. It never mutates anything.
//!
//! Glyphs: `.` empty, `X` obstructed, `#` covered, `|` tower; overlay
//! marks render as `B` (start), `E` (end), `*` (waypoint). The glyph set
//! round-trips through `relaygrid_test_utils::grid_from_art`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use relaygrid_core::{CellState, Coord};
use relaygrid_grid::Grid;
use relaygrid_route::{RouteMarker, RouteOverlay};

/// Glyph for a logical cell state.
fn state_glyph(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Obstructed => 'X',
        CellState::Covered => '#',
        CellState::Tower => '|',
    }
}

/// Glyph for a route display mark.
fn marker_glyph(marker: RouteMarker) -> char {
    match marker {
        RouteMarker::Start => 'B',
        RouteMarker::End => 'E',
        RouteMarker::Waypoint => '*',
    }
}

/// Render the grid as one glyph per cell, each row terminated by `\n`.
///
/// When `overlay` is given, its marks replace the glyph of the cells the
/// route passes through. The grid itself is untouched either way.
pub fn render_ascii(grid: &Grid, overlay: Option<&RouteOverlay>) -> String {
    let cols = grid.cols() as usize;
    let mut out = String::with_capacity(grid.cell_count() + grid.rows() as usize);
    for (i, &cell) in grid.cells().iter().enumerate() {
        let coord = Coord::new((i / cols) as i32, (i % cols) as i32);
        let glyph = overlay
            .and_then(|o| o.marker(coord))
            .map(marker_glyph)
            .unwrap_or_else(|| state_glyph(cell));
        out.push(glyph);
        if (i + 1) % cols == 0 {
            out.push('\n');
        }
    }
    out
}
