//! Test fixtures for relaygrid development.
//!
//! Provides [`grid_from_art`], which builds a grid from the same glyph set
//! the renderer emits, so tests can draw their scenario instead of issuing
//! a list of `set_state` calls.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use relaygrid_core::{CellState, Coord};
use relaygrid_grid::Grid;

/// Build a grid from ASCII art, one glyph per cell:
///
/// - `.` — `Empty`
/// - `X` — `Obstructed`
/// - `#` — `Covered`
/// - `|` — `Tower` (also lands in the registry, in reading order)
///
/// Leading/trailing whitespace on each line is trimmed and blank lines are
/// skipped, so fixtures can be indented inline:
///
/// ```
/// use relaygrid_test_utils::grid_from_art;
///
/// // Art lines here must not begin with `#`: rustdoc treats such
/// // doctest lines as hidden and mangles the string.
/// let grid = grid_from_art(1, "\
///     |#.
///     .#X
///     ..X");
/// assert_eq!(grid.towers().len(), 1);
/// ```
///
/// Panics on ragged or unknown input; fixtures are test code.
pub fn grid_from_art(radius: u32, art: &str) -> Grid {
    let lines: Vec<&str> = art
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert!(!lines.is_empty(), "fixture art has no rows");
    let rows = lines.len() as u32;
    let cols = lines[0].chars().count() as u32;
    let mut grid = Grid::new(rows, cols, radius).expect("fixture dimensions");

    for (r, line) in lines.iter().enumerate() {
        assert_eq!(
            line.chars().count() as u32,
            cols,
            "ragged fixture art at row {r}"
        );
        for (c, glyph) in line.chars().enumerate() {
            let state = match glyph {
                '.' => CellState::Empty,
                'X' => CellState::Obstructed,
                '#' => CellState::Covered,
                '|' => CellState::Tower,
                other => panic!("unknown fixture glyph {other:?} at ({r}, {c})"),
            };
            if state != CellState::Empty {
                grid.set_state(Coord::new(r as i32, c as i32), state)
                    .expect("fixture transition");
            }
        }
    }
    grid
}
