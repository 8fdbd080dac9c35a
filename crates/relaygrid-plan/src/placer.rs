//! The greedy placement loop.

use relaygrid_core::{CellState, Coord, GridError};
use relaygrid_grid::Grid;

use crate::score::coverage_score;

/// Greedily place towers until the grid has no coverable `Empty` cell left.
///
/// Each round scans every placeable (`Empty` or `Covered`) cell in
/// row-major order, scores it with [`coverage_score`], and commits a tower
/// at the first cell holding the strict maximum. A round whose best score
/// is 0 terminates the loop. Every `Empty` cell is itself a candidate
/// counting toward its own score, so termination implies nothing is
/// `Empty` any more — a sealed-off pocket simply ends up hosting its own
/// tower.
///
/// Deterministic: identical grids always produce the identical tower list.
/// Each committed tower covers at least one previously-`Empty` cell, so the
/// loop is bounded by the cell count. A fully obstructed grid places
/// nothing and returns immediately.
///
/// Returns the towers placed by this call, in placement order. The grid's
/// registry accumulates them as well.
///
/// # Errors
///
/// Propagates grid transition failures. None occur through this path:
/// candidates are filtered to placeable cells and footprints only touch
/// `Empty` cells, but the grid's guards stay in force regardless.
pub fn place_towers(grid: &mut Grid) -> Result<Vec<Coord>, GridError> {
    let mut placed = Vec::new();
    while let Some(site) = best_candidate(grid) {
        commit_tower(grid, site)?;
        placed.push(site);
    }
    Ok(placed)
}

/// Row-major scan for the placeable cell with the strict maximum coverage
/// score. `None` when every candidate scores 0.
fn best_candidate(grid: &Grid) -> Option<Coord> {
    let mut best: Option<(Coord, usize)> = None;
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            let coord = Coord::new(row, col);
            let Ok(state) = grid.state(coord) else {
                continue;
            };
            if !state.is_placeable() {
                continue;
            }
            let score = coverage_score(grid, coord);
            // Strictly greater: ties go to the first cell in scan order.
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((coord, score));
            }
        }
    }
    best.map(|(coord, _)| coord)
}

/// Commit a tower at `site` and mark its coverage footprint.
///
/// The site transitions to `Tower` (appending it to the registry); every
/// `Empty` cell within the radius becomes `Covered`. Cells already
/// `Covered`, `Obstructed`, or `Tower` are left untouched, so the footprint
/// marking is idempotent and never downgrades anything.
fn commit_tower(grid: &mut Grid, site: Coord) -> Result<(), GridError> {
    grid.set_state(site, CellState::Tower)?;
    for cell in grid.neighbourhood(site, grid.radius()) {
        if grid.state(cell)? == CellState::Empty {
            grid.set_state(cell, CellState::Covered)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use relaygrid_test_utils::grid_from_art;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    fn no_empty_left(grid: &Grid) -> bool {
        grid.cells().iter().all(|&s| s != CellState::Empty)
    }

    // ── Full-coverage tests ─────────────────────────────────────

    #[test]
    fn unobstructed_grid_ends_fully_covered() {
        let mut g = Grid::new(5, 5, 1).unwrap();
        let towers = place_towers(&mut g).unwrap();
        assert!(no_empty_left(&g));
        // A radius-1 tower covers at most 9 cells, so 25 cells need >= 3.
        assert!(towers.len() >= 3);
    }

    #[test]
    fn five_by_five_exact_sequence() {
        // Row-major first-max-wins makes the whole sequence reproducible:
        // (1,1) claims the first full 3x3, (3,3) the biggest remaining
        // block, then the two leftover 4-cell strips fall to (0,3) and
        // (3,0) — (0,3) first, since equal scores go to row-major order.
        let mut g = Grid::new(5, 5, 1).unwrap();
        let towers = place_towers(&mut g).unwrap();
        assert_eq!(towers, vec![c(1, 1), c(3, 3), c(0, 3), c(3, 0)]);
        // Four towers, and nothing left uncovered.
        assert!(g.cells().iter().all(|&s| s != CellState::Empty));
    }

    #[test]
    fn deterministic_across_runs() {
        let mut a = Grid::new(9, 7, 2).unwrap();
        let mut b = Grid::new(9, 7, 2).unwrap();
        let ta = place_towers(&mut a).unwrap();
        let tb = place_towers(&mut b).unwrap();
        assert_eq!(ta, tb);
        assert_eq!(a.cells(), b.cells());
    }

    // ── Obstruction tests ───────────────────────────────────────

    #[test]
    fn fully_obstructed_grid_places_nothing() {
        let g_art = "\
            XXX
            XXX
            XXX";
        let mut g = grid_from_art(1, g_art);
        let towers = place_towers(&mut g).unwrap();
        assert!(towers.is_empty());
    }

    #[test]
    fn towers_avoid_obstructions() {
        let g_art = "\
            X.X
            ...
            X.X";
        let mut g = grid_from_art(1, g_art);
        let towers = place_towers(&mut g).unwrap();
        // Center scores 5, everything else less; one tower covers it all.
        assert_eq!(towers, vec![c(1, 1)]);
        assert!(no_empty_left(&g));
    }

    #[test]
    fn sealed_pocket_gets_its_own_tower() {
        // (0,3) is walled off from every other placeable cell, so the only
        // candidate that can cover it is itself.
        let g_art = "\
            ..X.
            ..XX
            ....";
        let mut g = grid_from_art(1, g_art);
        let towers = place_towers(&mut g).unwrap();
        assert!(towers.contains(&c(0, 3)));
        assert!(no_empty_left(&g));
    }

    #[test]
    fn registry_matches_returned_list() {
        let mut g = Grid::new(6, 6, 1).unwrap();
        let towers = place_towers(&mut g).unwrap();
        let registry: Vec<Coord> = g.towers().iter().copied().collect();
        assert_eq!(towers, registry);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn placement_terminates_with_no_reachable_empty(
            rows in 1u32..10,
            cols in 1u32..10,
            radius in 1u32..4,
        ) {
            let mut g = Grid::new(rows, cols, radius).unwrap();
            let towers = place_towers(&mut g).unwrap();
            // No obstructions: every cell is reachable, so nothing stays Empty.
            prop_assert!(g.cells().iter().all(|&s| s != CellState::Empty));
            prop_assert!(towers.len() <= g.cell_count());
        }

        #[test]
        fn towers_never_stand_on_obstructions(
            rows in 2u32..10,
            cols in 2u32..10,
            seed in 0u64..50,
        ) {
            let mut g = Grid::new(rows, cols, 1).unwrap();
            relaygrid_grid::scatter_obstructions(&mut g, 0.3, seed).unwrap();
            let obstructed: Vec<Coord> = (0..rows as i32)
                .flat_map(|r| (0..cols as i32).map(move |c2| Coord::new(r, c2)))
                .filter(|&co| g.state(co).unwrap() == CellState::Obstructed)
                .collect();
            let towers = place_towers(&mut g).unwrap();
            for t in &towers {
                prop_assert!(!obstructed.contains(t));
                prop_assert_eq!(g.state(*t).unwrap(), CellState::Tower);
            }
            // Obstructions survive placement untouched.
            for o in &obstructed {
                prop_assert_eq!(g.state(*o).unwrap(), CellState::Obstructed);
            }
        }

        #[test]
        fn every_covered_cell_is_in_some_tower_footprint(
            rows in 2u32..9,
            cols in 2u32..9,
            radius in 1u32..3,
            seed in 0u64..50,
        ) {
            let mut g = Grid::new(rows, cols, radius).unwrap();
            relaygrid_grid::scatter_obstructions(&mut g, 0.2, seed).unwrap();
            place_towers(&mut g).unwrap();
            for r in 0..rows as i32 {
                for c2 in 0..cols as i32 {
                    let coord = Coord::new(r, c2);
                    if g.state(coord).unwrap() == CellState::Covered {
                        let in_range = g
                            .towers()
                            .iter()
                            .any(|&t| t.chebyshev(coord) <= radius);
                        prop_assert!(in_range, "covered cell {} has no tower in range", coord);
                    }
                }
            }
        }
    }
}
