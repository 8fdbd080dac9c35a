//! A*-style search over the 8-connected passable graph.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use relaygrid_core::{Coord, GridError};
use relaygrid_grid::Grid;

/// A walkable route between two towers.
///
/// Coordinates run from the start tower to the end tower inclusive.
/// Consecutive entries are Chebyshev-adjacent; interior entries are
/// passable (`Covered` or `Tower`) cells of the grid the route was found
/// on. A route holds at least one coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route(Vec<Coord>);

impl Route {
    /// The coordinates, start first.
    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    /// The first coordinate.
    pub fn start(&self) -> Coord {
        self.0[0]
    }

    /// The last coordinate.
    pub fn end(&self) -> Coord {
        self.0[self.0.len() - 1]
    }

    /// Number of coordinates, endpoints included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` — a route holds at least its start coordinate.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// An open-set entry. The heap orders entries by `(f, seq)`.
///
/// `seq` is a per-search insertion counter: among equal f-scores the entry
/// pushed earliest pops first. The tie-break is deliberately insertion
/// order — any deterministic rule would do, and this one is explicit
/// instead of an accident of coordinate comparison.
struct Frontier {
    f: u32,
    seq: u64,
    g: u32,
    coord: Coord,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.f, self.seq).cmp(&(other.f, other.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Find a route from `start` to `end` through passable cells.
///
/// Best-first search with priority `f = g + manhattan(coord, end)`, where
/// `g` counts edges traversed. Successors are the 8-connected in-bounds
/// neighbours whose state is `Covered` or `Tower`; `Empty` and
/// `Obstructed` cells are impassable. A popped coordinate is never
/// re-expanded, which guarantees termination at the cost of strict
/// optimality under the tie-break.
///
/// `start == end` short-circuits to a single-coordinate route.
///
/// Returns `Ok(None)` when the frontier empties without reaching `end`:
/// the two endpoints are not connected through covered territory. That is
/// a normal negative result, not an error.
///
/// # Errors
///
/// `OutOfBounds` if either endpoint lies outside the grid.
pub fn find_route(grid: &Grid, start: Coord, end: Coord) -> Result<Option<Route>, GridError> {
    grid.state(start)?;
    grid.state(end)?;
    if start == end {
        return Ok(Some(Route(vec![start])));
    }

    let mut open: BinaryHeap<Reverse<Frontier>> = BinaryHeap::new();
    let mut closed: HashSet<Coord> = HashSet::new();
    // Parent of each discovered coordinate, fixed at first discovery.
    // Every parent edge is a real passable adjacency, so the chain back to
    // `start` is always a valid walk even when a later entry for the same
    // coordinate carries a better f-score.
    let mut parent: HashMap<Coord, Coord> = HashMap::new();
    let mut seq = 0u64;

    open.push(Reverse(Frontier {
        f: start.manhattan(end),
        seq,
        g: 0,
        coord: start,
    }));

    while let Some(Reverse(node)) = open.pop() {
        if node.coord == end {
            return Ok(Some(reconstruct(&parent, start, end)));
        }
        if !closed.insert(node.coord) {
            continue;
        }
        for nb in grid.adjacent(node.coord) {
            if closed.contains(&nb) {
                continue;
            }
            let passable = matches!(grid.state(nb), Ok(s) if s.is_passable());
            if !passable {
                continue;
            }
            parent.entry(nb).or_insert(node.coord);
            seq += 1;
            let g = node.g + 1;
            open.push(Reverse(Frontier {
                f: g + nb.manhattan(end),
                seq,
                g,
                coord: nb,
            }));
        }
    }

    Ok(None)
}

/// Walk the parent chain from `end` back to `start` and reverse it.
fn reconstruct(parent: &HashMap<Coord, Coord>, start: Coord, end: Coord) -> Route {
    let mut coords = vec![end];
    let mut cursor = end;
    while cursor != start {
        // Every discovered non-start coordinate was given a parent when it
        // first entered the open set.
        match parent.get(&cursor) {
            Some(&p) => {
                coords.push(p);
                cursor = p;
            }
            None => break,
        }
    }
    coords.reverse();
    Route(coords)
}
