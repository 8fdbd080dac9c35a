//! Display-only overlay for a found route.

use indexmap::IndexMap;
use relaygrid_core::Coord;

use crate::astar::Route;

/// Display mark for one route cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteMarker {
    /// The route's first cell.
    Start,
    /// The route's last cell.
    End,
    /// An interior cell.
    Waypoint,
}

/// Display marks for the cells of a route.
///
/// The overlay is computed from a [`Route`] and never written back into the
/// grid: the logical `CellState` stays the source of truth, so annotating a
/// route cannot corrupt tower or obstruction identity. Building the overlay
/// twice from the same route yields the same overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOverlay {
    marks: IndexMap<Coord, RouteMarker>,
}

impl RouteOverlay {
    /// Build the overlay for `route`: first cell `Start`, last cell `End`,
    /// interior cells `Waypoint`.
    ///
    /// On a single-cell route the `End` mark wins — last write, matching
    /// the begin-then-end marking order of the annotation it renders.
    pub fn from_route(route: &Route) -> Self {
        let coords = route.coords();
        let mut marks = IndexMap::with_capacity(coords.len());
        if coords.len() > 2 {
            for &c in &coords[1..coords.len() - 1] {
                marks.insert(c, RouteMarker::Waypoint);
            }
        }
        marks.insert(route.start(), RouteMarker::Start);
        marks.insert(route.end(), RouteMarker::End);
        Self { marks }
    }

    /// The marker at `coord`, if the route passes through it.
    pub fn marker(&self, coord: Coord) -> Option<RouteMarker> {
        self.marks.get(&coord).copied()
    }

    /// Number of marked cells.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether the overlay marks nothing (only true for `Default`).
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Marked cells and their markers, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, RouteMarker)> + '_ {
        self.marks.iter().map(|(&c, &m)| (c, m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::find_route;
    use relaygrid_core::CellState;
    use relaygrid_grid::Grid;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    /// Routes are only constructed by the search, so derive one from a
    /// straight covered corridor of the given length.
    fn corridor_route(len: u32) -> Route {
        let mut grid = Grid::new(1, len, 1).unwrap();
        for col in 0..len as i32 {
            grid.set_state(c(0, col), CellState::Covered).unwrap();
        }
        find_route(&grid, c(0, 0), c(0, len as i32 - 1))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn marks_start_end_and_waypoints() {
        let route = corridor_route(4);
        let overlay = RouteOverlay::from_route(&route);
        assert_eq!(overlay.marker(c(0, 0)), Some(RouteMarker::Start));
        assert_eq!(overlay.marker(c(0, 1)), Some(RouteMarker::Waypoint));
        assert_eq!(overlay.marker(c(0, 2)), Some(RouteMarker::Waypoint));
        assert_eq!(overlay.marker(c(0, 3)), Some(RouteMarker::End));
        assert_eq!(overlay.marker(c(1, 1)), None);
        assert_eq!(overlay.len(), 4);
    }

    #[test]
    fn single_cell_route_is_marked_end() {
        let route = corridor_route(1);
        let overlay = RouteOverlay::from_route(&route);
        assert_eq!(overlay.marker(c(0, 0)), Some(RouteMarker::End));
        assert_eq!(overlay.len(), 1);
    }

    #[test]
    fn two_cell_route_has_no_waypoints() {
        let route = corridor_route(2);
        let overlay = RouteOverlay::from_route(&route);
        assert_eq!(overlay.marker(c(0, 0)), Some(RouteMarker::Start));
        assert_eq!(overlay.marker(c(0, 1)), Some(RouteMarker::End));
        assert_eq!(overlay.len(), 2);
    }

    #[test]
    fn building_twice_is_idempotent() {
        let route = corridor_route(3);
        let a = RouteOverlay::from_route(&route);
        let b = RouteOverlay::from_route(&route);
        assert_eq!(a, b);
    }

    #[test]
    fn default_overlay_is_empty() {
        let overlay = RouteOverlay::default();
        assert!(overlay.is_empty());
        assert_eq!(overlay.marker(c(0, 0)), None);
    }
}
