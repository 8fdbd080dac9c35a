//! The logical cell-state enum.

use std::fmt;

/// Logical state of a single grid cell.
///
/// Every cell is in exactly one state. `Obstructed` and `Tower` are
/// terminal: once a cell enters either state it never transitions again.
/// Route display marks (begin/end/waypoint glyphs) are not cell states;
/// they live in a separate overlay so that annotating a route can never
/// corrupt a cell's logical identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Unobstructed and not yet in range of any tower.
    Empty,
    /// Permanently blocked. Never covered, never buildable, never walkable.
    Obstructed,
    /// In range of at least one tower, but not itself a tower.
    Covered,
    /// A placed relay tower.
    Tower,
}

impl CellState {
    /// Whether a route may pass through this cell (`Covered` or `Tower`).
    pub fn is_passable(self) -> bool {
        matches!(self, CellState::Covered | CellState::Tower)
    }

    /// Whether a tower may be placed on this cell (`Empty` or `Covered`).
    pub fn is_placeable(self) -> bool {
        matches!(self, CellState::Empty | CellState::Covered)
    }

    /// Whether the state is terminal (`Obstructed` or `Tower`).
    ///
    /// Terminal cells reject every further transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, CellState::Obstructed | CellState::Tower)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellState::Empty => "empty",
            CellState::Obstructed => "obstructed",
            CellState::Covered => "covered",
            CellState::Tower => "tower",
        };
        write!(f, "{name}")
    }
}
