//! Error types for grid construction and access.

use crate::cell::CellState;
use crate::coord::Coord;
use std::fmt;

/// Errors arising from grid construction, cell access, or obstruction
/// scattering.
///
/// A route search that exhausts its frontier is not represented here: "no
/// route" is a normal negative result reported through the search's return
/// value, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A dimension or the coverage radius is zero, or a dimension exceeds
    /// the `i32` coordinate range.
    InvalidDimension {
        /// Which parameter was rejected (`"rows"`, `"cols"`, or `"radius"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// A coordinate is outside the grid bounds.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to overwrite a terminal (`Obstructed` or `Tower`) cell.
    InvalidTransition {
        /// The cell whose state was to change.
        coord: Coord,
        /// The cell's current state.
        from: CellState,
        /// The rejected target state.
        to: CellState,
    },
    /// An obstruction fraction that is not finite, not within `[0, 1]`, or
    /// that asks for more obstructions than the grid has empty cells.
    InvalidFraction {
        /// The rejected fraction.
        value: f64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { name, value } => {
                write!(
                    f,
                    "invalid {name}: {value} (must be in [1, {}])",
                    i32::MAX
                )
            }
            Self::OutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::InvalidTransition { coord, from, to } => {
                write!(f, "cell {coord} is {from} and cannot become {to}")
            }
            Self::InvalidFraction { value } => {
                write!(f, "invalid obstruction fraction: {value}")
            }
        }
    }
}

impl std::error::Error for GridError {}
