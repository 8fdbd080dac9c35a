//! The obstructed coverage grid for relaygrid.
//!
//! This crate owns the mutable grid structure the planning and routing
//! crates operate on: a dense row-major cell array, the coverage radius,
//! and the insertion-ordered tower registry. It also provides the seeded
//! obstruction scatterer that sets up a grid before planning starts.
//!
//! Coordinates never wrap. [`Grid::neighbourhood`] clips to the bounds by
//! design; single-cell access fails loudly on out-of-range input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod scatter;

pub use grid::Grid;
pub use scatter::scatter_obstructions;
