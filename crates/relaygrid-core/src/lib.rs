//! Core types for the relaygrid coverage planner.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate type and its two distance metrics, the logical cell-state
//! enum, and the shared error type used throughout the relaygrid workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod error;

pub use cell::CellState;
pub use coord::Coord;
pub use error::GridError;
