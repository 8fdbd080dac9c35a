//! Best-first route search between towers over covered ground.
//!
//! [`find_route`] runs an A*-style search through `Covered` and `Tower`
//! cells; [`RouteOverlay`] turns a found [`Route`] into display marks
//! without ever touching the grid's logical state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod astar;
pub mod overlay;

pub use astar::{find_route, Route};
pub use overlay::{RouteMarker, RouteOverlay};
