//! Greedy coverage-driven tower placement.
//!
//! [`coverage_score`] measures how much new ground a candidate tower would
//! claim; [`place_towers`] commits the best-scoring candidate over and over
//! until no tower anywhere would cover a new cell.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod placer;
pub mod score;

pub use placer::place_towers;
pub use score::coverage_score;
