//! Placement search
//!
//! Fills one segment of a grid with the best-fitting word, greedily and
//! without backtracking.

mod engine;
mod outcome;

pub use engine::PlacementSearch;
pub use outcome::{Placement, StepOutcome};
