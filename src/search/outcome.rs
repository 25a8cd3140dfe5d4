//! Results of a placement search step

use crate::core::{Anchor, Direction, Grid};

/// A word committed to a segment, with the grid it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub grid: Grid,
    pub word: String,
    pub anchor: Anchor,
    pub direction: Direction,
    /// Cells that were empty before and hold a letter now
    pub letters_added: usize,
}

/// Result of one maximize step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The first candidate that fit, at the longest feasible span
    Placed(Placement),
    /// No candidate fits at any span of two or more cells
    NoPlacementFound,
}

impl StepOutcome {
    #[must_use]
    pub fn into_placement(self) -> Option<Placement> {
        match self {
            Self::Placed(placement) => Some(placement),
            Self::NoPlacementFound => None,
        }
    }
}

/// Verdict on a single candidate word
pub(crate) enum Attempt {
    Accepted(Grid),
    TryNext,
}
