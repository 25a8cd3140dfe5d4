//! Grid error taxonomy

use super::{Anchor, Direction};
use std::fmt;

/// Error type for grid construction, reads and placements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Grid size is zero, or rows are missing or of unequal length
    InvalidDimension(String),
    /// A row string holds a character that is neither a letter nor an empty marker
    InvalidCell { row: usize, col: usize, ch: char },
    /// A word to place holds a non-letter character
    InvalidLetter(char),
    /// A cell read outside the grid
    CellOutOfBounds { row: usize, col: usize, length: usize },
    /// A segment reaches past the grid edge
    OutOfBounds {
        anchor: Anchor,
        direction: Direction,
        span: usize,
    },
    /// Word is longer than the grid or than the room left before the edge
    WordTooLong { len: usize, max: usize },
    /// A filled cell holds a different letter than the word supplies
    ConflictingCell {
        row: usize,
        col: usize,
        existing: char,
        wanted: char,
    },
    /// The placement would leave a run that is not a dictionary word
    InvalidResultingGrid { word: String },
}

impl GridError {
    /// True for outcomes that only mean "this candidate does not fit"
    ///
    /// The placement search moves on to the next candidate for these and
    /// never reports them.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::WordTooLong { .. } | Self::ConflictingCell { .. } | Self::InvalidResultingGrid { .. }
        )
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension(reason) => write!(f, "Invalid grid dimension: {reason}"),
            Self::InvalidCell { row, col, ch } => {
                write!(f, "Invalid cell {ch:?} at row {row}, column {col}")
            }
            Self::InvalidLetter(ch) => write!(f, "Word contains non-letter character {ch:?}"),
            Self::CellOutOfBounds { row, col, length } => {
                write!(f, "Cell ({row}, {col}) lies outside the {length}x{length} grid")
            }
            Self::OutOfBounds {
                anchor,
                direction,
                span,
            } => write!(
                f,
                "Segment of {span} cells from {anchor} going {direction} leaves the grid"
            ),
            Self::WordTooLong { len, max } => {
                write!(f, "Word of {len} letters does not fit in {max} cells")
            }
            Self::ConflictingCell {
                row,
                col,
                existing,
                wanted,
            } => write!(
                f,
                "Cell ({row}, {col}) already holds '{existing}', cannot write '{wanted}'"
            ),
            Self::InvalidResultingGrid { word } => {
                write!(f, "Placement would create non-word '{word}'")
            }
        }
    }
}

impl std::error::Error for GridError {}
