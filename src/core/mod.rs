//! Core domain types for square word grids
//!
//! This module contains the grid model, segment patterns, and the error
//! taxonomy. Everything here is pure: no I/O, no global state.

mod error;
mod grid;
mod lexicon;
mod pattern;

pub use error::GridError;
pub use grid::{Anchor, Cell, Direction, Grid, words_in_line};
pub use lexicon::{Lexicon, lexicon_from};
pub use pattern::{Pattern, PatternError, WILDCARD};
