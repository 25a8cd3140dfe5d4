//! Check command
//!
//! Validates a grid given as rows of text against a dictionary.

use crate::core::{Grid, GridError};
use crate::lexicon::WordIndex;

/// Result of checking a grid
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub grid: Grid,
    /// Every word in the grid, rows first, with its dictionary membership
    pub words: Vec<(String, bool)>,
    pub letter_count: usize,
    pub valid: bool,
}

impl CheckReport {
    /// Words that are not in the dictionary
    pub fn invalid_words(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .filter(|(_, known)| !known)
            .map(|(word, _)| word.as_str())
    }
}

/// Parse `rows` into a grid and check every word in it
///
/// # Errors
/// Returns `GridError` if the rows do not form a square grid of letters and
/// empty markers.
pub fn check_grid<S: AsRef<str>>(
    rows: &[S],
    index: &WordIndex,
) -> Result<CheckReport, GridError> {
    let grid = Grid::from_rows(rows)?;
    let words: Vec<(String, bool)> = grid
        .extract_words()
        .into_iter()
        .map(|word| {
            let known = index.contains(&word);
            (word, known)
        })
        .collect();
    let valid = words.iter().all(|(_, known)| *known);

    log::debug!("Checked {} words, valid: {valid}", words.len());

    Ok(CheckReport {
        letter_count: grid.letter_count(),
        grid,
        words,
        valid,
    })
}
