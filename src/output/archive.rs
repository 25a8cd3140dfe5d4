//! Append-only archive of generated grids

use super::formatters::{format_words, plain_rows};
use crate::commands::RunSummary;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Text block recorded for one run
///
/// A header line, the grid rows, the word list and a blank separator line.
#[must_use]
pub fn format_entry(summary: &RunSummary) -> String {
    let result = &summary.result;
    let seed = summary
        .seed
        .map_or_else(|| "-".to_string(), |seed| seed.to_string());

    let mut entry = format!(
        "# {} letters, {}x{}, run {}, seed {seed}, ranking {}\n",
        result.letter_count,
        result.grid.length(),
        result.grid.length(),
        summary.run,
        summary.strategy
    );
    for row in plain_rows(&result.grid) {
        entry.push_str(&row);
        entry.push('\n');
    }
    entry.push_str(&format_words(&result.words));
    entry.push_str("\n\n");
    entry
}

/// Append the entry for `summary` to the file at `path`, creating it if needed
///
/// # Errors
/// Returns any I/O error from opening or writing the file.
pub fn append_result(path: &Path, summary: &RunSummary) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format_entry(summary).as_bytes())?;
    log::debug!(
        "Archived run {} ({} letters) to {}",
        summary.run,
        summary.result.letter_count,
        path.display()
    );
    Ok(())
}
