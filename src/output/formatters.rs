//! Formatting utilities for terminal output

use crate::core::Grid;

/// Placeholder drawn for an empty cell
pub const EMPTY_CELL: char = '·';

/// Draw a grid with box-drawing borders
///
/// # Examples
/// ```
/// use square_words::core::Grid;
/// use square_words::output::formatters::render_grid;
///
/// let grid = Grid::from_rows(&["ab", "c."]).unwrap();
/// assert_eq!(
///     render_grid(&grid),
///     "┌───┬───┐\n│ a │ b │\n├───┼───┤\n│ c │ · │\n└───┴───┘"
/// );
/// ```
#[must_use]
pub fn render_grid(grid: &Grid) -> String {
    let n = grid.length();
    let border = |left: &str, mid: &str, right: &str| {
        format!("{left}{}{right}", vec!["───"; n].join(mid))
    };

    let mut lines = Vec::with_capacity(2 * n + 1);
    lines.push(border("┌", "┬", "┐"));
    for (i, row) in (0..n).filter_map(|i| grid.row(i)).enumerate() {
        if i > 0 {
            lines.push(border("├", "┼", "┤"));
        }
        let cells: Vec<String> = row
            .iter()
            .map(|cell| format!(" {} ", cell.map_or(EMPTY_CELL, char::from)))
            .collect();
        lines.push(format!("│{}│", cells.join("│")));
    }
    lines.push(border("└", "┴", "┘"));

    lines.join("\n")
}

/// Grid rows with `.` for empty cells, readable by `Grid::from_rows`
#[must_use]
pub fn plain_rows(grid: &Grid) -> Vec<String> {
    grid.to_rows()
        .into_iter()
        .map(|row| row.replace(' ', "."))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn fill_bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value as f64 / max as f64) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Comma-separated word list
#[must_use]
pub fn format_words(words: &[String]) -> String {
    if words.is_empty() {
        return "(none)".to_string();
    }
    words.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_empty_grid() {
        let grid = Grid::empty(1).unwrap();
        assert_eq!(render_grid(&grid), "┌───┐\n│ · │\n└───┘");
    }

    #[test]
    fn render_has_one_line_per_row_and_border() {
        let grid = Grid::empty(4).unwrap();
        assert_eq!(render_grid(&grid).lines().count(), 9);
    }

    #[test]
    fn plain_rows_round_trip() {
        let grid = Grid::from_rows(&["ab.", "c..", "..."]).unwrap();
        let rows = plain_rows(&grid);
        assert_eq!(rows, vec!["ab.", "c..", "..."]);
        assert_eq!(Grid::from_rows(&rows).unwrap(), grid);
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(fill_bar(0, 64, 8), "░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(fill_bar(64, 64, 8), "████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(fill_bar(32, 64, 8), "████░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(fill_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn words_joined() {
        assert_eq!(format_words(&[]), "(none)");
        assert_eq!(
            format_words(&["cat".to_string(), "cow".to_string()]),
            "cat, cow"
        );
    }
}
