//! Square word grid
//!
//! A `Grid` is an immutable snapshot of an N×N matrix of cells. Placing a
//! word never touches the receiver; it returns a new snapshot, so a failed
//! attempt leaves the caller's grid exactly as it was.

use super::{GridError, Lexicon, Pattern};
use std::fmt;

/// A single cell: `None` when empty, otherwise a lowercase ASCII letter
pub type Cell = Option<u8>;

/// Orientation of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Down a column
    Vertical,
    /// Along a row
    Horizontal,
}

impl Direction {
    /// Row and column increments for one step along this direction
    #[inline]
    #[must_use]
    pub const fn step(self) -> (usize, usize) {
        match self {
            Self::Vertical => (1, 0),
            Self::Horizontal => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => write!(f, "vertical"),
            Self::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// Starting cell of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Anchor {
    pub row: usize,
    pub col: usize,
}

impl Anchor {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell `offset` steps away along `direction`
    #[inline]
    #[must_use]
    pub const fn offset(self, direction: Direction, offset: usize) -> Self {
        let (dr, dc) = direction.step();
        Self {
            row: self.row + dr * offset,
            col: self.col + dc * offset,
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable N×N word grid, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    length: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid
    ///
    /// # Errors
    /// Returns `GridError::InvalidDimension` if `length` is zero.
    ///
    /// # Examples
    /// ```
    /// use square_words::core::Grid;
    ///
    /// let grid = Grid::empty(8).unwrap();
    /// assert_eq!(grid.letter_count(), 0);
    /// assert_eq!(grid.remaining_capacity(), 64);
    /// ```
    pub fn empty(length: usize) -> Result<Self, GridError> {
        if length == 0 {
            return Err(GridError::InvalidDimension(
                "grid size must be positive".to_string(),
            ));
        }
        let Some(area) = length.checked_mul(length) else {
            return Err(GridError::InvalidDimension(format!(
                "a {length}x{length} grid has too many cells"
            )));
        };

        Ok(Self {
            length,
            cells: vec![None; area],
        })
    }

    /// Create a grid from row strings
    ///
    /// The grid size is the width of the rows. A space, `.` or `_` is an
    /// empty cell; letters are lowercased. Rows missing at the bottom are
    /// empty, so `["ab  ", "c   "]` describes a 4×4 grid.
    ///
    /// # Errors
    /// Returns `GridError::InvalidDimension` if there are no rows, the rows
    /// differ in width, or there are more rows than columns, and
    /// `GridError::InvalidCell` for any other character.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::InvalidDimension("no rows given".to_string()));
        };

        let length = first.as_ref().chars().count();
        let mut grid = Self::empty(length)?;

        if rows.len() > length {
            return Err(GridError::InvalidDimension(format!(
                "{} rows given for a grid {length} wide",
                rows.len()
            )));
        }

        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let width = text.chars().count();
            if width != length {
                return Err(GridError::InvalidDimension(format!(
                    "row {row} is {width} wide, expected {length}"
                )));
            }

            for (col, ch) in text.chars().enumerate() {
                grid.cells[row * length + col] = match ch {
                    ' ' | '.' | '_' => None,
                    c if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase() as u8),
                    c => return Err(GridError::InvalidCell { row, col, ch: c }),
                };
            }
        }

        Ok(grid)
    }

    /// Side length of the grid
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Bounds-checked cell read
    ///
    /// # Errors
    /// Returns `GridError::CellOutOfBounds` if the cell lies outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        if row >= self.length || col >= self.length {
            return Err(GridError::CellOutOfBounds {
                row,
                col,
                length: self.length,
            });
        }
        Ok(self.cells[row * self.length + col])
    }

    /// Cells of row `i`, left to right
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[Cell]> {
        (i < self.length).then(|| &self.cells[i * self.length..(i + 1) * self.length])
    }

    /// Cells of column `j`, top to bottom
    #[must_use]
    pub fn column(&self, j: usize) -> Option<Vec<Cell>> {
        (j < self.length).then(|| {
            self.cells
                .iter()
                .skip(j)
                .step_by(self.length)
                .copied()
                .collect()
        })
    }

    /// All rows followed by all columns
    #[must_use]
    pub fn all_lines(&self) -> Vec<Vec<Cell>> {
        let rows = self.cells.chunks(self.length).map(<[Cell]>::to_vec);
        let columns = (0..self.length).filter_map(|j| self.column(j));
        rows.chain(columns).collect()
    }

    /// Every run of two or more letters, rows first, then columns
    ///
    /// Duplicates are kept: the same word may legitimately appear twice.
    ///
    /// # Examples
    /// ```
    /// use square_words::core::Grid;
    ///
    /// let grid = Grid::from_rows(&["ab      ", "c       "]).unwrap();
    /// assert_eq!(grid.extract_words(), vec!["ab", "ac"]);
    /// ```
    #[must_use]
    pub fn extract_words(&self) -> Vec<String> {
        self.all_lines()
            .iter()
            .flat_map(|line| words_in_line(line))
            .collect()
    }

    /// Number of filled cells
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Number of empty cells
    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        self.cells.len() - self.letter_count()
    }

    /// Room left between `anchor` and the grid edge along `direction`
    ///
    /// Zero when the anchor's leading coordinate is already past the edge.
    #[must_use]
    pub const fn max_span(&self, anchor: Anchor, direction: Direction) -> usize {
        match direction {
            Direction::Vertical => self.length.saturating_sub(anchor.row),
            Direction::Horizontal => self.length.saturating_sub(anchor.col),
        }
    }

    /// Coordinates covered by a segment
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` if any of them lies outside the grid.
    pub fn cells_along(
        &self,
        anchor: Anchor,
        direction: Direction,
        span: usize,
    ) -> Result<Vec<Anchor>, GridError> {
        let in_grid = anchor.row < self.length && anchor.col < self.length;
        if !in_grid || span > self.max_span(anchor, direction) {
            return Err(GridError::OutOfBounds {
                anchor,
                direction,
                span,
            });
        }

        Ok((0..span).map(|i| anchor.offset(direction, i)).collect())
    }

    /// Current state of a segment as a pattern
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` if the segment leaves the grid.
    pub fn prototype(
        &self,
        anchor: Anchor,
        direction: Direction,
        span: usize,
    ) -> Result<Pattern, GridError> {
        let slots = self
            .cells_along(anchor, direction, span)?
            .into_iter()
            .map(|pos| self.cells[pos.row * self.length + pos.col])
            .collect();
        Ok(Pattern::from_slots(slots))
    }

    /// Write a word without checking the result against a lexicon
    ///
    /// Empty cells take the word's letter; filled cells must already hold it.
    ///
    /// # Errors
    /// - `WordTooLong` if the word is longer than the grid, whatever it holds
    /// - `InvalidLetter` if the word holds anything but lowercase ASCII letters
    /// - `OutOfBounds` if the anchor lies outside the grid
    /// - `WordTooLong` if the word is longer than the room left
    /// - `ConflictingCell` if a filled cell holds a different letter
    pub fn write_word(
        &self,
        word: &str,
        anchor: Anchor,
        direction: Direction,
    ) -> Result<Self, GridError> {
        let len = word.chars().count();
        if len > self.length {
            return Err(GridError::WordTooLong {
                len,
                max: self.length,
            });
        }
        if let Some(bad) = word.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(GridError::InvalidLetter(bad));
        }
        if anchor.row >= self.length || anchor.col >= self.length {
            return Err(GridError::OutOfBounds {
                anchor,
                direction,
                span: len,
            });
        }
        let room = self.max_span(anchor, direction);
        if len > room {
            return Err(GridError::WordTooLong { len, max: room });
        }

        let mut next = self.clone();
        for (i, letter) in word.bytes().enumerate() {
            let pos = anchor.offset(direction, i);
            let cell = &mut next.cells[pos.row * self.length + pos.col];
            match *cell {
                None => *cell = Some(letter),
                Some(existing) if existing == letter => {}
                Some(existing) => {
                    return Err(GridError::ConflictingCell {
                        row: pos.row,
                        col: pos.col,
                        existing: char::from(existing),
                        wanted: char::from(letter),
                    });
                }
            }
        }

        Ok(next)
    }

    /// Place a word and check that the whole resulting grid is valid
    ///
    /// # Errors
    /// Everything [`Grid::write_word`] reports, plus
    /// `InvalidResultingGrid` when some run in the new grid is not in
    /// `lexicon`.
    ///
    /// # Examples
    /// ```
    /// use square_words::core::{Anchor, Direction, Grid, lexicon_from};
    ///
    /// let lexicon = lexicon_from(&["aaa"]);
    /// let grid = Grid::empty(8).unwrap();
    /// let placed = grid
    ///     .place("aaa", Anchor::new(1, 0), Direction::Vertical, &lexicon)
    ///     .unwrap();
    ///
    /// assert_eq!(grid.letter_count(), 0);
    /// assert_eq!(placed.letter_count(), 3);
    /// ```
    pub fn place<L: Lexicon + ?Sized>(
        &self,
        word: &str,
        anchor: Anchor,
        direction: Direction,
        lexicon: &L,
    ) -> Result<Self, GridError> {
        let next = self.write_word(word, anchor, direction)?;

        if let Some(word) = next.invalid_words(lexicon).into_iter().next() {
            return Err(GridError::InvalidResultingGrid { word });
        }

        Ok(next)
    }

    /// Runs that are not in `lexicon`, in extraction order
    #[must_use]
    pub fn invalid_words<L: Lexicon + ?Sized>(&self, lexicon: &L) -> Vec<String> {
        self.extract_words()
            .into_iter()
            .filter(|word| !lexicon.contains(word))
            .collect()
    }

    /// True when every run of two or more letters is in `lexicon`
    #[must_use]
    pub fn is_valid<L: Lexicon + ?Sized>(&self, lexicon: &L) -> bool {
        self.all_lines()
            .iter()
            .flat_map(|line| words_in_line(line))
            .all(|word| lexicon.contains(&word))
    }

    /// Rows as strings, with a space for each empty cell
    ///
    /// `Grid::from_rows(&grid.to_rows())` reproduces the grid.
    #[must_use]
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.length)
            .map(|row| row.iter().map(|cell| cell.map_or(' ', char::from)).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Split a line on empty cells, keeping runs of two or more letters
#[must_use]
pub fn words_in_line(line: &[Cell]) -> Vec<String> {
    line.split(Option::is_none)
        .filter(|run| run.len() > 1)
        .map(|run| run.iter().flatten().map(|&b| char::from(b)).collect())
        .collect()
}
