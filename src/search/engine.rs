//! Maximize-one-segment placement search

use super::outcome::{Attempt, Placement, StepOutcome};
use crate::core::{Anchor, Direction, Grid, GridError};
use crate::lexicon::WordIndex;
use crate::ranking::RankingStrategy;
use rayon::prelude::*;

/// Greedy placement search for a single segment
///
/// Tries the longest span first and, within a span, candidates in ranked
/// order. The first candidate that leaves the grid valid wins; nothing is
/// ever undone.
pub struct PlacementSearch<'a, S: RankingStrategy> {
    index: &'a WordIndex,
    strategy: S,
    parallel: bool,
}

impl<'a, S: RankingStrategy> PlacementSearch<'a, S> {
    /// Create a sequential search over `index`, ranked by `strategy`
    pub const fn new(index: &'a WordIndex, strategy: S) -> Self {
        Self {
            index,
            strategy,
            parallel: false,
        }
    }

    /// Evaluate the candidates of one span speculatively in parallel
    ///
    /// The accepted word is still the first fit in ranked order.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Find the best word to place at `anchor` along `direction`
    ///
    /// Spans run from the room left before the edge down to 2. For each
    /// span the segment's prototype is matched against the index and the
    /// ranked candidates are tried in order.
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` if the anchor lies outside the grid.
    /// Candidates that do not fit are never reported as errors.
    ///
    /// # Examples
    /// ```
    /// use square_words::core::{Anchor, Direction, Grid};
    /// use square_words::lexicon::WordIndex;
    /// use square_words::ranking::LengthOnly;
    /// use square_words::search::{PlacementSearch, StepOutcome};
    ///
    /// let index = WordIndex::from_words(["racecar", "ab"]);
    /// let search = PlacementSearch::new(&index, LengthOnly);
    /// let grid = Grid::empty(8).unwrap();
    ///
    /// match search.maximize_step(&grid, Anchor::new(0, 0), Direction::Vertical).unwrap() {
    ///     StepOutcome::Placed(placement) => assert_eq!(placement.word, "racecar"),
    ///     StepOutcome::NoPlacementFound => unreachable!(),
    /// }
    /// ```
    pub fn maximize_step(
        &self,
        grid: &Grid,
        anchor: Anchor,
        direction: Direction,
    ) -> Result<StepOutcome, GridError> {
        let max_span = grid.max_span(anchor, direction);

        for span in (2..=max_span).rev() {
            let prototype = grid.prototype(anchor, direction, span)?;
            let candidates = self
                .index
                .ranked_candidates(&prototype, span, &self.strategy);

            log::trace!(
                "{anchor} {direction} span {span}: pattern '{prototype}', {} candidates",
                candidates.len()
            );

            if let Some((word, next)) = self.first_fit(grid, &candidates, anchor, direction)? {
                let letters_added = next.letter_count() - grid.letter_count();
                log::debug!("Placed '{word}' at {anchor} {direction} (+{letters_added} letters)");

                return Ok(StepOutcome::Placed(Placement {
                    grid: next,
                    word: word.to_string(),
                    anchor,
                    direction,
                    letters_added,
                }));
            }
        }

        log::debug!("No placement found at {anchor} {direction}");
        Ok(StepOutcome::NoPlacementFound)
    }

    /// First candidate, in the given order, that places cleanly
    fn first_fit<'w>(
        &self,
        grid: &Grid,
        candidates: &[&'w str],
        anchor: Anchor,
        direction: Direction,
    ) -> Result<Option<(&'w str, Grid)>, GridError> {
        let accept = |word: &'w str| match self.attempt(grid, word, anchor, direction) {
            Ok(Attempt::Accepted(next)) => Some(Ok((word, next))),
            Ok(Attempt::TryNext) => None,
            Err(e) => Some(Err(e)),
        };

        let found = if self.parallel {
            candidates
                .par_iter()
                .find_map_first(|&word| accept(word))
        } else {
            candidates.iter().find_map(|&word| accept(word))
        };

        found.transpose()
    }

    /// Try one candidate, separating "does not fit" from genuine faults
    fn attempt(
        &self,
        grid: &Grid,
        word: &str,
        anchor: Anchor,
        direction: Direction,
    ) -> Result<Attempt, GridError> {
        match grid.place(word, anchor, direction, self.index) {
            Ok(next) => Ok(Attempt::Accepted(next)),
            Err(e) if e.is_recoverable() => {
                log::trace!("Rejected '{word}': {e}");
                Ok(Attempt::TryNext)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{LengthOnly, LetterFrequency, StrategyType};

    fn placed(outcome: StepOutcome) -> Placement {
        match outcome {
            StepOutcome::Placed(placement) => placement,
            StepOutcome::NoPlacementFound => panic!("expected a placement"),
        }
    }

    #[test]
    fn longest_fit_wins_on_empty_grid() {
        let index = WordIndex::from_words(["racecar", "aaa", "ab", "ac"]);
        let search = PlacementSearch::new(&index, LengthOnly);
        let grid = Grid::empty(8).unwrap();

        let placement = placed(
            search
                .maximize_step(&grid, Anchor::new(0, 0), Direction::Vertical)
                .unwrap(),
        );

        assert_eq!(placement.word, "racecar");
        assert_eq!(placement.letters_added, 7);
        assert_eq!(placement.grid.letter_count(), 7);
        assert_eq!(grid.letter_count(), 0);
    }

    #[test]
    fn fixed_letters_constrain_candidates() {
        let index = WordIndex::from_words(["racecar", "aaa", "ab", "ac", "rib"]);
        let search = PlacementSearch::new(&index, LengthOnly);
        let grid = Grid::from_rows(&["r   ", "    ", "    ", "    "]).unwrap();

        let placement = placed(
            search
                .maximize_step(&grid, Anchor::new(0, 0), Direction::Horizontal)
                .unwrap(),
        );
        assert_eq!(placement.word, "rib");
        assert_eq!(placement.letters_added, 2);
    }

    #[test]
    fn invalid_crossings_fall_through_to_next_candidate() {
        // "ab", "cd" and "ce" all form a non-word column under "cd"
        let index = WordIndex::from_words(["cd", "ab", "ef", "ce", "df"]);
        let search = PlacementSearch::new(&index, LengthOnly);
        let grid = Grid::from_rows(&["cd", "  "]).unwrap();

        let placement = placed(
            search
                .maximize_step(&grid, Anchor::new(1, 0), Direction::Horizontal)
                .unwrap(),
        );
        assert_eq!(placement.word, "df");
        assert_eq!(placement.grid.extract_words(), vec!["cd", "df", "cd", "df"]);
    }

    #[test]
    fn shorter_span_used_when_long_ones_fail() {
        // No 4-letter or 3-letter word fits; "ox" does
        let index = WordIndex::from_words(["zzzz", "qqq", "ox"]);
        let search = PlacementSearch::new(&index, LengthOnly);
        let grid = Grid::from_rows(&["o   ", "    ", "    ", "    "]).unwrap();

        let placement = placed(
            search
                .maximize_step(&grid, Anchor::new(0, 0), Direction::Horizontal)
                .unwrap(),
        );
        assert_eq!(placement.word, "ox");
    }

    #[test]
    fn rejected_long_match_falls_back_to_shorter_span() {
        // "abc" matches the full row but leaves "cx" down the last column
        let index = WordIndex::from_words(["abc", "ab"]);
        let grid = Grid::from_rows(&["...", "..x", "..."]).unwrap();
        let anchor = Anchor::new(0, 0);

        assert_eq!(index.match_str("___").unwrap(), vec!["abc"]);
        assert_eq!(
            grid.place("abc", anchor, Direction::Horizontal, &index),
            Err(GridError::InvalidResultingGrid {
                word: "cx".to_string()
            })
        );

        for parallel in [false, true] {
            let search = PlacementSearch::new(&index, LengthOnly).with_parallel(parallel);
            let placement = placed(
                search
                    .maximize_step(&grid, anchor, Direction::Horizontal)
                    .unwrap(),
            );
            assert_eq!(placement.word, "ab");
            assert_eq!(placement.grid.to_rows(), vec!["ab ", "  x", "   "]);
        }
    }

    #[test]
    fn no_placement_when_nothing_fits() {
        let index = WordIndex::from_words(["zz"]);
        let search = PlacementSearch::new(&index, LengthOnly);
        let grid = Grid::from_rows(&["a  ", "   ", "   "]).unwrap();

        let outcome = search
            .maximize_step(&grid, Anchor::new(0, 0), Direction::Horizontal)
            .unwrap();
        assert!(matches!(outcome, StepOutcome::NoPlacementFound));
    }

    #[test]
    fn no_placement_when_span_below_two() {
        let index = WordIndex::from_words(["ab"]);
        let search = PlacementSearch::new(&index, LengthOnly);
        let grid = Grid::empty(4).unwrap();

        let outcome = search
            .maximize_step(&grid, Anchor::new(0, 3), Direction::Horizontal)
            .unwrap();
        assert!(matches!(outcome, StepOutcome::NoPlacementFound));
    }

    #[test]
    fn anchor_outside_grid_is_an_error() {
        let index = WordIndex::from_words(["ab"]);
        let search = PlacementSearch::new(&index, LengthOnly);
        let grid = Grid::empty(4).unwrap();

        assert!(matches!(
            search.maximize_step(&grid, Anchor::new(0, 6), Direction::Vertical),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn parallel_search_matches_sequential() {
        let index = WordIndex::builtin();
        let grid = Grid::empty(6).unwrap();

        for strategy in [
            StrategyType::from_flags(false, None),
            StrategyType::from_flags(true, None),
            StrategyType::from_flags(true, Some(5)),
        ] {
            let sequential = PlacementSearch::new(&index, strategy);
            let parallel = PlacementSearch::new(&index, strategy).with_parallel(true);

            let a = placed(
                sequential
                    .maximize_step(&grid, Anchor::new(0, 0), Direction::Horizontal)
                    .unwrap(),
            );
            let b = placed(
                parallel
                    .maximize_step(&grid, Anchor::new(0, 0), Direction::Horizontal)
                    .unwrap(),
            );
            assert_eq!(a.word, b.word);
            assert_eq!(a.grid, b.grid);
        }
    }

    #[test]
    fn frequency_strategy_prefers_common_letters() {
        let index = WordIndex::from_words(["eee", "zzz", "eel", "see", "tee"]);
        let search = PlacementSearch::new(&index, LetterFrequency);
        let grid = Grid::empty(3).unwrap();

        let placement = placed(
            search
                .maximize_step(&grid, Anchor::new(0, 0), Direction::Horizontal)
                .unwrap(),
        );
        assert_eq!(placement.word, "eee");
    }
}
