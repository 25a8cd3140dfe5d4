//! Generation loop
//!
//! Walks the anchor schedule, running one maximize step per pair and
//! adopting each result that adds letters. The loop stops at the first step
//! that makes no progress.

use super::config::{ConfigError, GeneratorConfig};
use super::schedule::schedule;
use crate::core::{Anchor, Direction, Grid, GridError};
use crate::lexicon::WordIndex;
use crate::ranking::RankingStrategy;
use crate::search::PlacementSearch;
use std::time::{Duration, Instant};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    /// Every scheduled pair made progress
    ScheduleExhausted,
    /// This pair found no placement, or one that added no letters
    Stalled {
        anchor: Anchor,
        direction: Direction,
    },
    /// The time limit passed between steps
    TimedOut { elapsed: Duration },
}

/// One adopted placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub anchor: Anchor,
    pub direction: Direction,
    pub word: String,
    pub letters_added: usize,
}

/// Final grid of a generation loop, with how it got there
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub grid: Grid,
    pub letter_count: usize,
    pub words: Vec<String>,
    pub steps: Vec<StepRecord>,
    pub status: GenerationStatus,
    pub elapsed: Duration,
}

/// Greedy grid generator
pub struct Generator<'a, S: RankingStrategy> {
    search: PlacementSearch<'a, S>,
    config: GeneratorConfig,
}

impl<'a, S: RankingStrategy> Generator<'a, S> {
    /// Create a generator over `index`, ranked by `strategy`
    ///
    /// # Errors
    /// Returns `ConfigError` if the config has a zero size or stride.
    pub fn new(
        index: &'a WordIndex,
        strategy: S,
        config: GeneratorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let search = PlacementSearch::new(index, strategy).with_parallel(config.parallel);
        Ok(Self { search, config })
    }

    /// Generate from an empty grid of the configured size
    ///
    /// # Errors
    /// Propagates grid faults; none are expected for a validated config.
    ///
    /// # Examples
    /// ```
    /// use square_words::generator::{Generator, GeneratorConfig};
    /// use square_words::lexicon::WordIndex;
    /// use square_words::ranking::LetterFrequency;
    ///
    /// let index = WordIndex::builtin();
    /// let generator = Generator::new(&index, LetterFrequency, GeneratorConfig::new(5, 2)).unwrap();
    /// let result = generator.run().unwrap();
    ///
    /// assert!(result.grid.is_valid(&index));
    /// assert_eq!(result.letter_count, result.grid.letter_count());
    /// ```
    pub fn run(&self) -> Result<GenerationResult, GridError> {
        self.run_from(Grid::empty(self.config.size)?)
    }

    /// Generate starting from an existing grid
    ///
    /// The schedule follows the size of `start`, not the configured size.
    ///
    /// # Errors
    /// Propagates grid faults from the placement search.
    pub fn run_from(&self, start: Grid) -> Result<GenerationResult, GridError> {
        let started = Instant::now();
        let mut grid = start;
        let mut steps = Vec::new();
        let mut status = GenerationStatus::ScheduleExhausted;

        for (anchor, direction) in schedule(grid.length(), self.config.stride) {
            if let Some(limit) = self.config.time_limit
                && started.elapsed() >= limit
            {
                status = GenerationStatus::TimedOut {
                    elapsed: started.elapsed(),
                };
                break;
            }

            let progress = self
                .search
                .maximize_step(&grid, anchor, direction)?
                .into_placement()
                .filter(|placement| placement.grid.letter_count() > grid.letter_count());

            let Some(placement) = progress else {
                log::debug!("Stalled at {anchor} {direction}");
                status = GenerationStatus::Stalled { anchor, direction };
                break;
            };

            steps.push(StepRecord {
                anchor,
                direction,
                word: placement.word,
                letters_added: placement.letters_added,
            });
            grid = placement.grid;
        }

        let letter_count = grid.letter_count();
        log::debug!(
            "Generation finished with {letter_count} letters after {} steps ({status:?})",
            steps.len()
        );

        Ok(GenerationResult {
            words: grid.extract_words(),
            letter_count,
            grid,
            steps,
            status,
            elapsed: started.elapsed(),
        })
    }
}
