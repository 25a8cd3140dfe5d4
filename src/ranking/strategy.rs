//! Candidate ranking strategies
//!
//! Defines the `RankingStrategy` trait and concrete implementations. Word
//! length always dominates the ordering (see
//! [`WordIndex::ranked_candidates`]); a strategy only supplies the weight
//! that orders words of equal length.

use crate::lexicon::WordIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// A secondary ranking factor for candidate words
pub trait RankingStrategy: Sync {
    /// Weight of `word`; higher is tried first among words of equal length
    fn weight(&self, word: &str, index: &WordIndex) -> f64;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum StrategyType {
    /// Length only, alphabetical among equals
    Length(LengthOnly),
    /// Prefer words built from common letters
    Frequency(LetterFrequency),
    /// Length only, shuffled per run
    RandomLength(Randomized<LengthOnly>),
    /// Letter frequency, jittered per run
    RandomFrequency(Randomized<LetterFrequency>),
}

impl RankingStrategy for StrategyType {
    fn weight(&self, word: &str, index: &WordIndex) -> f64 {
        match self {
            Self::Length(s) => s.weight(word, index),
            Self::Frequency(s) => s.weight(word, index),
            Self::RandomLength(s) => s.weight(word, index),
            Self::RandomFrequency(s) => s.weight(word, index),
        }
    }
}

impl StrategyType {
    /// Create a strategy from the two ranking toggles
    ///
    /// `seed` enables randomization; `None` keeps the ranking deterministic.
    #[must_use]
    pub const fn from_flags(use_frequency: bool, seed: Option<u64>) -> Self {
        match (use_frequency, seed) {
            (false, None) => Self::Length(LengthOnly),
            (true, None) => Self::Frequency(LetterFrequency),
            (false, Some(seed)) => Self::RandomLength(Randomized::new(LengthOnly, seed)),
            (true, Some(seed)) => Self::RandomFrequency(Randomized::new(LetterFrequency, seed)),
        }
    }

    /// Short human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Length(_) => "length",
            Self::Frequency(_) => "frequency",
            Self::RandomLength(_) => "random",
            Self::RandomFrequency(_) => "random-frequency",
        }
    }

    #[must_use]
    pub const fn is_randomized(&self) -> bool {
        matches!(self, Self::RandomLength(_) | Self::RandomFrequency(_))
    }
}

/// Ranking toggles as configured by the user
#[derive(Debug, Clone, Copy)]
pub struct RankingConfig {
    /// Prefer words made of common letters
    pub use_frequency: bool,
    /// Jitter the ranking per run
    pub randomize: bool,
    /// Base seed for randomized runs; drawn fresh when `None`
    pub seed: Option<u64>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            use_frequency: true,
            randomize: false,
            seed: None,
        }
    }
}

impl RankingConfig {
    /// Base seed for this invocation
    ///
    /// Returns the configured seed, or a fresh one when randomizing without
    /// a seed. `None` when the ranking is not randomized.
    #[must_use]
    pub fn resolve_seed(&self) -> Option<u64> {
        self.randomize
            .then(|| self.seed.unwrap_or_else(|| rand::rng().random()))
    }

    /// Strategy for run number `run`, given the resolved base seed
    #[must_use]
    pub const fn strategy_for_run(&self, base_seed: Option<u64>, run: u64) -> StrategyType {
        let seed = match base_seed {
            Some(seed) if self.randomize => Some(seed.wrapping_add(run)),
            _ => None,
        };
        StrategyType::from_flags(self.use_frequency, seed)
    }
}

/// Length-only ranking
///
/// Every word weighs the same, so ties fall back to alphabetical order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthOnly;

impl RankingStrategy for LengthOnly {
    fn weight(&self, _word: &str, _index: &WordIndex) -> f64 {
        1.0
    }
}

/// Letter-frequency ranking
///
/// Weighs a word by the mean dictionary-wide frequency of its letters, so
/// "easy" words that leave crossable letters come first.
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterFrequency;

impl RankingStrategy for LetterFrequency {
    fn weight(&self, word: &str, index: &WordIndex) -> f64 {
        index.average_frequency(word)
    }
}

/// Per-run random multiplier over another strategy
///
/// The multiplier for a word is derived from the seed and the word itself,
/// so a given seed always produces the same order and the ranking stays a
/// pure function of its inputs.
#[derive(Debug, Clone, Copy)]
pub struct Randomized<S> {
    inner: S,
    seed: u64,
}

impl<S> Randomized<S> {
    /// Smallest multiplier applied to the inner weight
    pub const MIN_FACTOR: f64 = 0.5;
    /// Upper bound (exclusive) of the multiplier
    pub const MAX_FACTOR: f64 = 1.5;

    #[must_use]
    pub const fn new(inner: S, seed: u64) -> Self {
        Self { inner, seed }
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    fn multiplier(&self, word: &str) -> f64 {
        let mut hasher = FxHasher::default();
        word.hash(&mut hasher);
        let mut rng = StdRng::seed_from_u64(self.seed ^ hasher.finish());
        rng.random_range(Self::MIN_FACTOR..Self::MAX_FACTOR)
    }
}

impl<S: RankingStrategy> RankingStrategy for Randomized<S> {
    fn weight(&self, word: &str, index: &WordIndex) -> f64 {
        self.inner.weight(word, index) * self.multiplier(word)
    }
}
