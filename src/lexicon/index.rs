//! Word index
//!
//! Holds the dictionary, a length-partitioned view of it, and global letter
//! frequencies. Built once and read-only afterwards.

use super::loader::{LexiconError, load_from_file, normalize, words_from_slice};
use super::BUILTIN;
use crate::core::{Lexicon, Pattern, PatternError};
use crate::ranking::RankingStrategy;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;

/// Dictionary indexed by word length, with letter-frequency statistics
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    dictionary: FxHashSet<String>,
    by_length: FxHashMap<usize, Vec<String>>,
    letter_frequency: FxHashMap<u8, usize>,
}

impl WordIndex {
    /// Build an index from in-memory words
    ///
    /// Entries are normalized the same way file entries are; duplicates
    /// collapse.
    ///
    /// # Examples
    /// ```
    /// use square_words::lexicon::WordIndex;
    ///
    /// let index = WordIndex::from_words(["Cat", "cat", "cow"]);
    /// assert_eq!(index.len(), 2);
    /// assert!(index.contains("cat"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary: FxHashSet<String> = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();

        let mut by_length: FxHashMap<usize, Vec<String>> = FxHashMap::default();
        let mut letter_frequency: FxHashMap<u8, usize> = FxHashMap::default();

        for word in &dictionary {
            by_length.entry(word.len()).or_default().push(word.clone());
            for letter in word.bytes() {
                *letter_frequency.entry(letter).or_insert(0) += 1;
            }
        }

        // Hash-set iteration order is arbitrary; buckets must not be
        for bucket in by_length.values_mut() {
            bucket.sort_unstable();
        }

        Self {
            dictionary,
            by_length,
            letter_frequency,
        }
    }

    /// Load and merge one or more word list files
    ///
    /// # Errors
    /// Returns `LexiconError::SourceUnavailable` for the first file that
    /// cannot be read.
    pub fn load<P: AsRef<Path>>(sources: &[P]) -> Result<Self, LexiconError> {
        let mut words = Vec::new();
        for source in sources {
            let loaded = load_from_file(source)?;
            log::debug!(
                "Read {} entries from {}",
                loaded.len(),
                source.as_ref().display()
            );
            words.extend(loaded);
        }
        Ok(Self::from_words(words))
    }

    /// Index over the embedded word list
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_words(words_from_slice(BUILTIN))
    }

    /// Exact membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Every word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.dictionary.iter().map(String::as_str)
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    /// Words of exactly `n` letters, sorted alphabetically
    #[must_use]
    pub fn words_of_length(&self, n: usize) -> &[String] {
        self.by_length.get(&n).map_or(&[], Vec::as_slice)
    }

    /// Occurrences of `letter` across the whole dictionary
    #[must_use]
    pub fn letter_frequency(&self, letter: u8) -> usize {
        self.letter_frequency.get(&letter).copied().unwrap_or(0)
    }

    /// Mean global frequency of the word's letters
    ///
    /// Higher means the word is built from common letters and is easier to
    /// cross. Zero for the empty word.
    #[must_use]
    pub fn average_frequency(&self, word: &str) -> f64 {
        if word.is_empty() {
            return 0.0;
        }
        let total: usize = word.bytes().map(|b| self.letter_frequency(b)).sum();
        total as f64 / word.len() as f64
    }

    /// Every word with exactly `pattern.len()` letters that fits the pattern
    ///
    /// Results follow bucket order. An empty pattern matches nothing.
    #[must_use]
    pub fn match_pattern(&self, pattern: &Pattern) -> Vec<&str> {
        if pattern.is_empty() {
            return Vec::new();
        }

        let bucket = self.words_of_length(pattern.len());
        if pattern.is_open() {
            return bucket.iter().map(String::as_str).collect();
        }

        bucket
            .iter()
            .filter(|word| pattern.matches(word))
            .map(String::as_str)
            .collect()
    }

    /// Parse `text` as a pattern and match it
    ///
    /// # Errors
    /// Returns `PatternError::InvalidPattern` for characters that are
    /// neither letters nor wildcard markers.
    pub fn match_str(&self, text: &str) -> Result<Vec<&str>, PatternError> {
        let pattern = Pattern::parse(text)?;
        Ok(self.match_pattern(&pattern))
    }

    /// Matches for `pattern` no longer than `max_length`, best first
    ///
    /// Ordering key: length descending, then the strategy's weight
    /// descending, then alphabetical. The result is a plain list, so
    /// callers can walk it as often as they like.
    ///
    /// # Examples
    /// ```
    /// use square_words::core::Pattern;
    /// use square_words::lexicon::WordIndex;
    /// use square_words::ranking::LengthOnly;
    ///
    /// let index = WordIndex::from_words(["cat", "cot", "cut", "dog"]);
    /// let pattern = Pattern::parse("c_t").unwrap();
    /// let ranked = index.ranked_candidates(&pattern, 3, &LengthOnly);
    /// assert_eq!(ranked, vec!["cat", "cot", "cut"]);
    /// ```
    pub fn ranked_candidates<S: RankingStrategy + ?Sized>(
        &self,
        pattern: &Pattern,
        max_length: usize,
        strategy: &S,
    ) -> Vec<&str> {
        let mut scored: Vec<(&str, f64)> = self
            .match_pattern(pattern)
            .into_iter()
            .filter(|word| word.len() <= max_length)
            .map(|word| (word, strategy.weight(word, self)))
            .collect();

        scored.sort_by(|(a, weight_a), (b, weight_b)| {
            b.len()
                .cmp(&a.len())
                .then_with(|| weight_b.total_cmp(weight_a))
                .then_with(|| a.cmp(b))
        });

        scored.into_iter().map(|(word, _)| word).collect()
    }
}

impl Lexicon for WordIndex {
    fn contains(&self, word: &str) -> bool {
        Self::contains(self, word)
    }
}
