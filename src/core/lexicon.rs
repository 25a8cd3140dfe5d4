//! Word membership seam used by grid validation

use rustc_hash::FxHashSet;
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Anything that can answer "is this a word?"
///
/// Grid validation only needs exact membership, so it depends on this trait
/// rather than on a concrete dictionary.
pub trait Lexicon {
    fn contains(&self, word: &str) -> bool;
}

impl<S: BuildHasher> Lexicon for HashSet<String, S> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

/// Build an owned lexicon from string slices
#[must_use]
pub fn lexicon_from(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|w| w.to_ascii_lowercase()).collect()
}
