//! Word list loading utilities
//!
//! Reads newline-delimited word lists from disk or from embedded constants
//! and normalizes their entries.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for unreadable word sources
#[derive(Debug)]
pub enum LexiconError {
    SourceUnavailable { path: PathBuf, source: io::Error },
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable { path, source } => {
                write!(f, "Cannot read word list {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceUnavailable { source, .. } => Some(source),
        }
    }
}

/// Normalize one raw entry
///
/// Trims whitespace and lowercases. Returns `None` for empty lines and for
/// entries holding anything but ASCII letters, since those can never be
/// written into grid cells.
#[must_use]
pub fn normalize(entry: &str) -> Option<String> {
    let word = entry.trim().to_lowercase();
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }
    Some(word)
}

/// Load words from a file
///
/// Returns the normalized entries in file order, skipping any that
/// [`normalize`] rejects. Duplicates are kept; the index collapses them.
///
/// # Errors
///
/// Returns `LexiconError::SourceUnavailable` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use square_words::lexicon::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LexiconError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LexiconError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().filter_map(normalize).collect())
}

/// Normalize an embedded string slice
///
/// # Examples
/// ```
/// use square_words::lexicon::loader::words_from_slice;
///
/// let words = words_from_slice(&["Cat", " dog ", "it's"]);
/// assert_eq!(words, vec!["cat", "dog"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize(s)).collect()
}
