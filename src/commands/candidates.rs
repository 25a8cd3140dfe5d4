//! Candidates command
//!
//! Lists dictionary words matching a pattern in the order the placement
//! search would try them.

use crate::core::{Pattern, PatternError};
use crate::lexicon::WordIndex;
use crate::ranking::RankingStrategy;

/// Ranked matches for `pattern`, at most `limit` of them
///
/// # Errors
/// Returns `PatternError` if `pattern` contains a character that is neither
/// a letter nor a wildcard.
///
/// # Examples
/// ```
/// use square_words::commands::list_candidates;
/// use square_words::lexicon::WordIndex;
/// use square_words::ranking::LengthOnly;
///
/// let index = WordIndex::from_words(["cat", "cot", "dog"]);
/// let words = list_candidates(&index, "c?t", &LengthOnly, None).unwrap();
/// assert_eq!(words, vec!["cat", "cot"]);
/// ```
pub fn list_candidates<S: RankingStrategy + ?Sized>(
    index: &WordIndex,
    pattern: &str,
    strategy: &S,
    limit: Option<usize>,
) -> Result<Vec<String>, PatternError> {
    let pattern = Pattern::parse(pattern)?;
    let ranked = index.ranked_candidates(&pattern, pattern.len(), strategy);
    log::debug!("{} words match {pattern}", ranked.len());

    Ok(ranked
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{LengthOnly, LetterFrequency};

    #[test]
    fn lists_matches_in_order() {
        let index = WordIndex::from_words(["bat", "cat", "hat", "cab"]);
        let words = list_candidates(&index, "_at", &LengthOnly, None).unwrap();
        assert_eq!(words, vec!["bat", "cat", "hat"]);
    }

    #[test]
    fn limit_truncates() {
        let index = WordIndex::from_words(["bat", "cat", "hat"]);
        let words = list_candidates(&index, "___", &LengthOnly, Some(2)).unwrap();
        assert_eq!(words, vec!["bat", "cat"]);
    }

    #[test]
    fn frequency_prefers_common_letters() {
        let index = WordIndex::from_words(["eat", "tea", "ate", "zzq"]);
        let words = list_candidates(&index, "___", &LetterFrequency, None).unwrap();
        assert_eq!(words.last().map(String::as_str), Some("zzq"));
    }

    #[test]
    fn bad_pattern_rejected() {
        let index = WordIndex::from_words(["cat"]);
        assert!(list_candidates(&index, "c4t", &LengthOnly, None).is_err());
    }
}
