//! Segment prototypes
//!
//! A pattern is a fixed-length sequence of slots, each either a fixed
//! lowercase letter or a wildcard. Grids produce them from the current
//! state of a segment; the word index matches dictionary words against them.

use std::fmt;

/// Canonical wildcard marker used when printing a pattern
pub const WILDCARD: char = '_';

/// A fixed-length letter pattern with wildcards
///
/// Each slot is `Some(letter)` for a fixed lowercase ASCII letter or `None`
/// for a wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Option<u8>>,
}

/// Error type for malformed pattern strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidPattern { ch: char, position: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { ch, position } => write!(
                f,
                "Invalid pattern character {ch:?} at position {position} (expected a letter or '{WILDCARD}')"
            ),
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Build a pattern directly from slots
    ///
    /// Slots holding anything but a lowercase ASCII letter are treated as
    /// wildcards.
    #[must_use]
    pub fn from_slots(slots: Vec<Option<u8>>) -> Self {
        let slots = slots
            .into_iter()
            .map(|slot| slot.filter(u8::is_ascii_lowercase))
            .collect();
        Self { slots }
    }

    /// Parse a pattern from text
    ///
    /// Letters are fixed (uppercase is normalized), and `_`, space, `.` and
    /// `?` are wildcards.
    ///
    /// # Errors
    /// Returns `PatternError::InvalidPattern` for any other character.
    ///
    /// # Examples
    /// ```
    /// use square_words::core::Pattern;
    ///
    /// let pattern = Pattern::parse("a_er_ee_").unwrap();
    /// assert_eq!(pattern.len(), 8);
    /// assert!(pattern.matches("aberdeen"));
    /// assert!(Pattern::parse("ab3").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let slots = text
            .chars()
            .enumerate()
            .map(|(position, ch)| match ch {
                '_' | ' ' | '.' | '?' => Ok(None),
                c if c.is_ascii_alphabetic() => Ok(Some(c.to_ascii_lowercase() as u8)),
                c => Err(PatternError::InvalidPattern { ch: c, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { slots })
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    /// Number of fixed letters
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when no slot is fixed
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.fixed_count() == 0
    }

    /// Check whether `word` fits this pattern
    ///
    /// Matching is anchored at both ends: the word must have exactly as many
    /// letters as the pattern has slots.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        let bytes = word.as_bytes();
        bytes.len() == self.slots.len()
            && self
                .slots
                .iter()
                .zip(bytes)
                .all(|(slot, &b)| slot.is_none_or(|fixed| fixed == b))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(letter) => write!(f, "{}", char::from(*letter))?,
                None => write!(f, "{WILDCARD}")?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_all_wildcard_markers() {
        let a = Pattern::parse("a_c").unwrap();
        let b = Pattern::parse("a c").unwrap();
        let c = Pattern::parse("a.c").unwrap();
        let d = Pattern::parse("a?c").unwrap();

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a, d);
        assert_eq!(a.slots(), &[Some(b'a'), None, Some(b'c')]);
    }

    #[test]
    fn parse_normalizes_uppercase() {
        let pattern = Pattern::parse("A_B").unwrap();
        assert_eq!(pattern.to_string(), "a_b");
    }

    #[test]
    fn parse_rejects_invalid_characters() {
        assert_eq!(
            Pattern::parse("ab1"),
            Err(PatternError::InvalidPattern { ch: '1', position: 2 })
        );
        assert!(Pattern::parse("a-b").is_err());
        assert!(Pattern::parse("é").is_err());
    }

    #[test]
    fn empty_pattern_is_valid() {
        let pattern = Pattern::parse("").unwrap();
        assert!(pattern.is_empty());
        assert!(pattern.is_open());
        assert!(!pattern.matches("a"));
    }

    #[test]
    fn matches_is_anchored_both_ends() {
        let pattern = Pattern::parse("ca_").unwrap();
        assert!(pattern.matches("cat"));
        assert!(pattern.matches("cab"));
        assert!(!pattern.matches("ca"));
        assert!(!pattern.matches("cats"));
        assert!(!pattern.matches("cot"));
    }

    #[test]
    fn display_uses_underscore_for_wildcards() {
        let pattern = Pattern::from_slots(vec![Some(b'a'), None, Some(b'a'), None]);
        assert_eq!(pattern.to_string(), "a_a_");
        assert_eq!(pattern.fixed_count(), 2);
    }

    #[test]
    fn from_slots_drops_non_letters() {
        let pattern = Pattern::from_slots(vec![Some(b'A'), Some(b'x')]);
        assert_eq!(pattern.slots(), &[None, Some(b'x')]);
    }
}
