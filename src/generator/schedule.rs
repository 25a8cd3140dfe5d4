//! Anchor schedule for the generation loop

use crate::core::{Anchor, Direction};

/// Ordered anchor/direction pairs covering a grid
///
/// Alternates vertical segments hanging from the top row with horizontal
/// segments starting in the left column, `stride` cells apart.
///
/// # Examples
/// ```
/// use square_words::core::{Anchor, Direction};
/// use square_words::generator::schedule;
///
/// let pairs = schedule(3, 2);
/// assert_eq!(pairs, vec![
///     (Anchor::new(0, 0), Direction::Vertical),
///     (Anchor::new(0, 0), Direction::Horizontal),
///     (Anchor::new(0, 2), Direction::Vertical),
///     (Anchor::new(2, 0), Direction::Horizontal),
/// ]);
/// ```
///
/// # Panics
/// Panics if `stride` is zero.
#[must_use]
pub fn schedule(size: usize, stride: usize) -> Vec<(Anchor, Direction)> {
    (0..size)
        .step_by(stride)
        .flat_map(|i| {
            [
                (Anchor::new(0, i), Direction::Vertical),
                (Anchor::new(i, 0), Direction::Horizontal),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_one_covers_every_line() {
        let pairs = schedule(4, 1);
        assert_eq!(pairs.len(), 8);
        assert_eq!(pairs[6], (Anchor::new(0, 3), Direction::Vertical));
        assert_eq!(pairs[7], (Anchor::new(3, 0), Direction::Horizontal));
    }

    #[test]
    fn stride_two_skips_alternate_lines() {
        let pairs = schedule(8, 2);
        let columns: Vec<usize> = pairs
            .iter()
            .filter(|(_, d)| *d == Direction::Vertical)
            .map(|(a, _)| a.col)
            .collect();
        assert_eq!(columns, vec![0, 2, 4, 6]);
    }

    #[test]
    fn stride_larger_than_grid() {
        let pairs = schedule(3, 5);
        assert_eq!(
            pairs,
            vec![
                (Anchor::new(0, 0), Direction::Vertical),
                (Anchor::new(0, 0), Direction::Horizontal),
            ]
        );
    }

    #[test]
    fn anchors_stay_inside_grid() {
        for size in 1..10 {
            for stride in 1..4 {
                for (anchor, _) in schedule(size, stride) {
                    assert!(anchor.row < size && anchor.col < size);
                }
            }
        }
    }
}
