//! The board: an ordered row of cups sharing one capacity.
//!
//! Uses `im::Vector` so that snapshots (status evaluation, hint search,
//! undo checks) clone in O(1) and only touched cups are copied on write.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::color::LiquidColor;
use super::cup::Cup;
use crate::error::PourError;

/// Ordered cups plus the shared per-cup capacity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cups: Vector<Cup>,
    capacity: usize,
}

impl Board {
    /// Create a board from cups listed left to right.
    pub fn new(cups: impl IntoIterator<Item = Cup>, capacity: usize) -> Self {
        Self {
            cups: cups.into_iter().collect(),
            capacity,
        }
    }

    /// Units each cup can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of cups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cups.is_empty()
    }

    /// Get a cup by index.
    #[must_use]
    pub fn cup(&self, index: usize) -> Option<&Cup> {
        self.cups.get(index)
    }

    /// Get a cup by index, reporting out-of-range indices as a pour error.
    pub fn try_cup(&self, index: usize) -> Result<&Cup, PourError> {
        self.cups.get(index).ok_or(PourError::CupOutOfRange {
            index,
            len: self.cups.len(),
        })
    }

    /// Iterate cups left to right.
    pub fn cups(&self) -> impl Iterator<Item = &Cup> {
        self.cups.iter()
    }

    /// Replace the cup at `index`. Out-of-range indices are ignored.
    pub fn replace(&mut self, index: usize, cup: Cup) {
        if index < self.cups.len() {
            self.cups.set(index, cup);
        }
    }

    /// Total liquid units on the board.
    #[must_use]
    pub fn total_units(&self) -> usize {
        self.cups.iter().map(Cup::len).sum()
    }

    /// Units per color across all cups.
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<LiquidColor, usize> {
        let mut counts = FxHashMap::default();
        for color in self.cups.iter().flat_map(|cup| cup.units().iter()) {
            *counts.entry(*color).or_insert(0) += 1;
        }
        counts
    }

    /// Whether the cup at `index` is locked (full of one color).
    ///
    /// Locked is a derived fact; nothing on the board stores it.
    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        self.cups
            .get(index)
            .is_some_and(|cup| cup.is_settled(self.capacity))
    }

    /// Number of locked cups.
    #[must_use]
    pub fn settled_count(&self) -> usize {
        self.cups
            .iter()
            .filter(|cup| cup.is_settled(self.capacity))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cup) in self.cups.iter().enumerate() {
            write!(f, "{i}:")?;
            for color in cup.units() {
                write!(f, " {color}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LiquidColor::*;

    fn sample() -> Board {
        Board::new(
            [
                Cup::from_colors(&[Red; 4]),
                Cup::from_colors(&[Blue, Red]),
                Cup::new(),
            ],
            4,
        )
    }

    #[test]
    fn test_counts() {
        let board = sample();
        assert_eq!(board.len(), 3);
        assert_eq!(board.total_units(), 6);

        let counts = board.color_counts();
        assert_eq!(counts[&Red], 5);
        assert_eq!(counts[&Blue], 1);
        assert!(!counts.contains_key(&Green));
    }

    #[test]
    fn test_locked() {
        let board = sample();
        assert!(board.is_locked(0));
        assert!(!board.is_locked(1));
        assert!(!board.is_locked(2));
        assert!(!board.is_locked(99));
        assert_eq!(board.settled_count(), 1);
    }

    #[test]
    fn test_try_cup() {
        let board = sample();
        assert!(board.try_cup(2).is_ok());
        assert_eq!(
            board.try_cup(3),
            Err(PourError::CupOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_replace_is_copy_on_write() {
        let board = sample();
        let mut edited = board.clone();
        edited.replace(2, Cup::from_colors(&[Green]));
        edited.replace(42, Cup::new());

        assert_eq!(board.cup(2), Some(&Cup::new()));
        assert_eq!(edited.cup(2), Some(&Cup::from_colors(&[Green])));
        assert_eq!(edited.len(), 3);
    }

    #[test]
    fn test_display() {
        let board = Board::new([Cup::from_colors(&[Red, Blue]), Cup::new()], 4);
        assert_eq!(board.to_string(), "0: red blue\n1:\n");
    }

    #[test]
    fn test_serialization() {
        let board = sample();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
