//! Move records for history and undo.

use serde::{Deserialize, Serialize};

/// A completed pour: `count` units went from cup `from` to cup `to`.
///
/// Appended to history on every successful pour and popped on undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: usize,
    pub to: usize,
    pub count: usize,
}

impl Move {
    #[must_use]
    pub const fn new(from: usize, to: usize, count: usize) -> Self {
        Self { from, to, count }
    }

    /// The pour that takes these units back.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            count: self.count,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} (x{})", self.from, self.to, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed() {
        let mv = Move::new(1, 4, 3);
        assert_eq!(mv.reversed(), Move::new(4, 1, 3));
        assert_eq!(mv.reversed().reversed(), mv);
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(0, 8, 2).to_string(), "0 -> 8 (x2)");
    }

    #[test]
    fn test_serialization() {
        let mv = Move::new(2, 5, 1);
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(json, r#"{"from":2,"to":5,"count":1}"#);
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, back);
    }
}
