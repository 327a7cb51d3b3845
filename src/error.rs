//! Error types for rule evaluation and configuration.
//!
//! Pure rule functions report why a request was rejected. The stateful
//! [`Puzzle`](crate::games::puzzle::Puzzle) absorbs these into outcomes,
//! so none of them ever escapes a player-facing operation.

use thiserror::Error;

use crate::core::LiquidColor;

/// Why a pour (or its reversal) was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PourError {
    #[error("cup index {index} is out of range (board has {len} cups)")]
    CupOutOfRange { index: usize, len: usize },

    #[error("cannot pour cup {0} into itself")]
    SameCup(usize),

    #[error("source cup {0} is empty")]
    SourceEmpty(usize),

    #[error("target cup {0} is full")]
    TargetFull(usize),

    #[error("cannot pour {poured} onto {target}")]
    ColorMismatch {
        poured: LiquidColor,
        target: LiquidColor,
    },

    #[error("cup {cup} holds fewer than {count} units of its top color")]
    ShortRun { cup: usize, count: usize },
}

/// Invalid puzzle configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cup capacity must be at least 1")]
    ZeroCapacity,

    #[error("color count must be between 1 and {max}, got {got}")]
    ColorCount { got: usize, max: usize },

    #[error("{units} liquid units do not fit in {cups} cups of capacity {capacity}")]
    Overfull {
        units: usize,
        cups: usize,
        capacity: usize,
    },

    #[error("deal attempts must be at least 1")]
    NoDealAttempts,

    #[error("board of {cups} cups of capacity {capacity} does not match the configuration")]
    BoardShape { cups: usize, capacity: usize },

    #[error("cup {cup} holds {units} units but capacity is {capacity}")]
    CupOverfull {
        cup: usize,
        units: usize,
        capacity: usize,
    },

    #[error("board holds {units} units of {color}, expected {expected}")]
    ColorBalance {
        color: LiquidColor,
        units: usize,
        expected: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pour_error_messages() {
        assert_eq!(PourError::SourceEmpty(3).to_string(), "source cup 3 is empty");
        assert_eq!(
            PourError::ColorMismatch {
                poured: LiquidColor::Red,
                target: LiquidColor::Blue,
            }
            .to_string(),
            "cannot pour red onto blue"
        );
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::Overfull { units: 40, cups: 9, capacity: 4 };
        assert_eq!(err.to_string(), "40 liquid units do not fit in 9 cups of capacity 4");

        let err = ConfigError::ColorBalance { color: LiquidColor::Pink, units: 3, expected: 4 };
        assert_eq!(err.to_string(), "board holds 3 units of pink, expected 4");
    }
}
