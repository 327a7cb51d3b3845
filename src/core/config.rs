//! Puzzle configuration.
//!
//! The defaults reproduce the classic puzzle: 7 colors of 4 units each,
//! dealt over 9 cups of capacity 4, with 2 shuffle power-ups. Variants
//! configure smaller or larger boards through the builder methods.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::color::LiquidColor;
use super::cup::Cup;
use crate::error::ConfigError;

/// Units a cup can hold.
pub const MAX_LAYERS: usize = 4;
/// Distinct colors dealt (each fills exactly one cup when solved).
pub const NUM_FILLED_CUPS: usize = 7;
/// Extra cups giving the player headroom.
pub const NUM_EMPTY_CUPS: usize = 2;
/// Cups on the board.
pub const TOTAL_CUPS: usize = NUM_FILLED_CUPS + NUM_EMPTY_CUPS;
/// Shuffle power-ups granted per game.
pub const INITIAL_SHUFFLE_COUNT: u32 = 2;
/// Deals tried before settling for one that is not immediately playable.
pub const DEFAULT_DEAL_ATTEMPTS: usize = 16;

/// Complete puzzle configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Units per cup; also the units dealt per color.
    pub capacity: usize,

    /// Colors in play, taken from the front of [`LiquidColor::ALL`].
    pub color_count: usize,

    /// Cups beyond one per color.
    pub extra_cups: usize,

    /// Shuffle power-ups at the start of each game.
    pub shuffle_uses: u32,

    /// Maximum deals tried when looking for a playable start.
    pub max_deal_attempts: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_LAYERS,
            color_count: NUM_FILLED_CUPS,
            extra_cups: NUM_EMPTY_CUPS,
            shuffle_uses: INITIAL_SHUFFLE_COUNT,
            max_deal_attempts: DEFAULT_DEAL_ATTEMPTS,
        }
    }
}

impl PuzzleConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cup capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set how many colors are dealt.
    #[must_use]
    pub fn with_colors(mut self, count: usize) -> Self {
        self.color_count = count;
        self
    }

    /// Set how many headroom cups are added.
    #[must_use]
    pub fn with_extra_cups(mut self, count: usize) -> Self {
        self.extra_cups = count;
        self
    }

    /// Set the number of shuffle power-ups.
    #[must_use]
    pub fn with_shuffle_uses(mut self, uses: u32) -> Self {
        self.shuffle_uses = uses;
        self
    }

    /// Set the deal retry budget.
    #[must_use]
    pub fn with_max_deal_attempts(mut self, attempts: usize) -> Self {
        self.max_deal_attempts = attempts;
        self
    }

    /// Cups on the board.
    #[must_use]
    pub fn total_cups(&self) -> usize {
        self.color_count.saturating_add(self.extra_cups)
    }

    /// Liquid units on the board.
    #[must_use]
    pub fn total_units(&self) -> usize {
        self.color_count.saturating_mul(self.capacity)
    }

    /// Colors in play.
    #[must_use]
    pub fn colors(&self) -> &'static [LiquidColor] {
        LiquidColor::palette(self.color_count)
    }

    /// Check that a board can be dealt from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let max = LiquidColor::ALL.len();
        if self.color_count == 0 || self.color_count > max {
            return Err(ConfigError::ColorCount {
                got: self.color_count,
                max,
            });
        }
        if self.max_deal_attempts == 0 {
            return Err(ConfigError::NoDealAttempts);
        }
        // Every color has its own cup, so this only trips on overflow.
        let units = self.color_count.checked_mul(self.capacity);
        let room = self
            .color_count
            .checked_add(self.extra_cups)
            .and_then(|cups| cups.checked_mul(self.capacity));
        match (units, room) {
            (Some(units), Some(room)) if units <= room => Ok(()),
            _ => Err(ConfigError::Overfull {
                units: self.total_units(),
                cups: self.total_cups(),
                capacity: self.capacity,
            }),
        }
    }

    /// Check that a prepared board could have been dealt from this
    /// configuration: same cup count and capacity, no cup over capacity,
    /// and exactly `capacity` units of each color in play.
    pub fn validate_board(&self, board: &Board) -> Result<(), ConfigError> {
        self.validate()?;
        if board.len() != self.total_cups() || board.capacity() != self.capacity {
            return Err(ConfigError::BoardShape {
                cups: board.len(),
                capacity: board.capacity(),
            });
        }
        if let Some((cup, units)) = board
            .cups()
            .map(Cup::len)
            .enumerate()
            .find(|&(_, units)| units > self.capacity)
        {
            return Err(ConfigError::CupOverfull {
                cup,
                units,
                capacity: self.capacity,
            });
        }
        let counts = board.color_counts();
        for &color in &LiquidColor::ALL {
            let units = counts.get(&color).copied().unwrap_or(0);
            let expected = if self.colors().contains(&color) {
                self.capacity
            } else {
                0
            };
            if units != expected {
                return Err(ConfigError::ColorBalance {
                    color,
                    units,
                    expected,
                });
            }
        }
        Ok(())
    }
}
