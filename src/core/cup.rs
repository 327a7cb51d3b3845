//! A single cup: stacked liquid units, bottom first.
//!
//! Cups are always stored settled: the sequence holds only present colors,
//! so its length is the liquid count and there is never a gap below a unit.
//! Capacity is not stored on the cup; callers pass the board's capacity.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::LiquidColor;

/// Stacked liquid units, index 0 = bottom.
///
/// SmallVec keeps the default 4-unit cup inline without heap allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cup {
    units: SmallVec<[LiquidColor; 4]>,
}

impl Cup {
    /// Create an empty cup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cup from colors listed bottom to top.
    #[must_use]
    pub fn from_colors(colors: &[LiquidColor]) -> Self {
        Self {
            units: SmallVec::from_slice(colors),
        }
    }

    /// Units bottom to top.
    #[must_use]
    pub fn units(&self) -> &[LiquidColor] {
        &self.units
    }

    /// Number of liquid units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    #[must_use]
    pub fn is_full(&self, capacity: usize) -> bool {
        self.units.len() >= capacity
    }

    /// Free slots left under `capacity`.
    #[must_use]
    pub fn space(&self, capacity: usize) -> usize {
        capacity.saturating_sub(self.units.len())
    }

    /// Topmost color, if any.
    #[must_use]
    pub fn top(&self) -> Option<LiquidColor> {
        self.units.last().copied()
    }

    /// Length of the same-colored run at the top.
    #[must_use]
    pub fn top_run(&self) -> usize {
        match self.top() {
            Some(top) => self.units.iter().rev().take_while(|&&c| c == top).count(),
            None => 0,
        }
    }

    /// True when every unit has the same color (vacuously true when empty).
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.top_run() == self.units.len()
    }

    /// Locked: exactly `capacity` units of a single color.
    #[must_use]
    pub fn is_settled(&self, capacity: usize) -> bool {
        self.units.len() == capacity && self.is_uniform()
    }

    /// Append `count` units of `color` on top.
    ///
    /// Capacity is the caller's concern.
    pub fn push_units(&mut self, color: LiquidColor, count: usize) {
        self.units.extend(std::iter::repeat(color).take(count));
    }

    /// Remove `count` units from the top.
    ///
    /// All removed units must share the top color; returns that color, or
    /// `None` (leaving the cup untouched) if the top run is shorter.
    pub fn take_top(&mut self, count: usize) -> Option<LiquidColor> {
        if count == 0 || self.top_run() < count {
            return None;
        }
        let color = self.top()?;
        let new_len = self.units.len() - count;
        self.units.truncate(new_len);
        Some(color)
    }
}
