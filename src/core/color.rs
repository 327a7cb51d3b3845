//! Liquid colors.

use serde::{Deserialize, Serialize};

/// One color from the fixed 7-color palette.
///
/// Colors carry no ordering semantics; rules only compare them for equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiquidColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
}

impl LiquidColor {
    /// The full palette in deal order.
    pub const ALL: [LiquidColor; 7] = [
        LiquidColor::Red,
        LiquidColor::Blue,
        LiquidColor::Green,
        LiquidColor::Yellow,
        LiquidColor::Purple,
        LiquidColor::Orange,
        LiquidColor::Pink,
    ];

    /// Lower-case color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LiquidColor::Red => "red",
            LiquidColor::Blue => "blue",
            LiquidColor::Green => "green",
            LiquidColor::Yellow => "yellow",
            LiquidColor::Purple => "purple",
            LiquidColor::Orange => "orange",
            LiquidColor::Pink => "pink",
        }
    }

    /// Display color for renderers, as `#rrggbb`.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            LiquidColor::Red => "#e74c3c",
            LiquidColor::Blue => "#3498db",
            LiquidColor::Green => "#2ecc71",
            LiquidColor::Yellow => "#f1c40f",
            LiquidColor::Purple => "#9b59b6",
            LiquidColor::Orange => "#e67e22",
            LiquidColor::Pink => "#fd79a8",
        }
    }

    /// The first `count` colors of the palette.
    ///
    /// Saturates at the palette size.
    #[must_use]
    pub fn palette(count: usize) -> &'static [LiquidColor] {
        &Self::ALL[..count.min(Self::ALL.len())]
    }
}

impl std::fmt::Display for LiquidColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_distinct() {
        for (i, a) in LiquidColor::ALL.iter().enumerate() {
            for b in &LiquidColor::ALL[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.hex(), b.hex());
            }
        }
    }

    #[test]
    fn test_palette_prefix() {
        assert_eq!(LiquidColor::palette(2), &[LiquidColor::Red, LiquidColor::Blue]);
        assert_eq!(LiquidColor::palette(99).len(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", LiquidColor::Orange), "orange");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LiquidColor::Purple).unwrap();
        assert_eq!(json, "\"purple\"");
        let back: LiquidColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LiquidColor::Purple);
    }
}
