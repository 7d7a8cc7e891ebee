//! Visual tiers: the four box sizes/colors a metric's grid is drawn at.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Visual tier of a metric's box grid.
///
/// One box of tier `k` stands for `100^k` nanoseconds, so a full 10x10 grid
/// of one tier is exactly one box of the next.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// 1 ns per box, black
    Black,
    /// 100 ns per box, blue
    Blue,
    /// 10 μs per box, green
    Green,
    /// 1 ms per box, red
    Red,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Black, Tier::Blue, Tier::Green, Tier::Red];

    /// Tier for a signed drawing scale, clamped into `0..=3`.
    pub fn from_scale(scale: i32) -> Self {
        match scale {
            i32::MIN..=0 => Tier::Black,
            1 => Tier::Blue,
            2 => Tier::Green,
            _ => Tier::Red,
        }
    }

    pub fn index(self) -> i32 {
        match self {
            Tier::Black => 0,
            Tier::Blue => 1,
            Tier::Green => 2,
            Tier::Red => 3,
        }
    }

    pub fn fill(self) -> Color {
        match self {
            Tier::Black => Color::from_rgba8(0x00, 0x00, 0x00, 0xFF),
            Tier::Blue => Color::from_rgba8(0x00, 0x00, 0xFF, 0xFF),
            Tier::Green => Color::from_rgba8(0x00, 0xCC, 0x00, 0xFF),
            Tier::Red => Color::from_rgba8(0xFF, 0x00, 0x00, 0xFF),
        }
    }

    /// Box outline, identical for every tier
    pub fn stroke(self) -> Color {
        Color::WHITE
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Black => "black",
            Tier::Blue => "blue",
            Tier::Green => "green",
            Tier::Red => "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scale_clamps_both_ends() {
        assert_eq!(Tier::from_scale(-1), Tier::Black);
        assert_eq!(Tier::from_scale(0), Tier::Black);
        assert_eq!(Tier::from_scale(2), Tier::Green);
        assert_eq!(Tier::from_scale(3), Tier::Red);
        assert_eq!(Tier::from_scale(7), Tier::Red);
    }

    #[test]
    fn test_index_matches_scale() {
        for tier in Tier::ALL {
            assert_eq!(Tier::from_scale(tier.index()), tier);
        }
    }

    #[test]
    fn test_palette() {
        assert_eq!(Tier::Black.fill().to_hex(), "#000000");
        assert_eq!(Tier::Blue.fill().to_hex(), "#0000FF");
        assert_eq!(Tier::Green.fill().to_hex(), "#00CC00");
        assert_eq!(Tier::Red.fill().to_hex(), "#FF0000");
        assert_eq!(Tier::Red.stroke(), Color::WHITE);
    }
}
