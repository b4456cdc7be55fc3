//! Lucky item tables and their deterministic picks.

use serde::{Deserialize, Serialize};

use crate::seed;

/// A lucky color with its display hex code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyColor {
    /// Color name.
    pub name: String,
    /// Hex code for rendering.
    pub hex: String,
}

/// The lucky items attached to a fortune report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyItems {
    /// Lucky color.
    pub color: LuckyColor,
    /// Lucky number in 1-100.
    pub number: u32,
    /// Lucky compass direction.
    pub direction: String,
    /// Lucky time slot.
    pub time: String,
}

const COLORS: [(&str, &str); 8] = [
    ("빨강", "#FF4858"),
    ("파랑", "#4facfe"),
    ("노랑", "#FFD700"),
    ("초록", "#4CAF50"),
    ("보라", "#9C27B0"),
    ("분홍", "#E91E63"),
    ("주황", "#FF9800"),
    ("하늘색", "#72F2EB"),
];

const DIRECTIONS: [&str; 8] = [
    "동쪽", "서쪽", "남쪽", "북쪽", "북동쪽", "남서쪽", "북서쪽", "남동쪽",
];

const TIME_SLOTS: [&str; 6] = [
    "오전 6-9시",
    "오전 9-12시",
    "오후 12-3시",
    "오후 3-6시",
    "오후 6-9시",
    "오후 9-12시",
];

/// Resolve the four lucky picks for a base seed.
///
/// Each pick uses its own offset (0-3) through the unit draw so the
/// items vary independently.
pub fn lucky_items(base: i64) -> LuckyItems {
    let (name, hex) = COLORS[seed::pick_index(base, COLORS.len())];
    LuckyItems {
        color: LuckyColor {
            name: name.to_string(),
            hex: hex.to_string(),
        },
        number: seed::pick_index(base + 1, 100) as u32 + 1,
        direction: DIRECTIONS[seed::pick_index(base + 2, DIRECTIONS.len())].to_string(),
        time: TIME_SLOTS[seed::pick_index(base + 3, TIME_SLOTS.len())].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_a_seed() {
        assert_eq!(lucky_items(254_816), lucky_items(254_816));
    }

    #[test]
    fn number_in_range() {
        for base in 0..2_000 {
            let items = lucky_items(base);
            assert!((1..=100).contains(&items.number));
        }
    }

    #[test]
    fn picks_come_from_the_tables() {
        for base in 0..500 {
            let items = lucky_items(base);
            assert!(COLORS.iter().any(|(n, _)| *n == items.color.name));
            assert!(DIRECTIONS.contains(&items.direction.as_str()));
            assert!(TIME_SLOTS.contains(&items.time.as_str()));
        }
    }

    #[test]
    fn different_seeds_eventually_differ() {
        let a = lucky_items(1);
        let some_differ = (2..50).any(|base| lucky_items(base) != a);
        assert!(some_differ);
    }
}
