//! Star ratings rendered as filled and empty symbols.

use serde::{Deserialize, Serialize};

/// A 0-5 star rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarRating {
    filled: u32,
}

impl StarRating {
    /// Rate a score-like value: `round(value / 100 * 5)`, clamped to 0-5.
    ///
    /// Jittered category scores may exceed 100 before rounding; the
    /// clamp happens here, at the star count, not at the score.
    pub fn from_score(value: f64) -> Self {
        let stars = (value / 100.0 * 5.0).round().clamp(0.0, 5.0);
        Self { filled: stars as u32 }
    }

    /// Number of filled stars (0-5).
    pub fn filled(&self) -> u32 {
        self.filled
    }
}

impl std::fmt::Display for StarRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filled = self.filled as usize;
        write!(f, "{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}
