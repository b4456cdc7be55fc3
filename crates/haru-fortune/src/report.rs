//! Fortune report assembly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::band::{self, Category, CategoryBand};
use crate::lucky::{self, LuckyItems};
use crate::profile::BirthProfile;
use crate::rating::StarRating;
use crate::seed;

/// The overall reading: narrative, keywords, and a star rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallReading {
    /// Narrative text.
    pub text: String,
    /// Keyword tags.
    pub keywords: Vec<String>,
    /// Star rating from the base score.
    pub rating: StarRating,
}

/// A themed reading: narrative, a one-line tip, and a star rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReading {
    /// Narrative text.
    pub text: String,
    /// One-line actionable tip.
    pub tip: String,
    /// Star rating from the jittered score.
    pub rating: StarRating,
}

/// A complete daily fortune for one profile on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneReport {
    /// The calendar day the report was computed for.
    pub date: NaiveDate,
    /// The profile the report was computed from.
    pub profile: BirthProfile,
    /// Base daily score in 50-100.
    pub score: u32,
    /// Overall reading.
    pub overall: OverallReading,
    /// Love reading.
    pub love: CategoryReading,
    /// Money reading.
    pub money: CategoryReading,
    /// Health reading.
    pub health: CategoryReading,
    /// Career reading.
    pub career: CategoryReading,
    /// Lucky items.
    pub lucky: LuckyItems,
}

/// Compute the fortune for a profile on the given calendar day.
///
/// Pure and deterministic: the same profile and date always produce an
/// identical report. Callers wanting "today" pass the current local
/// date.
pub fn compute_fortune(profile: &BirthProfile, today: NaiveDate) -> FortuneReport {
    let base = seed::derive_seed(profile, today);
    let score = seed::score(base);

    let overall_band = band::pick_overall(score);
    let overall = OverallReading {
        text: overall_band.text.to_string(),
        keywords: overall_band.keywords.iter().map(|k| (*k).to_string()).collect(),
        rating: StarRating::from_score(f64::from(score)),
    };

    FortuneReport {
        date: today,
        profile: *profile,
        score,
        overall,
        love: themed(band::love_bands(profile.gender()), score, base, Category::Love),
        money: themed(&band::MONEY_BANDS, score, base, Category::Money),
        health: themed(&band::HEALTH_BANDS, score, base, Category::Health),
        career: themed(&band::CAREER_BANDS, score, base, Category::Career),
        lucky: lucky::lucky_items(base + band::LUCKY_OFFSET),
    }
}

// Narrative selection reads the base score; the star rating reads the
// jittered one. Both sides of that split are load-bearing.
fn themed(
    bands: &'static [CategoryBand; 4],
    score: u32,
    base: i64,
    category: Category,
) -> CategoryReading {
    let chosen = band::pick(bands, score);
    let jittered = f64::from(score) + seed::unit(base + category.offset()) * 10.0;
    CategoryReading {
        text: chosen.text.to_string(),
        tip: chosen.tip.to_string(),
        rating: StarRating::from_score(jittered),
    }
}
