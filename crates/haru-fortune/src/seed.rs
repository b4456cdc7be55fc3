//! Seed derivation and the deterministic unit draw.
//!
//! The seed is a plain integer sum over the birth date, the current
//! date, and the gender. No hashing and no cryptographic property, only
//! reproducibility within a single calendar day: two requests with the
//! same inputs on the same day derive the same seed.

use chrono::{Datelike, NaiveDate};

use crate::profile::{BirthProfile, Gender};

/// Derive the base seed for a profile on a given calendar day.
///
/// `Y + M*100 + D*10000` for both dates, plus 1 for male or 2 for
/// female. Months are 1-based on both sides.
pub fn derive_seed(profile: &BirthProfile, today: NaiveDate) -> i64 {
    let gender = match profile.gender() {
        Gender::Male => 1,
        Gender::Female => 2,
    };
    date_term(profile.year(), profile.month(), profile.day())
        + date_term(today.year(), today.month(), today.day())
        + gender
}

fn date_term(year: i32, month: u32, day: u32) -> i64 {
    i64::from(year) + i64::from(month) * 100 + i64::from(day) * 10_000
}

/// Map a seed to a value in `[0, 1)`: `frac(sin(seed) * 10000)`.
///
/// Not a real RNG and not unpredictable; the only guarantees are that
/// the same seed reproduces the same value and that nearby seeds give
/// visibly different values.
pub fn unit(seed: i64) -> f64 {
    let x = (seed as f64).sin() * 10_000.0;
    x - x.floor()
}

/// Pick an index into a list of `len` entries via the unit draw.
pub fn pick_index(seed: i64, len: usize) -> usize {
    // unit() < 1.0, so the product never reaches len
    (unit(seed) * len as f64) as usize
}

/// The daily score for a seed: `round(50 + unit(seed)*50)`, in `[50, 100]`.
pub fn score(seed: i64) -> u32 {
    (50.0 + unit(seed) * 50.0).round() as u32
}
