//! Deterministic daily fortune engine.
//!
//! Derives an integer seed from a birth profile and the current calendar
//! date, then expands that seed into five category readings and a set of
//! lucky items via threshold tables. The same profile on the same day
//! always produces an identical report; a new day produces a new one.

pub mod band;
pub mod error;
pub mod lucky;
pub mod profile;
pub mod rating;
pub mod report;
pub mod seed;

pub use error::{FortuneError, FortuneResult};
pub use lucky::{LuckyColor, LuckyItems};
pub use profile::{BirthProfile, Gender};
pub use rating::StarRating;
pub use report::{CategoryReading, FortuneReport, OverallReading, compute_fortune};
