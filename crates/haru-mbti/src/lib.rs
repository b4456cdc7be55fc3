//! MBTI personality test scoring and compatibility lookup.
//!
//! A fixed 12-question test (three binary questions per axis) tallies
//! letters into one of the 16 types; each type carries a narrative
//! profile. Compatibility between two types is either a curated entry
//! for well-known pairs or derived from axis agreement rules.

pub mod compatibility;
pub mod error;
pub mod profile;
pub mod questions;
pub mod types;

pub use compatibility::{Compatibility, DetailScores, Grade, assess};
pub use error::{MbtiError, MbtiResult};
pub use profile::{TypeProfile, profile_for};
pub use questions::{Answer, Choice, Letter, QUESTIONS, Question, Tally};
pub use types::{Decisions, Energy, Information, Lifestyle, MbtiType};
