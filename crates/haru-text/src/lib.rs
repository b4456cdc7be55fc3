//! Text statistics: character, word and line counts plus duplicate
//! word analysis.
//!
//! Counts are in Unicode scalar values, so a Hangul syllable is one
//! character regardless of its UTF-8 byte length.

pub mod count;
pub mod dupes;

pub use count::{CountOptions, TextStats, analyze};
pub use dupes::duplicate_words;
