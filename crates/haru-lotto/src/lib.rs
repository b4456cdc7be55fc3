//! Constrained 6/45 lottery sampler.
//!
//! Draws 6-number games from the 1-45 universe while honoring
//! user-chosen must-include and must-exclude sets, and tabulates
//! frequency statistics across a batch of games. Draws use an injected
//! RNG; unlike the fortune engine there is no seed derivation here,
//! fresh randomness per batch is the point.

pub mod draw;
pub mod error;
pub mod selection;
pub mod stats;

pub use draw::{Batch, Game, draw_batch, draw_game};
pub use error::{LottoError, LottoResult};
pub use selection::{BallColor, Selection};
pub use stats::frequency_top;
