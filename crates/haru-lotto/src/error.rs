//! Error types for the lottery sampler.

/// Errors that can occur while validating a lottery draw.
///
/// All of these are detected before any number is drawn; a rejected
/// request never yields a partial batch.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LottoError {
    /// A number outside the 1-45 universe was supplied.
    #[error("number out of range: {0} (must be 1-45)")]
    OutOfRange(u32),

    /// More than 6 numbers were marked as must-include.
    #[error("too many included numbers: {0} (at most 6)")]
    TooManyIncluded(usize),

    /// So many numbers were excluded that fewer than 6 remain possible.
    #[error("too many excluded numbers: {0} (at most 39)")]
    TooManyExcluded(usize),

    /// The eligible pool is smaller than a single game.
    #[error("not enough numbers to draw from: {0} eligible (need 6)")]
    PoolTooSmall(usize),
}

/// Convenience result type for lottery operations.
pub type LottoResult<T> = Result<T, LottoError>;
