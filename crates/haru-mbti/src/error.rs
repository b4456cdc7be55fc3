//! Error types for the MBTI engine.

/// Errors that can occur while handling MBTI input.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MbtiError {
    /// The string is not a valid four-letter type code.
    #[error("invalid MBTI type: {0}")]
    InvalidType(String),

    /// The test was scored before every question was answered.
    #[error("incomplete test: {answered} of {expected} questions answered")]
    IncompleteTest {
        /// Answers recorded so far.
        answered: u32,
        /// Number of questions in the test.
        expected: u32,
    },
}

/// Convenience result type for MBTI operations.
pub type MbtiResult<T> = Result<T, MbtiError>;
