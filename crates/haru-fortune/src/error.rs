//! Error types for the fortune engine.

/// Errors that can occur while validating a fortune request.
///
/// Validation happens before any seed computation; a rejected request
/// never yields a partial report.
#[derive(Debug, thiserror::Error)]
pub enum FortuneError {
    /// The birth date does not exist on the calendar.
    #[error("invalid birth date: {year:04}-{month:02}-{day:02}")]
    InvalidBirthDate {
        /// Requested birth year.
        year: i32,
        /// Requested birth month.
        month: u32,
        /// Requested birth day.
        day: u32,
    },

    /// The gender string is not recognized.
    #[error("invalid gender: {0}")]
    InvalidGender(String),
}

/// Convenience result type for fortune operations.
pub type FortuneResult<T> = Result<T, FortuneError>;
