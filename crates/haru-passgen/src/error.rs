//! Error types for password generation.

/// Errors that can occur while generating a password.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PassgenError {
    /// Every character class was switched off.
    #[error("at least one character class must be enabled")]
    EmptyCharset,
}

/// Convenience result type for password generation.
pub type PassgenResult<T> = Result<T, PassgenError>;
