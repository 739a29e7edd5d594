//! Error types for blocko.
//!
//! The tree passes themselves never fail; errors only come from turning raw
//! input bytes into a document.

/// Error type for cleaning operations on raw input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Character encoding detection or conversion failed.
    #[error("Encoding detection failed: {0}")]
    EncodingError(String),

    /// The input contained no bytes at all.
    #[error("Input is empty")]
    EmptyInput,
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, Error>;
