//! Error type for buffer operations.
//!
//! Running out of room or out of used bytes is not an error: those outcomes
//! are reported as `false` / `None` by the buffer itself. [`BufferError`] is
//! reserved for misuse of the API.

use thiserror::Error;

/// An invalid argument passed to a [`BufferArray`](crate::BufferArray) operation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BufferError {
    /// The encoding name is not one of the supported encodings.
    #[error("invalid argument: unsupported encoding `{0}`")]
    UnsupportedEncoding(String),

    /// The string is not valid hexadecimal.
    #[error("invalid argument: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The string is not valid base64.
    #[error("invalid argument: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

impl BufferError {
    /// Every variant is an invalid-argument failure.
    pub fn is_invalid_argument(&self) -> bool {
        true
    }
}

/// Result type alias using [`BufferError`].
pub type Result<T> = std::result::Result<T, BufferError>;
