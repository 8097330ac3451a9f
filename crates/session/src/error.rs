//! Error types for the session crate.

use thiserror::Error;

/// Errors raised by session transitions
#[derive(Error, Debug)]
pub enum SessionError {
    /// Login was attempted with an empty token
    #[error("Cannot log in with an empty token")]
    EmptyToken,

    /// The user record could not be encoded for storage
    #[error("Failed to encode user record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SessionError>;
