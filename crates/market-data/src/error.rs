//! Error types for the market-data crate.
//!
//! Only the strict decoding paths surface these. The fail-closed helpers in
//! [`crate::parser`] log them and fall back to an empty listing set.

use thiserror::Error;

/// Errors that can occur while reading and decoding listing envelopes
#[derive(Error, Debug)]
pub enum ListingLoadError {
    /// Envelope file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading an envelope file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Body was not valid JSON, or did not have the envelope shape
    #[error("Malformed envelope: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The API answered with `success: false` (or omitted the flag)
    #[error("API reported failure: {message}")]
    Unsuccessful { message: String },

    /// `data.listings` is absent or is not an array
    #[error("Envelope has no listings array")]
    MissingListings,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ListingLoadError>;
