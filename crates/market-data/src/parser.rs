//! Decoding of `/marketplace/listings` response envelopes.
//!
//! Expected shape:
//! ```text
//! { "success": true, "data": { "listings": [ {...}, {...} ] }, "message": "..." }
//! ```
//!
//! Two entry points:
//! - [`parse_listings_envelope`] is strict and reports what went wrong
//! - [`listings_or_empty`] fails closed: any problem yields an empty set

use crate::error::{ListingLoadError, Result};
use crate::types::{ApiEnvelope, Listing};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

/// Read an envelope body from disk.
pub fn read_envelope_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ListingLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => ListingLoadError::IoError(e),
    })
}

/// Decode a listings envelope.
///
/// Entries of `data.listings` that are not JSON objects are skipped with a
/// warning; the remaining entries keep their order.
pub fn parse_listings_envelope(body: &str) -> Result<Vec<Listing>> {
    let envelope: ApiEnvelope<Value> = serde_json::from_str(body)?;

    if !envelope.success {
        return Err(ListingLoadError::Unsuccessful {
            message: envelope
                .message
                .unwrap_or_else(|| "no message".to_string()),
        });
    }

    let entries = envelope
        .data
        .as_ref()
        .and_then(|data| data.get("listings"))
        .and_then(Value::as_array)
        .ok_or(ListingLoadError::MissingListings)?;

    let mut listings = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            warn!(index = idx, "Skipping listing entry that is not an object");
            continue;
        }
        match Listing::deserialize(entry) {
            Ok(listing) => listings.push(listing),
            Err(e) => warn!(index = idx, error = %e, "Skipping undecodable listing entry"),
        }
    }

    Ok(listings)
}

/// Decode a listings envelope, treating any failure as "no listings".
pub fn listings_or_empty(body: &str) -> Vec<Listing> {
    match parse_listings_envelope(body) {
        Ok(listings) => listings,
        Err(e) => {
            warn!(error = %e, "Failed to load listings");
            Vec::new()
        }
    }
}
