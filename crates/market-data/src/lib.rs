//! # Market Data Crate
//!
//! This crate turns marketplace API responses into an in-memory listing set.
//!
//! ## Main Components
//!
//! - **types**: `Listing` and the `ApiEnvelope` wrapper
//! - **parser**: Decode `{ success, data: { listings }, message? }` bodies
//! - **catalog**: `ListingCatalog`, loaded from one or more envelope files
//! - **error**: Error types for decoding and loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use market_data::{ListingCatalog, listings_or_empty};
//!
//! // Body of a `/marketplace/listings` response; any failure gives no listings
//! let listings = listings_or_empty(&body);
//!
//! // Or load saved responses from disk
//! let catalog = ListingCatalog::load_from_files(&["listings.json"])?;
//! println!("{} listings", catalog.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod catalog;

// Re-export commonly used types for convenience
pub use error::{ListingLoadError, Result};
pub use types::{ApiEnvelope, Listing, ListingId};
pub use parser::{listings_or_empty, parse_listings_envelope, read_envelope_file};
pub use catalog::ListingCatalog;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = ListingCatalog::new();
        assert_eq!(catalog.len(), 0);
        assert!(catalog.listings().is_empty());
    }

    #[test]
    fn test_decoded_listings_into_catalog() {
        let body = r#"{
            "success": true,
            "data": { "listings": [ { "id": "p1", "name": "Coco", "price": "$300" } ] }
        }"#;

        let catalog = ListingCatalog::from_listings(listings_or_empty(body));
        let coco = catalog.get("p1").unwrap();
        assert_eq!(coco.price.as_deref(), Some("$300"));
    }
}
