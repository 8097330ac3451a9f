//! ListingCatalog: the in-memory listing set a marketplace page works from.
//!
//! The catalog is populated once (from one or more envelope bodies) and then
//! only read. Filtering never mutates it.

use crate::error::Result;
use crate::parser;
use crate::types::Listing;
use rayon::prelude::*;
use std::path::Path;
use tracing::info;

/// Ordered set of listings as fetched from the API.
#[derive(Debug, Clone, Default)]
pub struct ListingCatalog {
    listings: Vec<Listing>,
}

impl ListingCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self {
            listings: Vec::new(),
        }
    }

    /// Wrap already decoded listings, keeping their order
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Load several envelope files into one catalog.
    ///
    /// Files are read and decoded in parallel with Rayon. Listings keep the
    /// order of `paths`, then the order inside each file. A missing or
    /// unreadable file is an error; a file whose envelope is malformed or
    /// unsuccessful contributes no listings.
    pub fn load_from_files<P>(paths: &[P]) -> Result<Self>
    where
        P: AsRef<Path> + Sync,
    {
        // `collect` on an indexed parallel iterator keeps input order
        let per_file: Vec<Result<Vec<Listing>>> = paths
            .par_iter()
            .map(|path| load_file(path.as_ref()))
            .collect();

        let mut catalog = Self::new();
        for listings in per_file {
            catalog.listings.extend(listings?);
        }

        info!(
            files = paths.len(),
            listings = catalog.len(),
            "Listing catalog loaded"
        );
        Ok(catalog)
    }

    /// Append a listing at the end
    pub fn insert(&mut self, listing: Listing) {
        self.listings.push(listing);
    }

    /// First listing carrying the given id
    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings
            .iter()
            .find(|listing| listing.id.as_deref() == Some(id))
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn into_listings(self) -> Vec<Listing> {
        self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

fn load_file(path: &Path) -> Result<Vec<Listing>> {
    let body = parser::read_envelope_file(path)?;
    Ok(parser::listings_or_empty(&body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListingLoadError;
    use std::fs;
    use std::path::PathBuf;

    fn write_fixture(name: &str, body: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("market-data-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_load_keeps_file_order() {
        let first = write_fixture(
            "first.json",
            r#"{ "success": true, "data": { "listings": [ { "id": "a" }, { "id": "b" } ] } }"#,
        );
        let second = write_fixture(
            "second.json",
            r#"{ "success": true, "data": { "listings": [ { "id": "c" } ] } }"#,
        );

        let catalog = ListingCatalog::load_from_files(&[first, second]).unwrap();
        let ids: Vec<_> = catalog
            .listings()
            .iter()
            .map(|l| l.id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(catalog.get("c").is_some());
        assert!(catalog.get("z").is_none());
    }

    #[test]
    fn test_malformed_file_contributes_nothing() {
        let good = write_fixture(
            "good.json",
            r#"{ "success": true, "data": { "listings": [ { "id": "a" } ] } }"#,
        );
        let bad = write_fixture("bad.json", r#"{ "success": false, "message": "boom" }"#);

        let catalog = ListingCatalog::load_from_files(&[bad, good]).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = ListingCatalog::load_from_files(&["no/such/listings.json"]);
        assert!(matches!(result, Err(ListingLoadError::FileNotFound { .. })));
    }

    #[test]
    fn test_insert_and_counts() {
        let mut catalog = ListingCatalog::new();
        assert!(catalog.is_empty());

        catalog.insert(Listing::new().with_name("Luna"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.into_listings()[0].label(), "Luna");
    }
}
