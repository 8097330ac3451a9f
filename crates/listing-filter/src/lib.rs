//! Search and category filtering for marketplace listings.
//!
//! This crate provides:
//! - `matches_search` / `text_search_match` for the search box
//! - Species classifiers behind the `SpeciesClassifier` trait
//! - `extract_price` for human-formatted prices
//! - Filter trait and implementations, composed by `FilterPipeline`
//! - `filter_listings`, the one-call entry point
//!
//! ## Architecture
//! Every change to the listing set, the query, or the category selector
//! recomputes the visible subset from scratch:
//! 1. TextSearchFilter drops listings that match no query word
//! 2. CategoryFilter narrows to the selected species or price band
//!
//! Both stages are stable filters, so the result is an ordered
//! subsequence of the input.
//!
//! ## Example Usage
//! ```ignore
//! use listing_filter::{FilterPipeline, FilterState, KeywordClassifier};
//! use std::sync::Arc;
//!
//! let pipeline = FilterPipeline::marketplace(Arc::new(KeywordClassifier));
//! let state = FilterState::new("persian", "cats");
//! let visible = pipeline.apply(catalog.listings(), &state);
//!
//! // Or in one call
//! let visible = listing_filter::filter_listings(catalog.listings(), "persian", "cats");
//! ```

pub mod traits;
pub mod state;
pub mod search;
pub mod price;
pub mod classifier;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use traits::Filter;
pub use state::{ActiveFilter, FilterState};
pub use search::{matches_search, text_search_match};
pub use price::{BUDGET_PRICE_CEILING, extract_price};
pub use classifier::{
    CategoryCounts, KeywordClassifier, Species, SpeciesClassifier, is_cat, is_dog, is_parrot,
    is_rabbit,
};
pub use filter_pipeline::{FilterPipeline, filter_listings};
