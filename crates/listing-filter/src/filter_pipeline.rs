//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern, plus
//! [`filter_listings`], the one-call entry point the marketplace page uses.

use crate::classifier::{KeywordClassifier, SpeciesClassifier};
use crate::filters::{CategoryFilter, TextSearchFilter};
use crate::state::{ActiveFilter, FilterState};
use crate::traits::Filter;
use market_data::Listing;
use std::sync::Arc;

/// Chains multiple filters together into a processing pipeline.
///
/// A listing is visible only if every filter keeps it. The result borrows
/// from the input slice and keeps its order.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TextSearchFilter)
///     .add_filter(CategoryFilter::new(classifier.clone()));
///
/// let visible = pipeline.apply(catalog.listings(), &state);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The marketplace pipeline: search box first, then category buttons.
    pub fn marketplace(classifier: Arc<dyn SpeciesClassifier>) -> Self {
        Self::new()
            .add_filter(TextSearchFilter)
            .add_filter(CategoryFilter::new(classifier))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the listings.
    ///
    /// ## Algorithm
    /// 1. Start with every listing, in input order
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Retain the listings it keeps
    ///    c. Log output count
    /// 3. Return what is left
    pub fn apply<'a>(&self, listings: &'a [Listing], state: &FilterState) -> Vec<&'a Listing> {
        let mut current: Vec<&'a Listing> = listings.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|listing| filter.keep(listing, state));
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the visible listings for a search query and category selector.
///
/// Uses the marketplace pipeline with the keyword classifier. Pure: the same
/// arguments always give the same listings, in input order.
pub fn filter_listings<'a>(
    listings: &'a [Listing],
    search_query: &str,
    active_filter: impl Into<ActiveFilter>,
) -> Vec<&'a Listing> {
    let state = FilterState::new(search_query, active_filter);
    FilterPipeline::marketplace(Arc::new(KeywordClassifier)).apply(listings, &state)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RejectAll;

    impl Filter for RejectAll {
        fn name(&self) -> &str {
            "RejectAll"
        }

        fn keep(&self, _listing: &Listing, _state: &FilterState) -> bool {
            false
        }
    }

    fn scenario() -> Vec<Listing> {
        vec![
            Listing::new()
                .with_name("Luna")
                .with_breed("Persian")
                .with_price("Rs. 25,000"),
            Listing::new()
                .with_name("Max")
                .with_breed("Golden Retriever")
                .with_price("Rs. 45,000"),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let listings = scenario();
        let pipeline = FilterPipeline::new();
        assert!(pipeline.is_empty());

        let visible = pipeline.apply(&listings, &FilterState::new("nothing matches", "cats"));
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let listings = scenario();
        let pipeline = FilterPipeline::new().add_filter(RejectAll);
        assert_eq!(pipeline.len(), 1);
        assert!(pipeline.apply(&listings, &FilterState::default()).is_empty());
    }

    #[test]
    fn test_scenario_categories() {
        let listings = scenario();

        let cats = filter_listings(&listings, "", "cats");
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].label(), "Luna");

        let dogs = filter_listings(&listings, "", "dogs");
        assert_eq!(dogs.len(), 1);
        assert_eq!(dogs[0].label(), "Max");

        assert!(filter_listings(&listings, "", "under500").is_empty());
    }

    #[test]
    fn test_search_and_category_combine() {
        let listings = scenario();
        assert!(filter_listings(&listings, "luna", "dogs").is_empty());
        assert_eq!(filter_listings(&listings, "golden", "dogs").len(), 1);
    }

    #[test]
    fn test_elements_borrow_from_input() {
        let listings = scenario();
        let visible = filter_listings(&listings, "", ActiveFilter::All);
        assert!(std::ptr::eq(visible[0], &listings[0]));
        assert!(std::ptr::eq(visible[1], &listings[1]));
    }
}
