//! Filter for the category buttons (all / cats / dogs / parrot / rabbit / under500).

use crate::classifier::{KeywordClassifier, SpeciesClassifier};
use crate::price::{BUDGET_PRICE_CEILING, extract_price};
use crate::state::{ActiveFilter, FilterState};
use crate::traits::Filter;
use market_data::Listing;
use std::sync::Arc;

/// Narrows listings to the active category.
///
/// ## Algorithm
/// - `all`: keep
/// - species selectors: ask the classifier
/// - `under500`: keep if the extracted price is below 500
/// - anything else: keep (fail-open)
pub struct CategoryFilter {
    classifier: Arc<dyn SpeciesClassifier>,
}

impl CategoryFilter {
    /// Create a new CategoryFilter.
    ///
    /// # Arguments
    /// * `classifier` - Shared classifier answering the species selectors
    pub fn new(classifier: Arc<dyn SpeciesClassifier>) -> Self {
        Self { classifier }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::new(Arc::new(KeywordClassifier))
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn keep(&self, listing: &Listing, state: &FilterState) -> bool {
        match &state.active_filter {
            ActiveFilter::All => true,
            ActiveFilter::Under500 => {
                extract_price(listing.price.as_deref()) < BUDGET_PRICE_CEILING
            }
            ActiveFilter::Unrecognized(_) => true,
            species_filter => match species_filter.species() {
                Some(species) => self.classifier.matches(listing, species),
                None => true,
            },
        }
    }
}
