//! Filter for the marketplace search box.
//!
//! Runs first in the marketplace pipeline, before any category narrowing.

use crate::search::text_search_match;
use crate::state::FilterState;
use crate::traits::Filter;
use market_data::Listing;

/// Keeps listings whose name, breed or description matches the search query.
///
/// ## Algorithm
/// 1. Blank query: keep everything
/// 2. Otherwise keep the listing if any query word occurs in any of its
///    text fields (see [`text_search_match`])
pub struct TextSearchFilter;

impl Filter for TextSearchFilter {
    fn name(&self) -> &str {
        "TextSearchFilter"
    }

    fn keep(&self, listing: &Listing, state: &FilterState) -> bool {
        !state.is_searching() || text_search_match(listing, &state.search_query)
    }
}
