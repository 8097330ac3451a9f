//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a listing set.

use crate::state::FilterState;
use market_data::Listing;

/// Core trait for filtering listings.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters decide per listing; the pipeline owns iteration, so every
///   filter is a stable filter and input order always survives
/// - There is no error path: a listing that cannot be judged is decided
///   by the filter's own fallback rule
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `listing` stays visible under `state`.
    fn keep(&self, listing: &Listing, state: &FilterState) -> bool;
}
