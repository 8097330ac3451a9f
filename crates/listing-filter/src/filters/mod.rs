//! Filter implementations for the listing pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod category;
pub mod text_search;

// Re-export for convenience
pub use category::CategoryFilter;
pub use text_search::TextSearchFilter;
