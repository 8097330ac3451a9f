//! Free-text search over listing fields.
//!
//! Matching is deliberately loose: the query is split into words and a field
//! matches when ANY word occurs in it, ignoring case. There is no phrase
//! matching and no ranking.

use market_data::Listing;

/// True when `query` has no words (empty or whitespace only).
pub fn is_blank(query: &str) -> bool {
    query.split_whitespace().next().is_none()
}

/// Match one field value against a query.
///
/// Returns `true` when either side is empty or absent, so this never narrows
/// anything on its own for missing data. Otherwise returns `true` if any
/// whitespace-separated word of `query` is a case-insensitive substring of
/// `text`.
pub fn matches_search(text: Option<&str>, query: &str) -> bool {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return true,
    };
    if is_blank(query) {
        return true;
    }

    let haystack = text.to_lowercase();
    query
        .split_whitespace()
        .any(|word| haystack.contains(&word.to_lowercase()))
}

/// Match a listing's name, breed or description against a query.
///
/// A blank query matches everything. Absent or empty fields cannot satisfy a
/// non-blank query: only fields with text are offered to [`matches_search`].
pub fn text_search_match(listing: &Listing, query: &str) -> bool {
    if is_blank(query) {
        return true;
    }

    [
        listing.name.as_deref(),
        listing.breed.as_deref(),
        listing.description.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|field| !field.is_empty())
    .any(|field| matches_search(Some(field), query))
}
