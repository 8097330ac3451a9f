//! Filter state: what the user has typed and which category button is active.
//!
//! The state is passed into the engine explicitly; nothing here is global.

use crate::search::is_blank;
use crate::classifier::Species;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Category selector.
///
/// Any selector string can be represented: values outside the six known ones
/// become `Unrecognized` and let every listing through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActiveFilter {
    #[default]
    All,
    Cats,
    Dogs,
    Parrot,
    Rabbit,
    Under500,
    Unrecognized(String),
}

impl ActiveFilter {
    /// The selectors the marketplace renders buttons for, in display order
    pub const ALL_KNOWN: [ActiveFilter; 6] = [
        ActiveFilter::All,
        ActiveFilter::Cats,
        ActiveFilter::Dogs,
        ActiveFilter::Parrot,
        ActiveFilter::Rabbit,
        ActiveFilter::Under500,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ActiveFilter::All => "all",
            ActiveFilter::Cats => "cats",
            ActiveFilter::Dogs => "dogs",
            ActiveFilter::Parrot => "parrot",
            ActiveFilter::Rabbit => "rabbit",
            ActiveFilter::Under500 => "under500",
            ActiveFilter::Unrecognized(raw) => raw,
        }
    }

    /// Species this selector narrows to, if it is a species selector
    pub fn species(&self) -> Option<Species> {
        match self {
            ActiveFilter::Cats => Some(Species::Cat),
            ActiveFilter::Dogs => Some(Species::Dog),
            ActiveFilter::Parrot => Some(Species::Parrot),
            ActiveFilter::Rabbit => Some(Species::Rabbit),
            _ => None,
        }
    }
}

impl From<&str> for ActiveFilter {
    fn from(raw: &str) -> Self {
        match raw {
            "all" => ActiveFilter::All,
            "cats" => ActiveFilter::Cats,
            "dogs" => ActiveFilter::Dogs,
            "parrot" => ActiveFilter::Parrot,
            "rabbit" => ActiveFilter::Rabbit,
            "under500" => ActiveFilter::Under500,
            other => ActiveFilter::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for ActiveFilter {
    fn from(raw: String) -> Self {
        ActiveFilter::from(raw.as_str())
    }
}

impl From<&ActiveFilter> for ActiveFilter {
    fn from(filter: &ActiveFilter) -> Self {
        filter.clone()
    }
}

impl From<ActiveFilter> for String {
    fn from(filter: ActiveFilter) -> Self {
        match filter {
            ActiveFilter::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ActiveFilter {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(ActiveFilter::from(raw))
    }
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search query plus category selector.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub search_query: String,
    pub active_filter: ActiveFilter,
}

impl FilterState {
    pub fn new(search_query: impl Into<String>, active_filter: impl Into<ActiveFilter>) -> Self {
        Self {
            search_query: search_query.into(),
            active_filter: active_filter.into(),
        }
    }

    pub fn with_query(mut self, search_query: impl Into<String>) -> Self {
        self.search_query = search_query.into();
        self
    }

    pub fn with_filter(mut self, active_filter: impl Into<ActiveFilter>) -> Self {
        self.active_filter = active_filter.into();
        self
    }

    /// True when the query contains at least one word
    pub fn is_searching(&self) -> bool {
        !is_blank(&self.search_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_selectors_round_trip_through_str() {
        for filter in ActiveFilter::ALL_KNOWN {
            assert_eq!(ActiveFilter::from(filter.as_str()), filter);
        }
    }

    #[test]
    fn test_unknown_selector_is_kept_verbatim() {
        let filter = ActiveFilter::from("Cats");
        assert_eq!(filter, ActiveFilter::Unrecognized("Cats".to_string()));
        assert_eq!(filter.to_string(), "Cats");
        assert_eq!(filter.species(), None);
    }

    #[test]
    fn test_serde_uses_selector_strings() {
        let state = FilterState::new("persian", "under500");
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"search_query":"persian","active_filter":"under500"}"#);

        let back: FilterState =
            serde_json::from_str(r#"{"search_query":"","active_filter":"hamsters"}"#).unwrap();
        assert_eq!(back.active_filter, ActiveFilter::Unrecognized("hamsters".to_string()));
    }

    #[test]
    fn test_default_state() {
        let state = FilterState::default();
        assert_eq!(state.active_filter, ActiveFilter::All);
        assert!(!state.is_searching());
        assert!(!state.clone().with_query("   ").is_searching());
        assert!(state.with_query(" cat ").with_filter(ActiveFilter::Cats).is_searching());
    }
}
