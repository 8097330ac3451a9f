//! Core domain types for marketplace listings.
//!
//! The remote API hands out listings as loosely typed JSON objects. Every
//! field the filter engine reads is optional here, and the extra fields the
//! UI renders (images, seller, rating, location...) ride along untouched in
//! [`Listing::extra`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier assigned to a listing by the API (opaque text)
pub type ListingId = String;

// =============================================================================
// Listing
// =============================================================================

/// A marketplace record describing a pet offered for sale.
///
/// Text fields are decoded leniently: a JSON number or boolean is turned into
/// its text form, while `null`, arrays and objects become `None`. A listing
/// with every field absent is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub id: Option<ListingId>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Human-formatted price token, e.g. `"Rs. 45,000"` or `"$500"`
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Fields the filter engine does not look at
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Listing {
    /// Creates a listing with every field absent
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<ListingId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Short label for logs and CLI output: the name, else the id, else `"<unnamed>"`
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.id.as_deref())
            .unwrap_or("<unnamed>")
    }
}

/// Accepts any JSON value for a text field without failing.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

// =============================================================================
// API Envelope
// =============================================================================

/// The wrapper every API response comes in: `{ success, data, message? }`.
///
/// A missing `success` flag reads as `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}
