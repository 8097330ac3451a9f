//! Species classification for listings.
//!
//! Listings carry no structured species field, so the species is guessed from
//! free text. [`SpeciesClassifier`] is the seam: the category filter only
//! talks to the trait, and [`KeywordClassifier`] is the heuristic behind it
//! today.
//!
//! ## Keyword rules
//! - Dog: name + breed + description contain a dog keyword
//! - Cat: name + breed contain a cat keyword, unless name + breed also
//!   contain a dog-breed keyword (the exclusion wins even without a cat word)
//! - Parrot / Rabbit: name + breed + description contain a keyword
//!
//! Only the cat rule excludes anything. A listing may satisfy several
//! classifiers (e.g. text mentioning both "cat" and "parrot") or none.

use crate::price::{BUDGET_PRICE_CEILING, extract_price};
use market_data::Listing;
use std::fmt;

pub const DOG_KEYWORDS: &[&str] = &[
    "dog",
    "golden retriever",
    "german shepherd",
    "labrador",
    "puppy",
    "retriever",
    "shepherd",
];

/// Dog words that veto the cat classification
pub const DOG_BREED_KEYWORDS: &[&str] = &["retriever", "shepherd", "labrador", "puppy"];

pub const CAT_KEYWORDS: &[&str] = &["cat", "persian", "siamese", "british shorthair", "kitten"];

pub const PARROT_KEYWORDS: &[&str] = &["parrot", "macaw", "cockatoo", "budgie"];

// "lop" also hits words like "developed"; kept as is
pub const RABBIT_KEYWORDS: &[&str] = &["rabbit", "bunny", "lop"];

/// Species the marketplace can narrow to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Cat,
    Dog,
    Parrot,
    Rabbit,
}

impl Species {
    pub const ALL: [Species; 4] = [Species::Cat, Species::Dog, Species::Parrot, Species::Rabbit];

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Cat => "cat",
            Species::Dog => "dog",
            Species::Parrot => "parrot",
            Species::Rabbit => "rabbit",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides which species a listing describes.
///
/// `Send + Sync` so one classifier can be shared by pipelines on any thread.
pub trait SpeciesClassifier: Send + Sync {
    /// Returns the name of this classifier (for logging/debugging)
    fn name(&self) -> &str;

    fn is_cat(&self, listing: &Listing) -> bool;
    fn is_dog(&self, listing: &Listing) -> bool;
    fn is_parrot(&self, listing: &Listing) -> bool;
    fn is_rabbit(&self, listing: &Listing) -> bool;

    fn matches(&self, listing: &Listing, species: Species) -> bool {
        match species {
            Species::Cat => self.is_cat(listing),
            Species::Dog => self.is_dog(listing),
            Species::Parrot => self.is_parrot(listing),
            Species::Rabbit => self.is_rabbit(listing),
        }
    }

    /// Every species the listing satisfies, in `Species::ALL` order
    fn species_of(&self, listing: &Listing) -> Vec<Species> {
        Species::ALL
            .into_iter()
            .filter(|&species| self.matches(listing, species))
            .collect()
    }
}

/// Keyword heuristic over lower-cased listing text.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// True when name + breed mention a dog breed that rules out "cat"
    pub fn is_dog_breed(&self, listing: &Listing) -> bool {
        contains_any(&name_and_breed(listing), DOG_BREED_KEYWORDS)
    }
}

impl SpeciesClassifier for KeywordClassifier {
    fn name(&self) -> &str {
        "KeywordClassifier"
    }

    fn is_cat(&self, listing: &Listing) -> bool {
        let text = name_and_breed(listing);
        !contains_any(&text, DOG_BREED_KEYWORDS) && contains_any(&text, CAT_KEYWORDS)
    }

    fn is_dog(&self, listing: &Listing) -> bool {
        contains_any(&all_text(listing), DOG_KEYWORDS)
    }

    fn is_parrot(&self, listing: &Listing) -> bool {
        contains_any(&all_text(listing), PARROT_KEYWORDS)
    }

    fn is_rabbit(&self, listing: &Listing) -> bool {
        contains_any(&all_text(listing), RABBIT_KEYWORDS)
    }
}

fn name_and_breed(listing: &Listing) -> String {
    combined_text(&[listing.name.as_deref(), listing.breed.as_deref()])
}

fn all_text(listing: &Listing) -> String {
    combined_text(&[
        listing.name.as_deref(),
        listing.breed.as_deref(),
        listing.description.as_deref(),
    ])
}

/// Lower-case and join the present fields with single spaces
fn combined_text(fields: &[Option<&str>]) -> String {
    fields
        .iter()
        .flatten()
        .map(|field| field.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

pub fn is_cat(listing: &Listing) -> bool {
    KeywordClassifier.is_cat(listing)
}

pub fn is_dog(listing: &Listing) -> bool {
    KeywordClassifier.is_dog(listing)
}

pub fn is_parrot(listing: &Listing) -> bool {
    KeywordClassifier.is_parrot(listing)
}

pub fn is_rabbit(listing: &Listing) -> bool {
    KeywordClassifier.is_rabbit(listing)
}

/// How a listing set spreads over the category buttons.
///
/// Species counts overlap when listings satisfy several classifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub total: usize,
    pub cats: usize,
    pub dogs: usize,
    pub parrots: usize,
    pub rabbits: usize,
    pub under_500: usize,
    /// Listings no classifier claims
    pub unclassified: usize,
}

impl CategoryCounts {
    pub fn tally(listings: &[Listing], classifier: &dyn SpeciesClassifier) -> Self {
        let mut counts = Self::default();

        for listing in listings {
            counts.total += 1;

            let species = classifier.species_of(listing);
            if species.is_empty() {
                counts.unclassified += 1;
            }
            for s in species {
                match s {
                    Species::Cat => counts.cats += 1,
                    Species::Dog => counts.dogs += 1,
                    Species::Parrot => counts.parrots += 1,
                    Species::Rabbit => counts.rabbits += 1,
                }
            }

            if extract_price(listing.price.as_deref()) < BUDGET_PRICE_CEILING {
                counts.under_500 += 1;
            }
        }

        counts
    }
}
