//! Benchmarks for listing filtering
//!
//! Run with: cargo bench --package listing-filter
//!
//! Filters a synthetic listing set with each category selector, with and
//! without a search query.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use listing_filter::{ActiveFilter, FilterPipeline, FilterState, KeywordClassifier};
use market_data::Listing;
use std::sync::Arc;

const NAMES: [&str; 6] = ["Luna", "Max", "Kiwi", "Snowball", "Coco", "Bruno"];
const BREEDS: [&str; 6] = [
    "Persian",
    "Golden Retriever",
    "Budgie",
    "Holland Lop",
    "Siamese",
    "German Shepherd",
];

fn synthetic_listings(count: usize) -> Vec<Listing> {
    (0..count)
        .map(|i| {
            Listing::new()
                .with_id(i.to_string())
                .with_name(NAMES[i % NAMES.len()])
                .with_breed(BREEDS[(i / 2) % BREEDS.len()])
                .with_description("Healthy, vaccinated and ready for a new home")
                .with_price(format!("Rs. {},000", (i * 7) % 90))
        })
        .collect()
}

fn bench_category_filters(c: &mut Criterion) {
    let listings = synthetic_listings(5_000);
    let pipeline = FilterPipeline::marketplace(Arc::new(KeywordClassifier));

    for filter in ActiveFilter::ALL_KNOWN {
        let state = FilterState::new("", filter.clone());
        c.bench_function(&format!("filter_{}", filter), |b| {
            b.iter(|| {
                let visible = pipeline.apply(black_box(&listings), black_box(&state));
                black_box(visible)
            })
        });
    }
}

fn bench_search_query(c: &mut Criterion) {
    let listings = synthetic_listings(5_000);
    let pipeline = FilterPipeline::marketplace(Arc::new(KeywordClassifier));
    let state = FilterState::new("golden persian home", ActiveFilter::All);

    c.bench_function("search_three_words", |b| {
        b.iter(|| {
            let visible = pipeline.apply(black_box(&listings), black_box(&state));
            black_box(visible)
        })
    });
}

criterion_group!(benches, bench_category_filters, bench_search_query);
criterion_main!(benches);
