use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use listing_filter::{
    ActiveFilter, CategoryCounts, FilterPipeline, FilterState, KeywordClassifier,
    SpeciesClassifier, extract_price,
};
use market_data::{Listing, ListingCatalog};
use session::{AuthState, Guard, MemoryStore, RouteTable, SessionStore, TOKEN_KEY, USER_KEY};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// PetMarket - marketplace search and session tooling
#[derive(Parser)]
#[command(name = "pet-market")]
#[command(about = "Search, classify and route-check pet marketplace data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter saved listing envelopes the way the marketplace page does
    Filter {
        /// Listing envelope files (JSON responses of /marketplace/listings)
        #[arg(long = "listings", required = true, num_args = 1..)]
        listings: Vec<PathBuf>,

        /// Free-text search query (any word may match)
        #[arg(long, default_value = "")]
        query: String,

        /// Category selector: all, cats, dogs, parrot, rabbit, under500
        #[arg(long, default_value = "all")]
        category: ActiveFilter,

        /// Print matching listings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which species each listing is classified as
    Classify {
        /// Listing envelope files
        #[arg(long = "listings", required = true, num_args = 1..)]
        listings: Vec<PathBuf>,
    },

    /// Show the integer price extracted from price strings
    Price {
        /// Price strings, e.g. "Rs. 45,000"
        #[arg(required = true)]
        prices: Vec<String>,
    },

    /// Decide whether a path renders or redirects for a session
    Route {
        /// Path being visited
        path: String,

        /// Stored session token
        #[arg(long)]
        token: Option<String>,

        /// Stored user record as JSON
        #[arg(long)]
        user_json: Option<String>,

        /// Page the visitor was bounced from (for login/signup)
        #[arg(long)]
        from: Option<String>,
    },

    /// Time filtering over randomly generated listings
    Benchmark {
        /// Number of synthetic listings
        #[arg(long, default_value = "10000")]
        listings: usize,

        /// Runs per category selector
        #[arg(long, default_value = "100")]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing (stderr, so stdout stays clean for --json)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Filter {
            listings,
            query,
            category,
            json,
        } => handle_filter(&listings, query, category, json)?,
        Commands::Classify { listings } => handle_classify(&listings)?,
        Commands::Price { prices } => handle_price(&prices),
        Commands::Route {
            path,
            token,
            user_json,
            from,
        } => handle_route(&path, token, user_json, from.as_deref())?,
        Commands::Benchmark {
            listings,
            iterations,
        } => handle_benchmark(listings, iterations)?,
    }

    Ok(())
}

fn load_catalog(paths: &[PathBuf]) -> Result<ListingCatalog> {
    let start = Instant::now();
    let catalog = ListingCatalog::load_from_files(paths)
        .context("Failed to load listing envelopes")?;
    eprintln!(
        "{} Loaded {} listings in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );
    Ok(catalog)
}

/// Handle the 'filter' command
fn handle_filter(
    paths: &[PathBuf],
    query: String,
    category: ActiveFilter,
    json: bool,
) -> Result<()> {
    let catalog = load_catalog(paths)?;

    if let ActiveFilter::Unrecognized(raw) = &category {
        tracing::warn!("Unknown category '{}', showing every category", raw);
    }

    let pipeline = FilterPipeline::marketplace(Arc::new(KeywordClassifier));
    let state = FilterState::new(query, category);
    let visible = pipeline.apply(catalog.listings(), &state);

    if json {
        println!("{}", render_json(&visible)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Listings for query '{}' in '{}':",
            state.search_query, state.active_filter
        )
        .bold()
        .blue()
    );
    if visible.is_empty() {
        println!("No listings found matching your filters.");
        return Ok(());
    }
    print_listings(&visible);
    println!("{} of {} listings shown", visible.len(), catalog.len());
    Ok(())
}

/// Matching listings as a pretty-printed JSON array
fn render_json(listings: &[&Listing]) -> Result<String> {
    serde_json::to_string_pretty(listings).context("Failed to encode listings as JSON")
}

/// Handle the 'classify' command
fn handle_classify(paths: &[PathBuf]) -> Result<()> {
    let catalog = load_catalog(paths)?;
    let classifier = KeywordClassifier;

    println!("{}", "Species by listing:".bold().blue());
    for listing in catalog.listings() {
        let species = classifier.species_of(listing);
        let label = if species.is_empty() {
            "unclassified".dimmed().to_string()
        } else {
            species
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!("  - {}: {}", listing.label(), label);
    }

    let counts = CategoryCounts::tally(catalog.listings(), &classifier);
    println!("{}", "Category counts:".bold().blue());
    println!("{}Total: {}", "• ".green(), counts.total);
    println!("{}Cats: {}", "• ".green(), counts.cats);
    println!("{}Dogs: {}", "• ".green(), counts.dogs);
    println!("{}Parrots: {}", "• ".green(), counts.parrots);
    println!("{}Rabbits: {}", "• ".green(), counts.rabbits);
    println!("{}Under 500: {}", "• ".cyan(), counts.under_500);
    println!("{}Unclassified: {}", "• ".cyan(), counts.unclassified);
    Ok(())
}

/// Handle the 'price' command
fn handle_price(prices: &[String]) {
    for price in prices {
        println!("{:>20} -> {}", format!("{:?}", price), extract_price(Some(price.as_str())));
    }
}

/// Handle the 'route' command
fn handle_route(
    path: &str,
    token: Option<String>,
    user_json: Option<String>,
    from: Option<&str>,
) -> Result<()> {
    // Seed a store the way a reload would find it
    let mut store = MemoryStore::new();
    if let Some(token) = token {
        store.set(TOKEN_KEY, token);
    }
    if let Some(user_json) = user_json {
        store.set(USER_KEY, user_json);
    }

    let auth = AuthState::bootstrap(&store);
    match auth.user() {
        Some(user) => println!(
            "{} Signed in as {} ({}){}",
            "•".green(),
            user.full_name,
            user.role,
            if auth.is_authenticated() { "" } else { " without a token" }
        ),
        None => println!("{} Anonymous visitor", "•".green()),
    }

    match RouteTable::standard().resolve(path, &auth, from) {
        Guard::Render => println!("{} {}", "RENDER".green().bold(), path),
        Guard::Redirect { to, from } => match from {
            Some(from) => println!("{} {} (from {})", "REDIRECT".yellow().bold(), to, from),
            None => println!("{} {}", "REDIRECT".yellow().bold(), to),
        },
    }
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(count: usize, iterations: usize) -> Result<()> {
    if iterations == 0 {
        bail!("--iterations must be at least 1");
    }

    let listings = random_listings(count);
    let pipeline = FilterPipeline::marketplace(Arc::new(KeywordClassifier));
    println!(
        "{}",
        format!("Benchmark: {} listings, {} runs per category", count, iterations)
            .bold()
            .blue()
    );

    for filter in ActiveFilter::ALL_KNOWN {
        let state = FilterState::new("", filter);
        let mut timings: Vec<Duration> = Vec::with_capacity(iterations);
        let mut visible = 0;
        for _ in 0..iterations {
            let start = Instant::now();
            visible = pipeline.apply(&listings, &state).len();
            timings.push(start.elapsed());
        }

        let total_time: Duration = timings.iter().sum();
        let avg_latency = total_time.div_f64(timings.len() as f64);
        timings.sort();
        let p50 = timings[timings.len() / 2];
        let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
        let p99 = timings[((timings.len() as f32 * 0.99) as usize).min(timings.len() - 1)];

        println!(
            "{:>9}: {:>6} visible | avg {:?} | p50 {:?} | p95 {:?} | p99 {:?}",
            state.active_filter.to_string().green(),
            visible,
            avg_latency,
            p50,
            p95,
            p99
        );
    }
    Ok(())
}

const SAMPLE_NAMES: [&str; 8] = [
    "Luna", "Max", "Kiwi", "Snowball", "Coco", "Bruno", "Milo", "Buddy",
];
const SAMPLE_BREEDS: [&str; 8] = [
    "Persian",
    "Golden Retriever",
    "Budgie",
    "Holland Lop",
    "Siamese",
    "German Shepherd",
    "British Shorthair",
    "Macaw",
];
const SAMPLE_PRICES: [&str; 4] = ["Rs. {}", "${}", "PKR {}.00", "{}"];

fn random_listings(count: usize) -> Vec<Listing> {
    (0..count)
        .map(|i| {
            let pick = |len: usize| rand::random::<u32>() as usize % len;
            let amount = rand::random::<u32>() % 60_000;
            let price = SAMPLE_PRICES[pick(SAMPLE_PRICES.len())].replace("{}", &amount.to_string());
            Listing::new()
                .with_id(format!("bench-{}", i))
                .with_name(SAMPLE_NAMES[pick(SAMPLE_NAMES.len())])
                .with_breed(SAMPLE_BREEDS[pick(SAMPLE_BREEDS.len())])
                .with_description("Healthy, playful and ready for a new home")
                .with_price(price)
        })
        .collect()
}

/// Helper function to format and print listings
fn print_listings(listings: &[&Listing]) {
    for (idx, listing) in listings.iter().enumerate() {
        let rank = idx + 1;
        println!(
            "{}. {} [{}] {}",
            rank.to_string().green(),
            listing.label().bold(),
            listing.breed.as_deref().unwrap_or("unknown breed"),
            listing.price.as_deref().unwrap_or("no price").cyan()
        );
        if let Some(description) = listing.description.as_deref().filter(|d| !d.is_empty()) {
            println!("   {}", description.dimmed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_render_json_is_a_bare_array() {
        let listings = vec![
            Listing::new().with_id("a1").with_name("Luna").with_price("Rs. 25,000"),
            Listing::new().with_name("Max"),
        ];
        let visible: Vec<&Listing> = listings.iter().collect();

        let rendered = render_json(&visible).unwrap();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["name"], "Luna");
        assert_eq!(array[0]["price"], "Rs. 25,000");
        assert!(array[1].get("id").is_none());
    }

    #[test]
    fn test_render_json_empty() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_benchmark_runs_with_single_iteration() {
        assert!(handle_benchmark(5, 1).is_ok());
        assert!(handle_benchmark(5, 0).is_err());
    }
}
