use market_data::ListingCatalog;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt().init();

    let paths: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        eprintln!("usage: benchmark_load <listings.json>...");
        return;
    }

    println!("Loading {} envelope file(s)...\n", paths.len());

    let start = Instant::now();
    let catalog = ListingCatalog::load_from_files(&paths)
        .expect("Failed to load listings");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Listings: {}", catalog.len());
    println!("\nPerformance: {:.0} listings/second",
             catalog.len() as f64 / elapsed.as_secs_f64());
}
