//! bikeshare-sort - Binary Entry Point
//!
//! Generates a seeded synthetic trip set, sorts it by the chosen key,
//! optionally looks up a trip by id, and benchmarks the merge sort against
//! the standard library sort.
//!
//! ```bash
//! cargo run --release -- --trips 100000 --key distance --search-trip 4242
//! RUST_LOG=debug cargo run -- --repetitions 3
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bikeshare_sort::types::by_trip_id;
use bikeshare_sort::workload::generate_trips;
use bikeshare_sort::{
    benchmark_sort_checked, binary_search, merge_sort, BenchmarkConfig, OrderingDigest, TripKey,
    DEFAULT_REPETITIONS,
};

#[derive(Parser, Debug)]
#[command(name = "bikeshare-sort")]
#[command(about = "Sort, search and benchmark synthetic bike-share trips", long_about = None)]
struct Cli {
    /// Number of synthetic trips to generate
    #[arg(short, long, default_value_t = 10_000)]
    trips: usize,

    /// Seed for trip generation
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Sort key: trip-id, start-station, start-time, duration or distance
    #[arg(short, long, default_value_t = TripKey::Duration)]
    key: TripKey,

    /// Repetitions per sort in the benchmark
    #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
    repetitions: usize,

    /// Trip id to look up after sorting by trip id
    #[arg(long, value_name = "TRIP_ID")]
    search_trip: Option<u64>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();

    let cli = Cli::parse();
    let config = BenchmarkConfig::new(cli.repetitions).context("invalid --repetitions")?;

    let trips = generate_trips(cli.trips, cli.seed);
    info!(count = trips.len(), seed = cli.seed, "generated trips");

    // Sort by the requested key
    let key = cli.key;
    let sorted = merge_sort(&trips, |trip| key.extract(trip));
    let digest = OrderingDigest::of_trips(&sorted);
    info!(
        key = %key,
        fingerprint = %digest.fingerprint_hex(),
        "sorted trips"
    );

    // Optional lookup
    if let Some(target) = cli.search_trip {
        let by_id = merge_sort(&trips, by_trip_id);
        match binary_search(&by_id, &target, by_trip_id) {
            Some(index) => {
                let trip = &by_id[index];
                info!(
                    trip_id = target,
                    index,
                    start_station = trip.start_station_id,
                    duration_minutes = %trip.duration_minutes,
                    distance_km = %trip.distance_km,
                    user_type = trip.user_type.as_str(),
                    "trip found"
                );
            }
            None => warn!(trip_id = target, "trip not found"),
        }
    }

    let result = benchmark_sort_checked(&config, &trips, |trip| key.extract(trip))
        .context("sort benchmark failed")?;

    println!("===========================================");
    println!("  bikeshare-sort");
    println!("===========================================");
    println!("  Trips:             {:>12}", trips.len());
    println!("  Sort key:          {:>12}", key);
    if let (Some(first), Some(last)) = (sorted.first(), sorted.last()) {
        println!("  Smallest key:      {:>12}", key.extract(first));
        println!("  Largest key:       {:>12}", key.extract(last));
    }
    println!("  Fingerprint:       {}", digest.fingerprint_hex());
    println!();
    println!("  Repetitions:       {:>12}", result.repetitions);
    println!("  Merge sort:        {:>12.2?}", result.merge_sort);
    println!("  Reference sort:    {:>12.2?}", result.reference_sort);
    println!("  Merge sort (avg):  {:>12.2?}", result.merge_sort_mean());
    println!("  Reference (avg):   {:>12.2?}", result.reference_sort_mean());
    match result.ratio() {
        Some(ratio) => println!("  Ratio:             {:>12.2}x", ratio),
        None => println!("  Ratio:             {:>12}", "n/a"),
    }

    Ok(())
}
