//! # bikeshare-sort
//!
//! Key-ordered sorting and searching for bike-share trip analytics.
//!
//! ## Architecture
//!
//! - **Engine**: stable merge sort, binary search and a sort benchmark, all
//!   generic over the element type and a caller-supplied key function
//! - **Types**: trip records, their sort keys, and ordering fingerprints
//! - **Workload**: seeded synthetic trips for benchmarks and tests
//!
//! ## Design Principles
//!
//! 1. **Schema-free core**: the engine only sees elements through the key
//! 2. **Out-of-place**: sorting never reorders the caller's slice
//! 3. **Stable**: equal keys keep their input order
//! 4. **Stateless**: every call is independent and reentrant
//!
//! ## Example
//!
//! ```
//! use bikeshare_sort::{binary_search, merge_sort};
//! use bikeshare_sort::types::by_trip_id;
//! use bikeshare_sort::workload::generate_trips;
//!
//! let trips = generate_trips(1_000, 42);
//! let by_id = merge_sort(&trips, by_trip_id);
//!
//! let idx = binary_search(&by_id, &500, by_trip_id).unwrap();
//! assert_eq!(by_id[idx].trip_id, 500);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Order engine: sort, search, benchmark
pub mod engine;

/// Trip records, sort keys and ordering fingerprints
pub mod types;

/// Deterministic synthetic trip generation
pub mod workload;

/// Engine error type
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{
    benchmark_sort, benchmark_sort_checked, benchmark_sort_with, binary_search, merge_sort,
    try_binary_search, try_merge_sort, BenchmarkConfig, SortBenchmark, DEFAULT_REPETITIONS,
};
pub use error::EngineError;
pub use types::{OrderingDigest, TripKey, TripKeyValue, TripRecord, UserType};
