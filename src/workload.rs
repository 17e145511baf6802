//! Deterministic synthetic trip workloads.
//!
//! Trips are drawn from a ChaCha8 stream seeded by the caller: the same seed
//! always yields the same trips, in the same order. Benchmarks, stress tests
//! and the demo binary all build their inputs here.
//!
//! ## Distribution
//!
//! | Field | Range |
//! |-------|-------|
//! | `start_station_id` / `end_station_id` | 1 ..= `station_count` |
//! | `start_minute` | 0 ..= 30 days |
//! | `duration_minutes` | 1.00 ..= 120.00 (2 dp) |
//! | `distance_km` | 0.100 ..= 25.000 (3 dp) |
//! | `user_type` | 30 % member |
//!
//! Trip ids are `1..=count` in generation order. Station, duration and
//! distance values repeat heavily, so sorting by them exercises stability.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

use crate::types::{TripRecord, UserType};

/// Stations in the default network
pub const DEFAULT_STATION_COUNT: u32 = 50;

/// Minutes in the generated time window (30 days)
const WINDOW_MINUTES: u64 = 30 * 24 * 60;

/// Probability a generated rider is a member
const MEMBER_RATE: f64 = 0.3;

/// Generate `count` trips over [`DEFAULT_STATION_COUNT`] stations.
///
/// # Example
///
/// ```
/// use bikeshare_sort::workload::generate_trips;
///
/// let a = generate_trips(100, 42);
/// let b = generate_trips(100, 42);
///
/// assert_eq!(a.len(), 100);
/// assert_eq!(a, b);
/// ```
pub fn generate_trips(count: usize, seed: u64) -> Vec<TripRecord> {
    generate_trips_with_stations(count, seed, DEFAULT_STATION_COUNT)
}

/// Generate `count` trips over `station_count` stations.
///
/// A `station_count` of zero is treated as one.
pub fn generate_trips_with_stations(count: usize, seed: u64, station_count: u32) -> Vec<TripRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let stations = station_count.max(1);
    let mut trips = Vec::with_capacity(count);

    for i in 0..count {
        let start_station_id = rng.gen_range(1..=stations);
        let end_station_id = rng.gen_range(1..=stations);
        let start_minute = rng.gen_range(0..=WINDOW_MINUTES);

        // Hundredths of a minute: 1.00 to 120.00
        let duration_minutes = Decimal::new(rng.gen_range(100i64..=12_000), 2);
        // Metres: 0.100 to 25.000 km
        let distance_km = Decimal::new(rng.gen_range(100i64..=25_000), 3);

        let user_type = if rng.gen_bool(MEMBER_RATE) {
            UserType::Member
        } else {
            UserType::Casual
        };

        trips.push(TripRecord {
            trip_id: (i + 1) as u64,
            user_id: rng.gen_range(1..=10_000),
            bike_id: rng.gen_range(1..=2_000),
            start_station_id,
            end_station_id,
            start_minute,
            duration_minutes,
            distance_km,
            user_type,
        });
    }

    trips
}

// ============================================================================
// Unit Tests
// ============================================================================
