//! Record types consumed by the order engine.
//!
//! The engine itself is schema-free; these are the records the bike-share
//! tooling sorts and searches, plus the fingerprint used to compare orderings.
//!
//! ## Types
//!
//! - [`TripRecord`]: A completed trip
//! - [`UserType`]: Casual rider or member
//! - [`TripKey`]: Runtime-selectable sort key over trips
//! - [`TripKeyValue`]: Value produced by a `TripKey`
//! - [`OrderingDigest`]: SHA-256 fingerprint of an ordering
//!
//! ## Fixed-Point Fields
//!
//! Trip distance and duration are `rust_decimal::Decimal`, which is totally
//! ordered. Floating point is never used as a sort key.

pub mod trip;
mod digest;

// Re-export all types at module level
pub use trip::{
    by_distance, by_duration, by_start_station, by_start_time, by_trip_id, TripKey, TripKeyValue,
    TripRecord, UserType,
};
pub use digest::OrderingDigest;
