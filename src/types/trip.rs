//! Bike-share trip records and their sort keys.
//!
//! ## Fixed-Point Fields
//!
//! Distance and duration are `rust_decimal::Decimal` rather than `f64`.
//! `Decimal` implements `Ord`, so every projection below is a valid key for
//! the order engine without a wrapper type.
//!
//! ## Keys
//!
//! Each sortable projection exists twice:
//!
//! - as a free function (`by_duration`, `by_distance`, ...) for static use
//! - as a [`TripKey`] variant for selection at runtime (CLI, config)

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::EngineError;

// ============================================================================
// UserType enum
// ============================================================================

/// Rider category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum UserType {
    /// Pay-per-ride or day-pass rider
    #[default]
    Casual,
    /// Subscribed member
    Member,
}

impl UserType {
    /// Lowercase name as it appears in trip exports
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Casual => "casual",
            UserType::Member => "member",
        }
    }
}

// ============================================================================
// TripRecord struct
// ============================================================================

/// A single completed trip.
///
/// ## Example
///
/// ```
/// use bikeshare_sort::types::{TripRecord, UserType};
/// use rust_decimal::Decimal;
///
/// let trip = TripRecord {
///     trip_id: 1,
///     user_id: 100,
///     bike_id: 7,
///     start_station_id: 12,
///     end_station_id: 30,
///     start_minute: 480,                          // 08:00 on day 0
///     duration_minutes: Decimal::new(2_350, 2),   // 23.50
///     distance_km: Decimal::new(4_125, 3),        // 4.125
///     user_type: UserType::Member,
/// };
///
/// assert_eq!(trip.end_minute(), 503);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TripRecord {
    /// Unique trip identifier
    pub trip_id: u64,

    /// Rider identifier
    pub user_id: u64,

    /// Bike identifier
    pub bike_id: u64,

    /// Station where the trip started
    pub start_station_id: u32,

    /// Station where the trip ended
    pub end_station_id: u32,

    /// Start time in whole minutes since the dataset epoch
    pub start_minute: u64,

    /// Trip duration in minutes (fixed-point)
    pub duration_minutes: Decimal,

    /// Trip distance in kilometres (fixed-point)
    pub distance_km: Decimal,

    /// Rider category
    pub user_type: UserType,
}

impl TripRecord {
    /// End time in whole minutes since the dataset epoch, rounding the
    /// duration down.
    pub fn end_minute(&self) -> u64 {
        let minutes = self.duration_minutes.trunc().to_u64().unwrap_or(0);
        self.start_minute.saturating_add(minutes)
    }

    /// Hour of day (0-23) the trip started in
    pub fn start_hour(&self) -> u64 {
        (self.start_minute / 60) % 24
    }
}

// ============================================================================
// Key functions
// ============================================================================

/// Key: trip identifier
pub fn by_trip_id(trip: &TripRecord) -> u64 {
    trip.trip_id
}

/// Key: start station
pub fn by_start_station(trip: &TripRecord) -> u32 {
    trip.start_station_id
}

/// Key: start time
pub fn by_start_time(trip: &TripRecord) -> u64 {
    trip.start_minute
}

/// Key: duration
pub fn by_duration(trip: &TripRecord) -> Decimal {
    trip.duration_minutes
}

/// Key: distance
pub fn by_distance(trip: &TripRecord) -> Decimal {
    trip.distance_km
}

// ============================================================================
// TripKey enum
// ============================================================================

/// Projection of a [`TripRecord`] selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TripKey {
    /// [`by_trip_id`]
    TripId,
    /// [`by_start_station`]
    StartStation,
    /// [`by_start_time`]
    StartTime,
    /// [`by_duration`]
    #[default]
    Duration,
    /// [`by_distance`]
    Distance,
}

/// Value produced by a [`TripKey`] projection.
///
/// Values from the same key always share a variant, so comparing them
/// compares the underlying field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TripKeyValue {
    /// Integer-valued key (trip id, start station, start time)
    Int(u64),
    /// Fixed-point key (duration, distance)
    Fixed(Decimal),
}

impl fmt::Display for TripKeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TripKeyValue::Int(v) => v.to_string(),
            TripKeyValue::Fixed(v) => v.to_string(),
        };
        f.pad(&text)
    }
}

impl TripKey {
    /// All keys, in CLI listing order
    pub const ALL: [TripKey; 5] = [
        TripKey::TripId,
        TripKey::StartStation,
        TripKey::StartTime,
        TripKey::Duration,
        TripKey::Distance,
    ];

    /// Project a trip onto this key
    #[inline]
    pub fn extract(self, trip: &TripRecord) -> TripKeyValue {
        match self {
            TripKey::TripId => TripKeyValue::Int(by_trip_id(trip)),
            TripKey::StartStation => TripKeyValue::Int(u64::from(by_start_station(trip))),
            TripKey::StartTime => TripKeyValue::Int(by_start_time(trip)),
            TripKey::Duration => TripKeyValue::Fixed(by_duration(trip)),
            TripKey::Distance => TripKeyValue::Fixed(by_distance(trip)),
        }
    }

    /// Kebab-case name used on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            TripKey::TripId => "trip-id",
            TripKey::StartStation => "start-station",
            TripKey::StartTime => "start-time",
            TripKey::Duration => "duration",
            TripKey::Distance => "distance",
        }
    }
}

impl fmt::Display for TripKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TripKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        TripKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| EngineError::UnknownTripKey(s.to_string()))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
