//! Ordering fingerprints.
//!
//! An [`OrderingDigest`] condenses an ordered sequence of element identifiers
//! into a SHA-256 fingerprint. Two sequences with the same identifiers in the
//! same order hash identically; swapping any two distinct identifiers changes
//! the hash. This lets stress tests and the demo binary compare the output of
//! different sorts, or of repeated runs, without keeping both outputs around.

use sha2::{Digest, Sha256};

use crate::types::TripRecord;

/// Fingerprint of an ordered sequence of identifiers.
///
/// ## Example
///
/// ```
/// use bikeshare_sort::types::OrderingDigest;
///
/// let a = OrderingDigest::from_ids([1u64, 2, 3]);
/// let b = OrderingDigest::from_ids([1u64, 3, 2]);
///
/// assert_eq!(a.element_count, 3);
/// assert_ne!(a.fingerprint, b.fingerprint);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrderingDigest {
    /// Number of identifiers hashed
    pub element_count: u64,

    /// SHA-256 over the little-endian identifiers, in order
    pub fingerprint: [u8; 32],
}

impl OrderingDigest {
    /// Hash identifiers in iteration order
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut hasher = Sha256::new();
        let mut element_count = 0u64;

        for id in ids {
            hasher.update(id.to_le_bytes());
            element_count += 1;
        }

        let mut fingerprint = [0u8; 32];
        fingerprint.copy_from_slice(&hasher.finalize());

        Self {
            element_count,
            fingerprint,
        }
    }

    /// Fingerprint of a trip ordering, by trip id
    pub fn of_trips(trips: &[TripRecord]) -> Self {
        Self::from_ids(trips.iter().map(|trip| trip.trip_id))
    }

    /// Get the fingerprint as a hex string
    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint)
    }

    /// Check if no identifiers were hashed
    pub fn is_empty(&self) -> bool {
        self.element_count == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
