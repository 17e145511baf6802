//! Error type for the order engine.
//!
//! The sort and search operations never produce an `EngineError`: a failing
//! key function hands its own error type straight back through the `try_*`
//! variants. Only the benchmark harness and the parsing of trip key names
//! have failure modes of their own.

use thiserror::Error;

/// Errors raised by the benchmark harness and record-key parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A benchmark needs at least one repetition per sort.
    #[error("benchmark repetitions must be at least 1, got {0}")]
    InvalidRepetitions(usize),

    /// The merge sort and the reference sort disagreed on the ordering.
    #[error("merge sort diverged from reference sort at position {position}")]
    OrderingMismatch {
        /// First index where the two outputs differ
        position: usize,
    },

    /// A trip key name did not match any known projection.
    #[error("unknown trip key '{0}' (expected one of: trip-id, start-station, start-time, duration, distance)")]
    UnknownTripKey(String),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
