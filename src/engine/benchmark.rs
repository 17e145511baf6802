//! Timing harness comparing the merge sort with the standard library sort.
//!
//! ## Measurement
//!
//! Each sort runs `repetitions` times over the same input and the total
//! wall-clock time per sort is reported. The reference sort is
//! `slice::sort_by_key`, which is also stable, so both sides do equivalent
//! work and produce identical output.
//!
//! Every repetition starts from the caller's original slice:
//!
//! - the merge sort is out-of-place and never touches the input
//! - the reference sort sorts a fresh copy each time
//!
//! Later repetitions therefore never see data pre-sorted by an earlier one.
//!
//! ## Example
//!
//! ```
//! use bikeshare_sort::engine::{benchmark_sort, DEFAULT_REPETITIONS};
//!
//! let data: Vec<u32> = (0..1_000).rev().collect();
//! let result = benchmark_sort(&data, |x| *x);
//!
//! assert_eq!(result.repetitions, DEFAULT_REPETITIONS);
//! ```

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::engine::merge_sort;
use crate::error::{EngineError, Result};

/// Repetitions per sort when no configuration is given.
pub const DEFAULT_REPETITIONS: usize = 10;

// ============================================================================
// Configuration
// ============================================================================

/// Benchmark configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    repetitions: usize,
}

impl BenchmarkConfig {
    /// Create a configuration running each sort `repetitions` times.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidRepetitions`] if `repetitions` is zero.
    pub fn new(repetitions: usize) -> Result<Self> {
        if repetitions == 0 {
            return Err(EngineError::InvalidRepetitions(repetitions));
        }
        Ok(Self { repetitions })
    }

    /// Number of times each sort is run
    #[inline]
    pub fn repetitions(&self) -> usize {
        self.repetitions
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

// ============================================================================
// Result
// ============================================================================

/// Total elapsed time of each sort over the same workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortBenchmark {
    /// Total time spent in the merge sort
    pub merge_sort: Duration,

    /// Total time spent in the reference sort
    pub reference_sort: Duration,

    /// Repetitions per sort
    pub repetitions: usize,
}

impl SortBenchmark {
    /// Mean merge sort time per repetition
    pub fn merge_sort_mean(&self) -> Duration {
        mean(self.merge_sort, self.repetitions)
    }

    /// Mean reference sort time per repetition
    pub fn reference_sort_mean(&self) -> Duration {
        mean(self.reference_sort, self.repetitions)
    }

    /// How many times slower the merge sort was than the reference sort.
    ///
    /// `None` when the reference time is too small to measure.
    pub fn ratio(&self) -> Option<f64> {
        let reference = self.reference_sort.as_secs_f64();
        if reference == 0.0 {
            return None;
        }
        Some(self.merge_sort.as_secs_f64() / reference)
    }
}

impl fmt::Display for SortBenchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "merge_sort={:.2?} reference_sort={:.2?} repetitions={}",
            self.merge_sort, self.reference_sort, self.repetitions
        )?;
        if let Some(ratio) = self.ratio() {
            write!(f, " ratio={:.2}", ratio)?;
        }
        Ok(())
    }
}

fn mean(total: Duration, repetitions: usize) -> Duration {
    match u32::try_from(repetitions) {
        Ok(0) => Duration::ZERO,
        Ok(n) => total / n,
        Err(_) => Duration::from_secs_f64(total.as_secs_f64() / repetitions as f64),
    }
}

// ============================================================================
// Harness
// ============================================================================

/// Time the merge sort against the reference sort with
/// [`DEFAULT_REPETITIONS`] repetitions each.
pub fn benchmark_sort<T, K, F>(data: &[T], key: F) -> SortBenchmark
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    benchmark_sort_with(&BenchmarkConfig::default(), data, key)
}

/// Time the merge sort against the reference sort with an explicit
/// configuration.
pub fn benchmark_sort_with<T, K, F>(config: &BenchmarkConfig, data: &[T], mut key: F) -> SortBenchmark
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    debug!(
        len = data.len(),
        repetitions = config.repetitions,
        "starting sort benchmark"
    );

    let merge_elapsed = time_repeated(config.repetitions, || {
        black_box(merge_sort(data, &mut key));
    });

    let reference_elapsed = time_repeated(config.repetitions, || {
        let mut copy = data.to_vec();
        copy.sort_by_key(&mut key);
        black_box(copy);
    });

    let result = SortBenchmark {
        merge_sort: merge_elapsed,
        reference_sort: reference_elapsed,
        repetitions: config.repetitions,
    };

    info!(
        len = data.len(),
        repetitions = result.repetitions,
        merge_sort_us = result.merge_sort.as_micros() as u64,
        reference_sort_us = result.reference_sort.as_micros() as u64,
        "sort benchmark complete"
    );

    result
}

/// Verify both sorts agree on the ordering, then benchmark them.
///
/// # Errors
///
/// [`EngineError::OrderingMismatch`] with the first differing position if
/// the merge sort output is not element-for-element equal to the reference
/// sort output.
pub fn benchmark_sort_checked<T, K, F>(
    config: &BenchmarkConfig,
    data: &[T],
    mut key: F,
) -> Result<SortBenchmark>
where
    T: Clone + PartialEq,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let merged = merge_sort(data, &mut key);
    let mut reference = data.to_vec();
    reference.sort_by_key(&mut key);

    if let Some(position) = first_mismatch(&merged, &reference) {
        return Err(EngineError::OrderingMismatch { position });
    }

    Ok(benchmark_sort_with(config, data, key))
}

fn first_mismatch<T: PartialEq>(a: &[T], b: &[T]) -> Option<usize> {
    a.iter()
        .zip(b)
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}

fn time_repeated<F: FnMut()>(repetitions: usize, mut f: F) -> Duration {
    let start = Instant::now();
    for _ in 0..repetitions {
        f();
    }
    start.elapsed()
}

// ============================================================================
// Unit Tests
// ============================================================================
