//! Order engine: key-ordered sorting and searching.
//!
//! ## Components
//!
//! - [`merge_sort`] / [`try_merge_sort`]: stable, out-of-place merge sort
//! - [`binary_search`] / [`try_binary_search`]: search over a key-sorted slice
//! - [`benchmark_sort`]: times the merge sort against `slice::sort_by_key`
//!
//! ## Key Functions
//!
//! Every operation takes a key function projecting an element to an `Ord`
//! value. The engine never inspects elements any other way. Key functions
//! should be deterministic; the `try_*` variants accept a fallible key and
//! return its error unchanged.
//!
//! ## Complexity
//!
//! | Operation | Time | Extra space |
//! |-----------|------|-------------|
//! | Sort | O(n log n) | O(n) |
//! | Search | O(log n) | O(1) |
//! | Benchmark | O(r · n log n) | O(n) |
//!
//! ## Example
//!
//! ```
//! use bikeshare_sort::engine::{binary_search, merge_sort};
//!
//! let trips = vec![("t3", 31), ("t1", 12), ("t2", 25), ("t4", 12)];
//!
//! // Sort by duration, ties keep their input order
//! let by_duration = merge_sort(&trips, |trip| trip.1);
//! assert_eq!(by_duration[0], ("t1", 12));
//! assert_eq!(by_duration[1], ("t4", 12));
//!
//! let idx = binary_search(&by_duration, &25, |trip| trip.1);
//! assert_eq!(idx, Some(2));
//! ```

pub mod sort;
pub mod search;
pub mod benchmark;

pub use sort::{merge_sort, try_merge_sort};
pub use search::{binary_search, try_binary_search};
pub use benchmark::{
    benchmark_sort, benchmark_sort_checked, benchmark_sort_with, BenchmarkConfig, SortBenchmark,
    DEFAULT_REPETITIONS,
};
