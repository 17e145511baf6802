//! Binary search over a key-sorted slice.
//!
//! ## Caller Contract
//!
//! The slice must already be sorted ascending by the same key function used
//! for the search (for example the output of [`merge_sort`](super::merge_sort)).
//! Sortedness is not checked. On unsorted input the result is unspecified:
//! the search may miss an element that is present.
//!
//! ## Duplicates
//!
//! When several elements share the target key, the index returned is the
//! first one the bisection lands on. It is not guaranteed to be the first or
//! the last occurrence.

use std::cmp::Ordering;
use std::convert::Infallible;

/// Find the index of an element whose key equals `target`.
///
/// Returns `None` when no element matches, including on empty input.
///
/// # Example
///
/// ```
/// use bikeshare_sort::engine::binary_search;
///
/// let sorted = vec![(1, 'a'), (1, 'z'), (2, 'b'), (3, 'c')];
///
/// assert_eq!(binary_search(&sorted, &2, |pair| pair.0), Some(2));
/// assert_eq!(binary_search(&sorted, &9, |pair| pair.0), None);
/// ```
pub fn binary_search<T, K, F>(data: &[T], target: &K, mut key: F) -> Option<usize>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    match try_binary_search(data, target, |item| Ok::<K, Infallible>(key(item))) {
        Ok(found) => found,
        Err(never) => match never {},
    }
}

/// Binary search with a fallible key function.
///
/// The first error returned by `key` ends the search and is returned
/// unchanged.
pub fn try_binary_search<T, K, E, F>(
    data: &[T],
    target: &K,
    mut key: F,
) -> Result<Option<usize>, E>
where
    K: Ord,
    F: FnMut(&T) -> Result<K, E>,
{
    if data.is_empty() {
        return Ok(None);
    }

    // Inclusive bounds [low, high]
    let mut low = 0usize;
    let mut high = data.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;

        match key(&data[mid])?.cmp(target) {
            Ordering::Equal => return Ok(Some(mid)),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
        }
    }

    Ok(None)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_search_empty() {
        let data: Vec<u32> = Vec::new();
        assert_eq!(binary_search(&data, &7, |x| *x), None);
    }

    #[test]
    fn test_search_single_hit_and_miss() {
        let data = vec![5u32];
        assert_eq!(binary_search(&data, &5, |x| *x), Some(0));
        assert_eq!(binary_search(&data, &4, |x| *x), None);
        assert_eq!(binary_search(&data, &6, |x| *x), None);
    }

    #[test]
    fn test_search_concrete_scenario() {
        let sorted = vec![(1, 'a'), (1, 'z'), (2, 'b'), (3, 'c')];

        assert_eq!(binary_search(&sorted, &2, |pair| pair.0), Some(2));
        assert_eq!(binary_search(&sorted, &9, |pair| pair.0), None);
    }

    #[test]
    fn test_search_every_element() {
        let data: Vec<u32> = (0..257).map(|x| x * 3).collect();

        for (i, value) in data.iter().enumerate() {
            assert_eq!(binary_search(&data, value, |x| *x), Some(i));
        }
    }

    #[test]
    fn test_search_misses_between_and_beyond() {
        let data: Vec<u32> = (1..100).map(|x| x * 2).collect();

        assert_eq!(binary_search(&data, &0, |x| *x), None);
        assert_eq!(binary_search(&data, &1, |x| *x), None);
        assert_eq!(binary_search(&data, &101, |x| *x), None);
        assert_eq!(binary_search(&data, &1000, |x| *x), None);
    }

    #[test]
    fn test_search_duplicates_lands_on_some_match() {
        let data = vec![(1, 'a'), (2, 'b'), (2, 'c'), (2, 'd'), (2, 'e'), (3, 'f')];

        let idx = binary_search(&data, &2, |pair| pair.0).unwrap();
        assert_eq!(data[idx].0, 2);
        // First probe is the midpoint of [0, 5]
        assert_eq!(idx, 2);
    }

    #[test]
    fn test_search_is_logarithmic() {
        let data: Vec<u64> = (0..1_000_000).collect();
        let calls = Cell::new(0u32);

        let found = binary_search(&data, &999_999, |x| {
            calls.set(calls.get() + 1);
            *x
        });

        assert_eq!(found, Some(999_999));
        assert!(calls.get() <= 21, "too many probes: {}", calls.get());
    }

    #[test]
    fn test_try_search_propagates_key_error() {
        let data = vec!["1", "2", "bad", "4", "5"];
        let result = try_binary_search(&data, &3, |s| s.parse::<i32>());
        assert!(result.is_err());
    }

    #[test]
    fn test_try_search_ok() {
        let data = vec!["1", "2", "3"];
        assert_eq!(try_binary_search(&data, &3, |s| s.parse::<i32>()), Ok(Some(2)));
        assert_eq!(try_binary_search(&data, &7, |s| s.parse::<i32>()), Ok(None));
    }
}
