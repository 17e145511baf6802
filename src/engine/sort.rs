//! Stable merge sort ordered by a caller-supplied key.
//!
//! ## Algorithm
//!
//! Top-down divide and conquer:
//!
//! ```text
//! [3, 1, 2, 1]
//!   split at len / 2    -> [3, 1] | [2, 1]
//!   sort each half      -> [1, 3] | [1, 2]
//!   merge (ties left)   -> [1, 1, 2, 3]
//! ```
//!
//! The merge repeatedly takes the front element with the smaller key. On equal
//! keys the left element wins, which is what makes the sort stable.
//!
//! ## Ownership
//!
//! The sort is out-of-place: it borrows the caller's slice, clones each element
//! exactly once at the leaves, and moves elements through every merge level.
//! The input is never reordered.
//!
//! ## Complexity
//!
//! | Resource | Cost |
//! |----------|------|
//! | Time (every input shape) | O(n log n) |
//! | Auxiliary space per level | O(n) |
//! | Recursion depth | O(log n) |

use std::convert::Infallible;

/// Sort `data` by `key`, returning a new vector.
///
/// Elements with equal keys keep their input order.
///
/// # Example
///
/// ```
/// use bikeshare_sort::engine::merge_sort;
///
/// let data = vec![(3, 'c'), (1, 'a'), (2, 'b'), (1, 'z')];
/// let sorted = merge_sort(&data, |pair| pair.0);
///
/// assert_eq!(sorted, vec![(1, 'a'), (1, 'z'), (2, 'b'), (3, 'c')]);
/// // Input untouched
/// assert_eq!(data[0], (3, 'c'));
/// ```
pub fn merge_sort<T, K, F>(data: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    match try_merge_sort(data, |item| Ok::<K, Infallible>(key(item))) {
        Ok(sorted) => sorted,
        Err(never) => match never {},
    }
}

/// Sort `data` by a fallible key function.
///
/// The first error returned by `key` aborts the sort and is handed back to the
/// caller as-is. On success the result is identical to [`merge_sort`].
///
/// # Example
///
/// ```
/// use bikeshare_sort::engine::try_merge_sort;
///
/// let raw = ["12", "7", "x"];
/// let result = try_merge_sort(&raw, |s| s.parse::<u32>());
/// assert!(result.is_err());
///
/// let raw = ["12", "7", "9"];
/// let sorted = try_merge_sort(&raw, |s| s.parse::<u32>()).unwrap();
/// assert_eq!(sorted, vec!["7", "9", "12"]);
/// ```
pub fn try_merge_sort<T, K, E, F>(data: &[T], mut key: F) -> Result<Vec<T>, E>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> Result<K, E>,
{
    sort_slice(data, &mut key)
}

fn sort_slice<T, K, E, F>(data: &[T], key: &mut F) -> Result<Vec<T>, E>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> Result<K, E>,
{
    if data.len() <= 1 {
        return Ok(data.to_vec());
    }

    let mid = data.len() / 2;
    let left = sort_slice(&data[..mid], key)?;
    let right = sort_slice(&data[mid..], key)?;

    merge(left, right, key)
}

/// Merge two key-sorted runs into one. Ties take from `left`.
fn merge<T, K, E, F>(left: Vec<T>, right: Vec<T>, key: &mut F) -> Result<Vec<T>, E>
where
    K: Ord,
    F: FnMut(&T) -> Result<K, E>,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => key(l)? <= key(r)?,
            _ => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        if let Some(item) = next {
            merged.push(item);
        }
    }

    // At most one side still has elements
    merged.extend(left);
    merged.extend(right);

    Ok(merged)
}

// ============================================================================
// Unit Tests
// ============================================================================
