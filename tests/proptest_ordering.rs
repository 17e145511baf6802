//! Property-based tests for the sort and search contracts.
//!
//! Sort: permutation, order, stability, idempotence, agreement with the
//! standard library's stable sort. Search: every present key is found at a
//! matching position, absent keys return `None`.

use std::collections::HashMap;

use proptest::prelude::*;

use bikeshare_sort::{binary_search, merge_sort, try_binary_search, try_merge_sort};

/// (key, original index) pairs with a narrow key range so duplicates are common
fn tagged(keys: &[u8]) -> Vec<(u8, usize)> {
    keys.iter().copied().enumerate().map(|(i, k)| (k, i)).collect()
}

fn multiset(items: &[(u8, usize)]) -> HashMap<(u8, usize), usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(*item).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn sort_is_permutation(keys in prop::collection::vec(0u8..16, 0..300)) {
        let data = tagged(&keys);
        let sorted = merge_sort(&data, |pair| pair.0);

        prop_assert_eq!(sorted.len(), data.len());
        prop_assert_eq!(multiset(&sorted), multiset(&data));
    }

    #[test]
    fn sort_is_ordered(keys in prop::collection::vec(any::<i32>(), 0..300)) {
        let sorted = merge_sort(&keys, |x| *x);

        for pair in sorted.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn sort_is_stable(keys in prop::collection::vec(0u8..8, 0..300)) {
        let data = tagged(&keys);
        let sorted = merge_sort(&data, |pair| pair.0);

        for pair in sorted.windows(2) {
            if pair[0].0 == pair[1].0 {
                prop_assert!(pair[0].1 < pair[1].1, "equal keys reordered: {:?}", pair);
            }
        }
    }

    #[test]
    fn sort_is_idempotent(keys in prop::collection::vec(0u8..32, 0..300)) {
        let data = tagged(&keys);
        let once = merge_sort(&data, |pair| pair.0);
        let twice = merge_sort(&once, |pair| pair.0);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_matches_std_stable_sort(keys in prop::collection::vec(0u8..16, 0..300)) {
        let data = tagged(&keys);
        let sorted = merge_sort(&data, |pair| pair.0);

        let mut reference = data.clone();
        reference.sort_by_key(|pair| pair.0);

        prop_assert_eq!(sorted, reference);
    }

    #[test]
    fn sort_leaves_input_untouched(keys in prop::collection::vec(any::<u16>(), 0..200)) {
        let before = keys.clone();
        let _ = merge_sort(&keys, |x| *x);

        prop_assert_eq!(keys, before);
    }

    #[test]
    fn search_finds_every_present_key(keys in prop::collection::vec(0u8..64, 1..300)) {
        let sorted = merge_sort(&tagged(&keys), |pair| pair.0);

        for (key, _) in &sorted {
            let idx = binary_search(&sorted, key, |pair| pair.0);
            prop_assert!(idx.is_some(), "key {} not found", key);
            if let Some(idx) = idx {
                prop_assert_eq!(sorted[idx].0, *key);
            }
        }
    }

    #[test]
    fn search_misses_absent_key(
        keys in prop::collection::vec(0u8..64, 0..300),
        target in 0u8..128,
    ) {
        prop_assume!(!keys.contains(&target));
        let sorted = merge_sort(&keys, |x| *x);

        prop_assert_eq!(binary_search(&sorted, &target, |x| *x), None);
    }

    #[test]
    fn fallible_sort_reports_key_error(
        keys in prop::collection::vec(0u8..64, 2..100),
        poison in 0usize..100,
    ) {
        let poison = poison % keys.len();
        let data = tagged(&keys);

        let result = try_merge_sort(&data, |pair| {
            if pair.1 == poison { Err(pair.1) } else { Ok(pair.0) }
        });

        // Inputs of length >= 2 compare every element at least once
        prop_assert_eq!(result, Err(poison));
    }

    #[test]
    fn fallible_search_ok_matches_infallible(
        keys in prop::collection::vec(0u8..64, 0..200),
        target in 0u8..64,
    ) {
        let sorted = merge_sort(&keys, |x| *x);

        let fallible = try_binary_search(&sorted, &target, |x| Ok::<u8, ()>(*x));
        prop_assert_eq!(fallible, Ok(binary_search(&sorted, &target, |x| *x)));
    }
}

#[test]
fn empty_input() {
    let empty: Vec<(u8, char)> = Vec::new();

    assert!(merge_sort(&empty, |pair| pair.0).is_empty());
    assert_eq!(binary_search(&empty, &1, |pair| pair.0), None);
}

#[test]
fn concrete_scenario() {
    let input = vec![(3, 'c'), (1, 'a'), (2, 'b'), (1, 'z')];
    let sorted = merge_sort(&input, |pair| pair.0);

    assert_eq!(sorted, vec![(1, 'a'), (1, 'z'), (2, 'b'), (3, 'c')]);
    assert_eq!(binary_search(&sorted, &2, |pair| pair.0), Some(2));
    assert_eq!(binary_search(&sorted, &9, |pair| pair.0), None);
}
