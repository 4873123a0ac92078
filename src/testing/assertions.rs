//! Assertion functions for helper outputs.
//!
//! Several helpers return `HashMap`s or deduplicated lists whose order is
//! unspecified, so most of these compare without regard to order.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
///
/// # Example
///
/// ```
/// use stream_helper::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two collections contain the same elements with the same
/// multiplicities, ignoring order.
///
/// # Panics
///
/// Panics if any element occurs a different number of times in each collection.
///
/// # Example
///
/// ```
/// use stream_helper::testing::assert_collections_unordered_equal;
///
/// assert_collections_unordered_equal(&[3, 1, 2, 1], &[1, 1, 2, 3]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    let actual_counts = count_occurrences(actual);
    let expected_counts = count_occurrences(expected);
    if actual_counts == expected_counts {
        return;
    }

    let missing: Vec<_> = expected_counts
        .iter()
        .filter_map(|(item, &want)| {
            let have = actual_counts.get(item).copied().unwrap_or(0);
            (have < want).then_some((*item, want - have))
        })
        .collect();
    let extra: Vec<_> = actual_counts
        .iter()
        .filter_map(|(item, &have)| {
            let want = expected_counts.get(item).copied().unwrap_or(0);
            (have > want).then_some((*item, have - want))
        })
        .collect();

    panic!(
        "Collection content mismatch:\n  Missing (element, count): {missing:?}\n  Extra (element, count): {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

fn count_occurrences<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
    let mut counts = HashMap::with_capacity(items.len());
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Assert that a map holds exactly the given entries, in any iteration order.
///
/// # Panics
///
/// Panics on a size mismatch, a missing key, or a differing value.
///
/// # Example
///
/// ```
/// use stream_helper::testing::assert_map_entries;
/// use std::collections::HashMap;
///
/// let m: HashMap<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
/// assert_map_entries(&m, &[("b", 2), ("a", 1)]);
/// ```
pub fn assert_map_entries<K, V, S>(actual: &HashMap<K, V, S>, expected: &[(K, V)])
where
    K: Debug + Eq + Hash,
    V: Debug + PartialEq,
    S: BuildHasher,
{
    assert_eq!(
        actual.len(),
        expected.len(),
        "HashMap size mismatch:\n  Expected entries: {expected:?}\n  Actual: {actual:?}"
    );

    for (key, expected_value) in expected {
        match actual.get(key) {
            Some(actual_value) if actual_value == expected_value => {}
            Some(actual_value) => panic!(
                "HashMap value mismatch for key {key:?}:\n  Expected: {expected_value:?}\n  Actual: {actual_value:?}"
            ),
            None => panic!("HashMap missing key: {key:?}"),
        }
    }
}

/// Assert that `groups` partitions `input` and that every group lists its
/// members in the same relative order as `input`.
///
/// # Panics
///
/// Panics if the groups are not a permutation of `input`, or if any group is
/// not a subsequence of it.
///
/// # Example
///
/// ```
/// use stream_helper::group_by;
/// use stream_helper::testing::assert_stable_groups;
///
/// let input = vec![1, 2, 3, 4, 5];
/// assert_stable_groups(&input, &group_by(&input, |n| n % 2));
/// ```
pub fn assert_stable_groups<K, T, S>(input: &[T], groups: &HashMap<K, Vec<T>, S>)
where
    K: Debug,
    T: Debug + Eq + Hash,
    S: BuildHasher,
{
    let flattened: Vec<&T> = groups.values().flatten().collect();
    let input_refs: Vec<&T> = input.iter().collect();
    assert_collections_unordered_equal(&flattened, &input_refs);

    for (key, members) in groups {
        let mut rest = input.iter();
        for member in members {
            assert!(
                rest.any(|candidate| candidate == member),
                "Group {key:?} is out of input order at {member:?}:\n  Group: {members:?}\n  Input: {input:?}"
            );
        }
    }
}
