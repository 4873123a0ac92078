//! Collection-to-map helpers.
//!
//! # Overview
//! - [`to_map`] / [`to_map_with_key`] - require unique keys, fail on the first collision
//! - [`to_map_unique`] / [`to_map_unique2`] - resolve collisions first-wins / last-wins
//! - [`to_map_with_key_unique`] / [`to_map_with_key_unique2`] - element-valued variants that
//!   substitute a default for absent elements before resolving collisions
//! - [`to_map_with_policy`] / [`to_map_with_key_policy`] - the same, with the [`TieBreak`]
//!   chosen at runtime
//!
//! Maps are `std::collections::HashMap`; their iteration order is unspecified.

use crate::error::{Result, StreamError};
use crate::policy::TieBreak;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace};

/// Build a map from each element's key to its derived value.
///
/// Keys must be unique across `items`.
///
/// # Errors
/// Returns [`StreamError::DuplicateKey`] on the first element whose key was
/// already produced by an earlier element. No partial map is returned.
///
/// # Example
/// ```
/// use stream_helper::to_map;
///
/// let pairs = vec![("a", 1), ("b", 2)];
/// let m = to_map(&pairs, |p| p.0, |p| p.1).unwrap();
/// assert_eq!(m["a"], 1);
///
/// let dup = vec![("a", 1), ("a", 2)];
/// assert!(to_map(&dup, |p| p.0, |p| p.1).is_err());
/// ```
pub fn to_map<T, K, V, KF, VF>(items: &[T], key_fn: KF, value_fn: VF) -> Result<HashMap<K, V>>
where
    K: Eq + Hash + Debug,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
{
    let mut map = HashMap::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        match map.entry(key_fn(item)) {
            Entry::Occupied(slot) => {
                // first occurrence is located lazily, on the error path
                let first = items
                    .iter()
                    .position(|t| key_fn(t) == *slot.key())
                    .unwrap_or(idx);
                debug!(key = ?slot.key(), first, duplicate = idx, "key collision while building map");
                return Err(StreamError::duplicate_key(slot.key(), first, idx));
            }
            Entry::Vacant(slot) => {
                slot.insert(value_fn(item));
            }
        }
    }
    Ok(map)
}

/// [`to_map`] with the element itself as the value.
///
/// # Errors
/// Same as [`to_map`].
pub fn to_map_with_key<T, K, KF>(items: &[T], key_fn: KF) -> Result<HashMap<K, T>>
where
    T: Clone,
    K: Eq + Hash + Debug,
    KF: Fn(&T) -> K,
{
    to_map(items, key_fn, T::clone)
}

/// Build a map resolving duplicate keys with `policy`.
///
/// Unlike [`to_map`], keys need not implement `Debug`.
///
/// The tie-break follows encounter order in `items`, so the result is
/// deterministic for a given input.
pub fn to_map_with_policy<T, K, V, KF, VF>(
    items: &[T],
    key_fn: KF,
    value_fn: VF,
    policy: TieBreak,
) -> HashMap<K, V>
where
    K: Eq + Hash,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
{
    let mut map = HashMap::with_capacity(items.len());
    for item in items {
        let value = value_fn(item);
        match map.entry(key_fn(item)) {
            Entry::Occupied(slot) => {
                let (key, existing) = slot.remove_entry();
                trace!(%policy, "duplicate key resolved");
                map.insert(key, policy.resolve(existing, value));
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
    map
}

/// Key/value map where the first element producing a key wins.
///
/// # Example
/// ```
/// use stream_helper::to_map_unique;
///
/// let pairs = vec![("a", 1), ("a", 2), ("b", 3)];
/// let m = to_map_unique(&pairs, |p| p.0, |p| p.1);
/// assert_eq!(m["a"], 1);
/// ```
pub fn to_map_unique<T, K, V, KF, VF>(items: &[T], key_fn: KF, value_fn: VF) -> HashMap<K, V>
where
    K: Eq + Hash,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
{
    to_map_with_policy(items, key_fn, value_fn, TieBreak::First)
}

/// Key/value map where the last element producing a key wins.
pub fn to_map_unique2<T, K, V, KF, VF>(items: &[T], key_fn: KF, value_fn: VF) -> HashMap<K, V>
where
    K: Eq + Hash,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> V,
{
    to_map_with_policy(items, key_fn, value_fn, TieBreak::Last)
}

/// Element-valued map over possibly absent elements.
///
/// `key_fn` sees the element as it is in `items` (so it decides which key an
/// absent element gets); the stored value is the element, or a clone of
/// `default` when the element is absent. Duplicates are resolved with `policy`.
pub fn to_map_with_key_policy<T, K, KF>(
    items: &[Option<T>],
    key_fn: KF,
    default: &T,
    policy: TieBreak,
) -> HashMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    KF: Fn(Option<&T>) -> K,
{
    to_map_with_policy(
        items,
        |item: &Option<T>| key_fn(item.as_ref()),
        |item: &Option<T>| item.as_ref().unwrap_or(default).clone(),
        policy,
    )
}

/// First-wins [`to_map_with_key_policy`].
///
/// # Example
/// ```
/// use stream_helper::to_map_with_key_unique;
///
/// let items = vec![Some(("a", 1)), None, Some(("a", 2))];
/// let m = to_map_with_key_unique(&items, |e| e.map_or("none", |p| p.0), &("?", 0));
/// assert_eq!(m["a"], ("a", 1));
/// assert_eq!(m["none"], ("?", 0));
/// ```
pub fn to_map_with_key_unique<T, K, KF>(items: &[Option<T>], key_fn: KF, default: &T) -> HashMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    KF: Fn(Option<&T>) -> K,
{
    to_map_with_key_policy(items, key_fn, default, TieBreak::First)
}

/// Last-wins [`to_map_with_key_policy`].
pub fn to_map_with_key_unique2<T, K, KF>(items: &[Option<T>], key_fn: KF, default: &T) -> HashMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    KF: Fn(Option<&T>) -> K,
{
    to_map_with_key_policy(items, key_fn, default, TieBreak::Last)
}
