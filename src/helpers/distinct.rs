//! Key-based deduplication.
//!
//! Survivors are first-wins and come back in the iteration order of the map
//! used to dedupe them. That order is not input order, but the map uses a
//! fixed-key hasher, so it is the same on every run for the same input.

use std::collections::HashMap;
use std::collections::hash_map::{DefaultHasher, Entry};
use std::hash::{BuildHasherDefault, Hash};
use tracing::trace;

type StableMap<K, V> = HashMap<K, V, BuildHasherDefault<DefaultHasher>>;

pub(crate) fn dedupe_first<K, T, I>(pairs: I) -> Vec<T>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, T)>,
{
    let mut kept: StableMap<K, T> = StableMap::default();
    for (key, value) in pairs {
        match kept.entry(key) {
            Entry::Occupied(_) => trace!("dropping duplicate"),
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
    kept.into_values().collect()
}

/// Keep one element per key, the first one seen.
///
/// Absent elements are replaced with a clone of `default`; `key_fn` sees the
/// element as it is in `items`.
///
/// # Example
/// ```
/// use stream_helper::unique_with_key;
///
/// let items = vec![Some(("1", 20)), Some(("2", 23)), Some(("1", 50))];
/// let mut kept = unique_with_key(&items, |u| u.map(|u| u.0), &("", 0));
/// kept.sort();
/// assert_eq!(kept, vec![("1", 20), ("2", 23)]);
/// ```
pub fn unique_with_key<T, K, F>(items: &[Option<T>], key_fn: F, default: &T) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(Option<&T>) -> K,
{
    dedupe_first(items.iter().map(|item| {
        let item = item.as_ref();
        (key_fn(item), item.unwrap_or(default).clone())
    }))
}
