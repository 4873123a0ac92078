//! Fluent wrapper over a borrowed collection.
//!
//! [`StreamBuilder`] holds a slice plus the policies the key-based helpers need,
//! so a caller can configure them once and chain terminals:
//!
//! ```
//! use stream_helper::{StreamBuilder, TieBreak};
//!
//! let users = vec![("1", 20), ("2", 23), ("1", 50)];
//! let ages = StreamBuilder::build(&users)
//!     .tie_break(TieBreak::Last)
//!     .to_map(|u| u.0, |u| u.1);
//! assert_eq!(ages["1"], 50);
//! ```

use crate::error::Result;
use crate::helpers::distinct::dedupe_first;
use crate::helpers::{
    any_match, convert, group_by, join, match_value, order_by, to_array, to_map_with_key,
    to_map_with_policy,
};
use crate::policy::{SortOrder, TieBreak};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A borrowed collection with tie-break and sort policies attached.
///
/// Defaults are [`TieBreak::First`] and [`SortOrder::Asc`].
#[derive(Debug, Clone, Copy)]
pub struct StreamBuilder<'a, T> {
    items: &'a [T],
    tie_break: TieBreak,
    order: SortOrder,
}

impl<'a, T> StreamBuilder<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            tie_break: TieBreak::default(),
            order: SortOrder::default(),
        }
    }

    /// Alias of [`StreamBuilder::new`].
    pub fn build(items: &'a [T]) -> Self {
        Self::new(items)
    }

    #[must_use]
    pub fn tie_break(mut self, policy: TieBreak) -> Self {
        self.tie_break = policy;
        self
    }

    #[must_use]
    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Key/value map. Duplicate keys are resolved with the configured tie-break
    /// rather than reported.
    pub fn to_map<K, V, KF, VF>(&self, key_fn: KF, value_fn: VF) -> HashMap<K, V>
    where
        K: Eq + Hash,
        KF: Fn(&T) -> K,
        VF: Fn(&T) -> V,
    {
        to_map_with_policy(self.items, key_fn, value_fn, self.tie_break)
    }

    pub fn any_match<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        any_match(self.items, predicate)
    }

    pub fn match_value<V, F>(&self, value_fn: F, target: Option<V>) -> bool
    where
        V: PartialEq,
        F: Fn(&'a T) -> Option<V>,
    {
        match_value(self.items, value_fn, target)
    }

    pub fn to_array<V, F>(&self, mapper: F) -> Box<[V]>
    where
        F: Fn(&T) -> V,
    {
        to_array(self.items, mapper)
    }

    pub fn join<S, F>(&self, mapper: F, delimiter: &str) -> String
    where
        S: AsRef<str>,
        F: Fn(&'a T) -> S,
    {
        join(self.items, mapper, delimiter)
    }

    pub fn convert<R, F>(&self, mapper: F) -> Vec<R>
    where
        F: Fn(&T) -> R,
    {
        convert(Some(self.items), mapper).unwrap_or_default()
    }
}

impl<T: Clone> StreamBuilder<'_, T> {
    /// Element-valued map that requires unique keys.
    ///
    /// # Errors
    /// [`StreamError::DuplicateKey`](crate::StreamError::DuplicateKey) on the first collision.
    pub fn to_map_with_key<K, KF>(&self, key_fn: KF) -> Result<HashMap<K, T>>
    where
        K: Eq + Hash + Debug,
        KF: Fn(&T) -> K,
    {
        to_map_with_key(self.items, key_fn)
    }

    pub fn group_by<K, F>(&self, classifier: F) -> HashMap<K, Vec<T>>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        group_by(self.items, classifier)
    }

    /// One element per key, first seen wins. Same ordering caveat as
    /// [`unique_with_key`](crate::unique_with_key).
    pub fn unique_by_key<K, F>(&self, key_fn: F) -> Vec<T>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        dedupe_first(self.items.iter().map(|item| (key_fn(item), item.clone())))
    }

    /// Sorted copy in the configured [`SortOrder`].
    ///
    /// # Errors
    /// [`StreamError::Incomparable`](crate::StreamError::Incomparable) if two keys cannot be ordered.
    pub fn sorted_by<K, F>(&self, key_fn: F) -> Result<Vec<T>>
    where
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        order_by(self.items, key_fn, self.order)
    }
}
