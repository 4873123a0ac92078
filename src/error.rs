//! Error types returned by the fallible helpers.

use std::fmt::Debug;
use thiserror::Error;

/// Convenience result type for the helpers in this crate.
pub type Result<T> = std::result::Result<T, StreamError>;

/// Contract violations detected while transforming a collection.
///
/// Both variants are fatal for the call that produced them: the helper stops at
/// the first offending element and returns no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// Two elements produced the same key in a helper that requires unique keys
    /// (`to_map`, `to_map_with_key`). Use one of the `*_unique` variants to
    /// resolve duplicates instead.
    #[error("duplicate key {key} (first seen at index {first_index}, again at index {duplicate_index})")]
    DuplicateKey {
        key: String,
        first_index: usize,
        duplicate_index: usize,
    },

    /// Two sort keys could not be ordered relative to each other
    /// (`partial_cmp` returned `None`, e.g. a `NaN` float key).
    #[error("sort keys at index {left} and {right} are not comparable")]
    Incomparable { left: usize, right: usize },
}

impl StreamError {
    pub fn duplicate_key<K: Debug>(key: &K, first_index: usize, duplicate_index: usize) -> Self {
        Self::DuplicateKey {
            key: format!("{key:?}"),
            first_index,
            duplicate_index,
        }
    }

    pub fn incomparable(left: usize, right: usize) -> Self {
        Self::Incomparable { left, right }
    }
}
