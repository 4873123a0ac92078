//! Policies that parameterise the key-based helpers.
//!
//! Both enums are plain `Copy` values with serde support, so a caller can keep
//! them in its own configuration (`"first"`, `"last"`, `"asc"`, `"desc"`).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// How duplicate keys are resolved when building a map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the value of the first element producing the key.
    #[default]
    First,
    /// Keep the value of the last element producing the key.
    Last,
}

impl TieBreak {
    /// Pick the survivor between the value already in the map and an incoming one.
    ///
    /// ```
    /// use stream_helper::TieBreak;
    ///
    /// assert_eq!(TieBreak::First.resolve(1, 2), 1);
    /// assert_eq!(TieBreak::Last.resolve(1, 2), 2);
    /// ```
    #[inline]
    pub fn resolve<V>(self, existing: V, incoming: V) -> V {
        match self {
            TieBreak::First => existing,
            TieBreak::Last => incoming,
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::First => f.write_str("first"),
            TieBreak::Last => f.write_str("last"),
        }
    }
}

/// Direction of a sort-by-key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Orient an ascending comparison result.
    #[inline]
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}
