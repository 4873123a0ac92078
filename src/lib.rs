//! # stream-helper
//!
//! Small, single-pass helpers that turn a slice into a map, a grouping, an
//! array, or a joined string using caller-supplied key/value extractors, plus
//! key-based deduplication and stable sort-by-key.
//!
//! Every helper reads its input once, front to back, and allocates one fresh
//! output. Nothing is cached, shared, or done in the background.
//!
//! ## Quick Start
//!
//! ```
//! use stream_helper::*;
//! use stream_helper::testing::{sample_users, User};
//!
//! # fn main() -> Result<()> {
//! let users = sample_users();
//!
//! // duplicate names: first wins, last wins, or an error
//! let first = to_map_unique(&users, User::key, |u| u.age);
//! let last = to_map_unique2(&users, User::key, |u| u.age);
//! assert_eq!((first["1"], last["1"]), (20, 50));
//! assert!(to_map_with_key(&users, User::key).is_err());
//!
//! let names = join(&users, |u| u.name.as_deref().unwrap_or(""), "#");
//! assert_eq!(names, "1#2#3#4#1");
//!
//! let youngest_first = order_by_asc(&users, |u| u.age)?;
//! assert_eq!(youngest_first[0].age, 20);
//! # Ok(())
//! # }
//! ```
//!
//! ## Helpers
//!
//! ### Maps
//! - [`to_map`] / [`to_map_with_key`] - keys must be unique; a collision is a [`StreamError::DuplicateKey`]
//! - [`to_map_unique`] / [`to_map_unique2`] - duplicates resolved first-wins / last-wins
//! - [`to_map_with_key_unique`] / [`to_map_with_key_unique2`] - element-valued, absent elements replaced by a default
//! - [`to_map_with_policy`] / [`to_map_with_key_policy`] - the [`TieBreak`] chosen at runtime
//!
//! ### Grouping and projection
//! - [`group_by`] - `K -> Vec<T>`, members in input order
//! - [`to_array`] - fixed-size `Box<[V]>` of mapped values
//! - [`join`] - mapped strings separated by a delimiter
//!
//! ### Conversion
//! - [`convert`] / [`convert_string`] / [`update`] - `None` in, `None` out
//!
//! ### Predicates
//! - [`match_value`] - any extracted value equals a target (absent equals absent)
//! - [`any_match`] - existential quantifier
//!
//! ### Deduplication and ordering
//! - [`unique_with_key`] - first element per key; result order is repeatable but not input order
//! - [`order_by_asc`] / [`order_by_desc`] / [`order_by`] - stable; incomparable keys are a [`StreamError::Incomparable`]
//!
//! ### Fluent use
//! [`StreamBuilder`] wraps a slice with a [`TieBreak`] and [`SortOrder`] and
//! exposes the same helpers as methods.
//!
//! ## Absent values
//!
//! Where a helper has to deal with missing data, the type says so:
//! - an absent *input list* is `Option<&[T]>` / `Option<Vec<T>>` (conversion helpers only);
//! - an absent *element* is `Option<T>` inside the slice (default-value helpers);
//! - an absent *extracted value* is `Option<V>` ([`match_value`]).
//!
//! ## Logging
//!
//! Helpers emit [`tracing`] events: `debug` when an error is returned, `trace`
//! when a tie-break discards a duplicate. Install a subscriber to see them.
//!
//! ## Module Overview
//!
//! - [`error`] - [`StreamError`] and the crate [`Result`]
//! - [`policy`] - [`TieBreak`] and [`SortOrder`]
//! - [`builder`] - [`StreamBuilder`]
//! - [`testing`] - assertions and fixtures for tests

pub mod builder;
pub mod error;
pub mod helpers;
pub mod policy;
pub mod testing;

pub use builder::StreamBuilder;
pub use error::{Result, StreamError};
pub use helpers::*;
pub use policy::{SortOrder, TieBreak};
