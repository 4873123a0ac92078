//! Testing utilities for code built on these helpers.
//!
//! - **Assertions**: compare ordered and unordered outputs, maps, and groupings
//! - **Fixtures**: a small `User` record and the canonical sample dataset
//!
//! # Quick Start
//!
//! ```
//! use stream_helper::*;
//! use stream_helper::testing::*;
//!
//! let users = sample_users();
//! let by_name = to_map_unique(&users, User::key, |u| u.age);
//! assert_map_entries(&by_name, &[
//!     ("1".to_string(), 20),
//!     ("2".to_string(), 23),
//!     ("3".to_string(), 22),
//!     ("4".to_string(), 30),
//! ]);
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
