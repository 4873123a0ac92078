//! Pre-built records for tests and examples.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A minimal user record with an optional name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub name: Option<String>,
    pub age: u32,
}

impl User {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: Some(name.into()),
            age,
        }
    }

    pub fn anonymous(age: u32) -> Self {
        Self { name: None, age }
    }

    /// The name, or an empty string for anonymous users. Handy as a map key.
    pub fn key(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "User(name={name}, age={})", self.age),
            None => write!(f, "User(name=null, age={})", self.age),
        }
    }
}

/// Five users where the name `"1"` occurs twice (ages 20 and 50).
///
/// ```
/// use stream_helper::testing::sample_users;
///
/// let users = sample_users();
/// assert_eq!(users.len(), 5);
/// assert_eq!(users[0].name, users[4].name);
/// ```
#[must_use]
pub fn sample_users() -> Vec<User> {
    vec![
        User::new("1", 20),
        User::new("2", 23),
        User::new("3", 22),
        User::new("4", 30),
        User::new("1", 50),
    ]
}
