//! User directory
//!
//! A uniqueness-enforcing collection of users keyed by id. The map is
//! ordered so iteration and persistence are deterministic.

use std::collections::BTreeMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::User;

/// All known users, deduplicated by id.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UserDirectory {
    users: BTreeMap<String, User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a user. Returns false and leaves the directory unchanged if
    /// the id is already present.
    pub fn add(&mut self, user: User) -> bool {
        if self.users.contains_key(user.id()) {
            return false;
        }
        self.users.insert(user.id().to_string(), user);
        true
    }

    /// Looks up a user by id.
    pub fn find(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    /// Removes the user with the given id, reporting whether one was present.
    pub fn remove(&mut self, id: &str) -> bool {
        self.users.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterates users in id order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }
}

impl Index<&str> for UserDirectory {
    type Output = User;

    /// Panics if the id is absent. Callers must check [`UserDirectory::contains`]
    /// first or use [`UserDirectory::find`].
    fn index(&self, id: &str) -> &User {
        self.find(id)
            .unwrap_or_else(|| panic!("no user with id {id:?}"))
    }
}
