//! User identity records
//!
//! A user is identified solely by its `id`; name and email are display
//! fields and take no part in equality or ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::Credential;

/// An identity record with an optionally attached credential.
///
/// The credential is present on the record the directory owns and absent on
/// detached copies handed out for display or matching. Move-only: no `Clone`,
/// copies are made explicitly via [`User::detached`] and drop the credential.
#[derive(Debug, Serialize, Deserialize)]
pub struct User {
    name: String,
    email: String,
    id: String,
    credential: Option<Credential>,
}

impl User {
    /// Creates a user owning the given credential.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        id: impl Into<String>,
        credential: Credential,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            id: id.into(),
            credential: Some(credential),
        }
    }

    /// Returns a copy carrying identity fields but no credential.
    ///
    /// Detached copies can never authenticate; [`User::verify`] is always
    /// false on them.
    pub fn detached(&self) -> Self {
        Self {
            name: self.name.clone(),
            email: self.email.clone(),
            id: self.id.clone(),
            credential: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Checks a candidate secret against the owned credential.
    pub fn verify(&self, secret: &str) -> bool {
        self.credential
            .as_ref()
            .is_some_and(|cred| cred.matches(secret))
    }
}

// Identity is the id alone.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl PartialOrd for User {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for User {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(id: &str) -> User {
        User::new("Alice", "alice@example.com", id, Credential::new("pw"))
    }

    #[test]
    fn equality_is_by_id_only() {
        let a = User::new("Alice", "alice@example.com", "x", Credential::new("a"));
        let b = User::new("Bob", "bob@example.com", "x", Credential::new("b"));
        assert_eq!(a, b);

        let c = make_user("y");
        assert_ne!(a, c);
        assert!(a < c);
    }

    #[test]
    fn verify_checks_owned_credential() {
        let user = make_user("alice");
        assert!(user.verify("pw"));
        assert!(!user.verify("wrong"));
    }

    #[test]
    fn detached_copy_never_authenticates() {
        let user = make_user("alice");
        let copy = user.detached();

        assert_eq!(copy.name(), "Alice");
        assert_eq!(copy.email(), "alice@example.com");
        assert_eq!(copy.id(), "alice");
        assert_eq!(copy, user);
        assert!(!copy.verify("pw"));
    }

    #[test]
    fn serde_roundtrip_keeps_credential() {
        let user = make_user("alice");
        let bytes = postcard::to_stdvec(&user).unwrap();
        let parsed: User = postcard::from_bytes(&bytes).unwrap();

        assert_eq!(parsed.id(), "alice");
        assert!(parsed.verify("pw"));
    }
}
