//! Credential hashing
//!
//! A credential holds only the hex-encoded SHA-256 digest of a secret.
//! The plaintext never outlives the constructor.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// An irreversible record of a secret.
///
/// Move-only: there is deliberately no `Clone`, so a credential is owned by
/// exactly one [`User`](super::User) at a time.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    hash: String,
}

impl Credential {
    /// Hashes the secret and stores only the hex encoding of the digest.
    pub fn new(secret: &str) -> Self {
        Self {
            hash: digest_hex(secret),
        }
    }

    /// Returns true if the candidate secret hashes to the stored digest.
    ///
    /// Any byte string is valid input; this never fails.
    pub fn matches(&self, candidate: &str) -> bool {
        self.hash == digest_hex(candidate)
    }
}

fn digest_hex(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}
