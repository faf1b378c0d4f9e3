//! Content hash (opaque file fingerprint)
//!
//! A content hash is whatever token an external hasher produced for a file,
//! usually a SHA-256 hex digest such as `"7aec47f359bb75b7..."`.
//!
//! ## Identity
//!
//! Two hashes are the same hash if and only if their strings are byte-for-byte
//! equal. Nothing is validated or normalised: case, length and alphabet are
//! the caller's business.

use serde::{Deserialize, Serialize};

/// Opaque content fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }
}

impl From<String> for ContentHash {
    fn from(hash: String) -> Self {
        Self(hash)
    }
}

impl From<&str> for ContentHash {
    fn from(hash: &str) -> Self {
        Self(hash.to_string())
    }
}

impl From<&String> for ContentHash {
    fn from(hash: &String) -> Self {
        Self(hash.clone())
    }
}

impl From<&ContentHash> for ContentHash {
    fn from(hash: &ContentHash) -> Self {
        hash.clone()
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
