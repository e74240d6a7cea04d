//! SHA-256 fingerprints of stored documents
//!
//! A fingerprint is taken over the raw bytes as read, so it detects any
//! change to the resource including encoding or line-ending rewrites. The
//! canonical text form is `sha256:<hex>`.

use sha2::{Digest, Sha256};
use std::fmt;

/// Prefix for all fingerprints produced by this module
const PREFIX: &str = "sha256:";

/// Content fingerprint used for optimistic concurrency checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint raw bytes.
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(format!("{}{:x}", PREFIX, hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
