//! Correlation seeds
//!
//! A seed is handed back to the caller of a log call so that a
//! user-facing error message can later be matched to the record that
//! carries the same seed.

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Number of random bytes behind a seed
pub const SEED_BYTES: usize = 10;

/// Length of the hex-encoded seed
pub const SEED_LEN: usize = SEED_BYTES * 2;

/// Opaque per-call correlation token: 20 lowercase hex characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationSeed(String);

impl CorrelationSeed {
    /// Generate a fresh random seed
    pub fn generate() -> Self {
        let mut bytes = [0u8; SEED_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    /// Whether `s` has the shape of a generated seed
    pub fn is_well_formed(s: &str) -> bool {
        s.len() == SEED_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

impl std::fmt::Display for CorrelationSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CorrelationSeed {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
