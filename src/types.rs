//! Core value types shared across the crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Digest of a directory tree: the lowercase hex encoding of the BLAKE3 hash
/// over the tree's traversal byte stream (relative paths + file contents).
///
/// Digests are opaque immutable values; equality is string equality and there
/// is no identity beyond the string content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// Wrap an already-encoded lowercase hex string.
    pub fn from_hex<S: Into<String>>(hex: S) -> Self {
        Digest(hex.into())
    }

    /// The digest as a hex string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
