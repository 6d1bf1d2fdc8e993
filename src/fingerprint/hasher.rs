//! Streaming digest accumulation using BLAKE3

use crate::types::Digest;
use blake3::Hasher;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Chunk size for streaming file contents into the accumulator. The digest
/// does not depend on it; every file is read to EOF regardless.
pub const READ_CHUNK_SIZE: usize = 8192;

/// Owned streaming accumulator for a single fingerprint computation.
///
/// Exactly one accumulator exists per traversal and is passed by mutable
/// reference through it; the traversal is single-threaded, so the
/// accumulator is never shared.
pub struct TreeHasher {
    hasher: Hasher,
}

impl TreeHasher {
    /// Create a fresh accumulator
    pub fn new() -> Self {
        Self {
            hasher: Hasher::new(),
        }
    }

    /// Feed the UTF-8 bytes of a root-relative path.
    pub fn update_path(&mut self, rel: &str) {
        self.hasher.update(rel.as_bytes());
    }

    /// Stream a file's raw bytes into the accumulator in fixed-size chunks.
    ///
    /// Reads the entire file. Errors are returned so the caller can apply
    /// its best-effort policy; any bytes consumed before the error remain in
    /// the accumulator.
    pub fn update_file(&mut self, path: &Path) -> std::io::Result<()> {
        let mut file = File::open(path)?;
        let mut buf = [0u8; READ_CHUNK_SIZE];
        loop {
            let n = file.read(&mut buf)?;
            if n == 0 {
                break;
            }
            self.hasher.update(&buf[..n]);
        }
        Ok(())
    }

    /// Finalize the accumulator into a lowercase hex digest.
    pub fn finalize(self) -> Digest {
        Digest::from_hex(hex::encode(self.hasher.finalize().as_bytes()))
    }
}

impl Default for TreeHasher {
    fn default() -> Self {
        Self::new()
    }
}
