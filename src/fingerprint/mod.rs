//! Directory fingerprinting
//!
//! Computes a single deterministic digest over a directory tree's relative
//! file paths and file contents. The traversal sorts every directory level
//! before use, so the digest is independent of filesystem enumeration order;
//! changing, adding, removing, or renaming any file changes the digest.

pub mod hasher;
pub mod path;
pub mod walker;

pub use hasher::{TreeHasher, READ_CHUNK_SIZE};
pub use walker::{FileEntry, Walker};

use crate::error::FingerprintError;
use crate::types::Digest;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Directory fingerprinter
pub struct Fingerprinter {
    root: PathBuf,
}

impl Fingerprinter {
    /// Create a new fingerprinter for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Compute the digest of the tree rooted at this fingerprinter's path.
    ///
    /// Fails with [`FingerprintError::NotFound`] when the root does not
    /// exist or is not a directory. A file that cannot be read is logged and
    /// skipped; its relative path has already been fed to the accumulator,
    /// so a transient unreadable file still perturbs the digest through its
    /// name contribution only.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn compute(&self) -> Result<Digest, FingerprintError> {
        let start = Instant::now();

        let root = dunce::canonicalize(&self.root)
            .map_err(|_| FingerprintError::NotFound(self.root.clone()))?;
        if !root.is_dir() {
            return Err(FingerprintError::NotFound(self.root.clone()));
        }

        let entries = Walker::new(root).walk()?;
        debug!(file_count = entries.len(), "Walked directory tree");

        let mut hasher = TreeHasher::new();
        for entry in &entries {
            hasher.update_path(&entry.rel);
            if let Err(e) = hasher.update_file(&entry.path) {
                warn!(path = %entry.path.display(), "Failed to read file, skipping content: {}", e);
            }
        }

        let digest = hasher.finalize();
        info!(
            file_count = entries.len(),
            digest = %digest,
            duration_ms = start.elapsed().as_millis(),
            "Fingerprint computed"
        );

        Ok(digest)
    }
}
