//! Deterministic filesystem walker for directory fingerprinting

use crate::error::FingerprintError;
use crate::fingerprint::path;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A file discovered by the walker, in digest order.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Root-relative path, `/`-separated and NFC-normalized.
    pub rel: String,
}

/// Deterministic filesystem walker.
///
/// Lists each directory level once, partitions entries into subdirectories
/// and files, sorts both lists lexicographically by normalized name, and
/// emits the level's files before recursing into its subdirectories. The
/// resulting entry order depends only on names and structure, never on the
/// order the filesystem happens to report entries in.
///
/// Symbolic links are followed for classification: a symlinked directory is
/// walked and a symlinked file is listed. An entry whose metadata cannot be
/// read (broken link, special file) is listed as a file so its name still
/// contributes to the digest; reading its content is expected to fail and is
/// handled by the caller. Cycles through symlinked ancestors are not
/// detected.
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Walk the tree and collect file entries in digest order.
    ///
    /// A listing failure on the root is fatal; a listing failure on a
    /// subdirectory is logged and the subdirectory skipped, mirroring the
    /// best-effort policy for unreadable files.
    pub fn walk(&self) -> Result<Vec<FileEntry>, FingerprintError> {
        let mut entries = Vec::new();
        self.visit(&self.root, "", &mut entries)?;
        Ok(entries)
    }

    fn visit(
        &self,
        dir: &Path,
        prefix: &str,
        out: &mut Vec<FileEntry>,
    ) -> Result<(), FingerprintError> {
        let read_dir = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                // The root must be listable; deeper levels are best effort.
                if prefix.is_empty() {
                    return Err(FingerprintError::IoError(std::io::Error::new(
                        std::io::ErrorKind::Other,
                        format!("Failed to read directory {:?}: {}", dir, e),
                    )));
                }
                warn!(path = %dir.display(), "Failed to list directory, skipping: {}", e);
                return Ok(());
            }
        };

        let mut files: Vec<(String, PathBuf)> = Vec::new();
        let mut dirs: Vec<(String, PathBuf)> = Vec::new();

        for entry in read_dir {
            let entry = entry.map_err(|e| {
                FingerprintError::IoError(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to read directory entry in {:?}: {}", dir, e),
                ))
            })?;

            let entry_path = entry.path();
            let name = path::normalize_name(&entry.file_name());

            // fs::metadata follows symlinks, so a symlinked directory is
            // classified as a directory. Unreadable metadata lands the entry
            // in the file list; its name still perturbs the digest.
            match fs::metadata(&entry_path) {
                Ok(meta) if meta.is_dir() => dirs.push((name, entry_path)),
                _ => files.push((name, entry_path)),
            }
        }

        // Sort each list by name so traversal order is platform-independent
        files.sort_by(|a, b| a.0.cmp(&b.0));
        dirs.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, entry_path) in files {
            out.push(FileEntry {
                path: entry_path,
                rel: path::join_relative(prefix, &name),
            });
        }

        for (name, entry_path) in dirs {
            let rel = path::join_relative(prefix, &name);
            self.visit(&entry_path, &rel, out)?;
        }

        Ok(())
    }
}
