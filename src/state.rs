//! Persisted digest state
//!
//! Stores the last-known digest as a small JSON record at a caller-supplied
//! path. A missing or malformed record is treated identically to "no prior
//! run", never as a fatal condition; writes go through a sibling temporary
//! file and a rename so a partially written record is never observable at
//! the target path.

use crate::error::StateError;
use crate::types::Digest;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// On-disk record holding the last-known digest.
///
/// One recognized field; unknown fields from a future format are ignored on
/// load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedState {
    pub hash: Digest,
}

/// Loads and saves the persisted digest record.
pub struct StateStore;

impl StateStore {
    /// Load the previously persisted digest.
    ///
    /// Returns `None` when the file does not exist, cannot be read, or does
    /// not parse as a record with a `hash` field.
    pub fn load(location: &Path) -> Option<Digest> {
        if !location.exists() {
            debug!(path = %location.display(), "No previous state file");
            return None;
        }

        let bytes = match fs::read(location) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(path = %location.display(), "Failed to read state file, treating as first run: {}", e);
                return None;
            }
        };

        match serde_json::from_slice::<PersistedState>(&bytes) {
            Ok(state) => Some(state.hash),
            Err(e) => {
                warn!(path = %location.display(), "Malformed state file, treating as first run: {}", e);
                None
            }
        }
    }

    /// Persist a digest, overwriting any previous record.
    ///
    /// Creates missing parent directories first. The record is written to a
    /// sibling temporary file and renamed over `location`; any failure
    /// returns [`StateError`] without leaving a partial record at
    /// `location`.
    pub fn save(location: &Path, digest: &Digest) -> Result<(), StateError> {
        if let Some(parent) = location.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StateError::IoError(std::io::Error::new(
                        std::io::ErrorKind::Other,
                        format!("Failed to create parent directory {:?}: {}", parent, e),
                    ))
                })?;
            }
        }

        let record = PersistedState {
            hash: digest.clone(),
        };
        let serialized = serde_json::to_vec(&record)?;

        let tmp = temp_path(location);
        fs::write(&tmp, &serialized).map_err(|e| {
            StateError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to write state file {:?}: {}", tmp, e),
            ))
        })?;

        fs::rename(&tmp, location).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            StateError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to replace state file {:?}: {}", location, e),
            ))
        })?;

        debug!(path = %location.display(), digest = %digest, "Persisted digest");
        Ok(())
    }
}

fn temp_path(location: &Path) -> PathBuf {
    let mut name: OsString = location
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("state"));
    name.push(".tmp");
    location.with_file_name(name)
}
