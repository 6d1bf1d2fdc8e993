//! Change check orchestration
//!
//! Fingerprints the tree, compares against the persisted digest, and
//! persists the new digest when it differs or no prior state exists. The
//! outcome tells the caller whether the downstream image regeneration must
//! run.

use crate::error::CheckError;
use crate::fingerprint::Fingerprinter;
use crate::state::StateStore;
use crate::types::Digest;
use std::path::Path;
use tracing::{info, instrument};

/// Outcome of a change check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// No prior state existed; the current digest was persisted.
    FirstRun { current: Digest },
    /// Current digest matches the stored digest; nothing was persisted.
    Unchanged { current: Digest },
    /// Digests differ; the stored digest was replaced with the current one.
    Changed { previous: Digest, current: Digest },
}

impl CheckOutcome {
    /// Whether the downstream regeneration step must run.
    pub fn regeneration_required(&self) -> bool {
        !matches!(self, CheckOutcome::Unchanged { .. })
    }

    /// The digest computed for the current tree.
    pub fn current(&self) -> &Digest {
        match self {
            CheckOutcome::FirstRun { current }
            | CheckOutcome::Unchanged { current }
            | CheckOutcome::Changed { current, .. } => current,
        }
    }
}

/// Run the change check for `root` against the state record at `state_path`.
///
/// A save failure surfaces as [`CheckError::State`] so callers can
/// distinguish "content changed but the new baseline could not be persisted"
/// from other outcomes.
#[instrument(skip_all, fields(root = %root.display(), state = %state_path.display()))]
pub fn run_check(root: &Path, state_path: &Path) -> Result<CheckOutcome, CheckError> {
    let current = Fingerprinter::new(root.to_path_buf()).compute()?;

    match StateStore::load(state_path) {
        None => {
            info!(digest = %current, "No previous digest, first run");
            StateStore::save(state_path, &current)?;
            Ok(CheckOutcome::FirstRun { current })
        }
        Some(previous) if previous == current => {
            info!(digest = %current, "Directory contents unchanged");
            Ok(CheckOutcome::Unchanged { current })
        }
        Some(previous) => {
            info!(previous = %previous, current = %current, "Directory contents changed");
            StateStore::save(state_path, &current)?;
            Ok(CheckOutcome::Changed { previous, current })
        }
    }
}
