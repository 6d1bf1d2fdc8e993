//! CLI domain: parse definitions, status-line rendering, and exit-code
//! mapping only. The change check itself lives in [`crate::check`].

use crate::check::CheckOutcome;
use crate::error::CheckError;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// Exit code when no regeneration is required.
pub const EXIT_UNCHANGED: i32 = 0;
/// Exit code when regeneration is required: first run, changed contents, or
/// any failure whose safe default is "regenerate".
pub const EXIT_REGENERATE: i32 = 1;
/// Exit code when the new digest could not be persisted.
pub const EXIT_STATE_WRITE_FAILED: i32 = 2;

/// Dirsum CLI - Directory change detection
#[derive(Parser)]
#[command(name = "dirsum")]
#[command(about = "Detect directory tree changes to decide whether an image rebuild is needed")]
pub struct Cli {
    /// Directory tree to fingerprint
    pub directory: PathBuf,

    /// Path of the persisted digest record
    pub state_file: PathBuf,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

/// Render the status lines for a completed check.
///
/// Every decision point gets a human-readable line; the exit code remains
/// the sole machine-readable signal.
pub fn render_outcome(outcome: &CheckOutcome) -> String {
    let mut out = String::new();
    out.push_str(&format!("Current directory digest: {}\n", outcome.current()));

    match outcome {
        CheckOutcome::FirstRun { .. } => {
            out.push_str("No previous digest found, first run\n");
            out.push_str(&format!(
                "{}\n",
                "Saved new digest, image regeneration required".yellow()
            ));
        }
        CheckOutcome::Unchanged { current } => {
            out.push_str(&format!("Previous digest: {}\n", current));
            out.push_str(&format!(
                "{}\n",
                "Directory contents unchanged, image regeneration not required".green()
            ));
        }
        CheckOutcome::Changed { previous, .. } => {
            out.push_str(&format!("Previous digest: {}\n", previous));
            out.push_str(&format!(
                "{}\n",
                "Directory contents changed, image regeneration required".yellow()
            ));
        }
    }

    out
}

/// Exit code for a completed check.
pub fn exit_code(outcome: &CheckOutcome) -> i32 {
    if outcome.regeneration_required() {
        EXIT_REGENERATE
    } else {
        EXIT_UNCHANGED
    }
}

/// Map a check error to its user-facing message and exit code.
pub fn map_error(err: &CheckError) -> (String, i32) {
    match err {
        CheckError::Fingerprint(e) => (format!("Error: {}", e), EXIT_REGENERATE),
        CheckError::State(e) => (
            format!("Error: could not save digest: {}", e),
            EXIT_STATE_WRITE_FAILED,
        ),
    }
}
