//! Error types for directory change detection.

use std::path::PathBuf;
use thiserror::Error;

/// Fingerprinting errors
#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("Directory not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Fingerprint I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// State persistence errors
#[derive(Debug, Error)]
pub enum StateError {
    #[error("State file I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize state record: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Logging configuration errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log directive: {0}")]
    InvalidDirective(String),

    #[error("Invalid log format: {0} (must be 'json' or 'text')")]
    InvalidFormat(String),
}

/// Errors surfaced by the change check
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),

    #[error(transparent)]
    State(#[from] StateError),
}
