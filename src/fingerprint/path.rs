//! Relative-path normalization for deterministic hashing

use std::ffi::OsStr;
use unicode_normalization::UnicodeNormalization;

/// Normalize a single path component for hashing.
///
/// Converts the name to UTF-8 (lossily for non-UTF-8 names, which are
/// therefore not portable across platforms) and normalizes Unicode to NFC so
/// the bytes fed to the hasher do not depend on the filesystem's Unicode
/// form.
pub fn normalize_name(name: &OsStr) -> String {
    name.to_string_lossy().nfc().collect()
}

/// Join a normalized component onto a root-relative prefix.
///
/// Components are always joined with `/`, regardless of the platform's path
/// separator, so relative paths hash identically everywhere.
pub fn join_relative(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}
