//! Property-based tests for directory change detection

mod determinism;
