//! Property-based tests for determinism guarantees

use dirsum::fingerprint::path;
use dirsum::fingerprint::Fingerprinter;
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Strategy: a small tree of uniquely named files with arbitrary contents
fn file_map() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    prop::collection::btree_map(
        "[a-z][a-z0-9_]{0,7}",
        prop::collection::vec(any::<u8>(), 0..64),
        0..8,
    )
}

fn write_files<'a, I>(root: &Path, files: I)
where
    I: Iterator<Item = (&'a String, &'a Vec<u8>)>,
{
    for (name, content) in files {
        fs::write(root.join(name), content).unwrap();
    }
}

/// Filesystem-backed cases are bounded; each case creates real files
fn fs_runner() -> proptest::test_runner::TestRunner {
    proptest::test_runner::TestRunner::new(proptest::test_runner::Config::with_cases(32))
}

/// Test that computing a digest twice over the same tree is deterministic
#[test]
fn test_digest_determinism_property() {
    let mut runner = fs_runner();

    runner
        .run(&file_map(), |files| {
            let temp_dir = TempDir::new().unwrap();
            write_files(temp_dir.path(), files.iter());

            let fingerprinter = Fingerprinter::new(temp_dir.path().to_path_buf());
            let digest1 = fingerprinter.compute().unwrap();
            let digest2 = fingerprinter.compute().unwrap();

            assert_eq!(digest1, digest2);
            Ok(())
        })
        .unwrap();
}

/// Test that the digest does not depend on file creation order
#[test]
fn test_digest_creation_order_property() {
    let mut runner = fs_runner();

    runner
        .run(&file_map(), |files| {
            let temp_a = TempDir::new().unwrap();
            let temp_b = TempDir::new().unwrap();

            write_files(temp_a.path(), files.iter());
            write_files(temp_b.path(), files.iter().rev());

            let digest_a = Fingerprinter::new(temp_a.path().to_path_buf())
                .compute()
                .unwrap();
            let digest_b = Fingerprinter::new(temp_b.path().to_path_buf())
                .compute()
                .unwrap();

            assert_eq!(digest_a, digest_b);
            Ok(())
        })
        .unwrap();
}

/// Test that perturbing any one file's content changes the digest
#[test]
fn test_digest_sensitivity_property() {
    let mut runner = fs_runner();

    runner
        .run(
            &file_map().prop_filter("need at least one file", |m| !m.is_empty()),
            |files| {
                let temp_dir = TempDir::new().unwrap();
                write_files(temp_dir.path(), files.iter());

                let fingerprinter = Fingerprinter::new(temp_dir.path().to_path_buf());
                let digest1 = fingerprinter.compute().unwrap();

                // Append a byte to the first file
                let (name, content) = files.iter().next().unwrap();
                let mut changed = content.clone();
                changed.push(0xff);
                fs::write(temp_dir.path().join(name), &changed).unwrap();

                let digest2 = fingerprinter.compute().unwrap();

                assert_ne!(digest1, digest2);
                Ok(())
            },
        )
        .unwrap();
}

/// Test that name normalization is idempotent
#[test]
fn test_normalize_name_idempotent_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<String>(), |name| {
            let os_name = OsString::from(&name);
            let once = path::normalize_name(&os_name);
            let twice = path::normalize_name(&OsString::from(&once));

            assert_eq!(once, twice);
            Ok(())
        })
        .unwrap();
}

/// Test that joining relative components always yields `/` separators
#[test]
fn test_join_relative_separator_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&("[a-z]{1,8}", "[a-z]{1,8}", "[a-z]{1,8}"), |(a, b, c)| {
            let joined = path::join_relative(&path::join_relative(&a, &b), &c);

            assert_eq!(joined, format!("{}/{}/{}", a, b, c));
            assert!(!joined.contains('\\'));
            Ok(())
        })
        .unwrap();
}
