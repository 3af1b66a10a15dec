//! Test utilities for naming and generated trees.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{fs, io, path::Path};

use crate::{Language, Namer, golden::compare_dirs};

/// Assert that every raw name renders to the expected attribute name.
///
/// All mismatches are collected before panicking, so one run shows every
/// regression in the table.
pub fn assert_names(namer: &Namer, language: Language, cases: &[(&str, &str)]) {
    let mut diff = String::new();
    for (raw, expected) in cases {
        match namer.attribute_name(raw, language) {
            Ok(actual) if actual.name == *expected => {}
            Ok(actual) => {
                diff.push_str(&format!("{}:\n", raw));
                diff.push_str(&format!("  expected: {}\n", expected));
                diff.push_str(&format!("  actual:   {}\n", actual));
            }
            Err(e) => {
                diff.push_str(&format!("{}:\n  error: {}\n", raw, e));
            }
        }
    }

    if !diff.is_empty() {
        panic!("Name mismatch for {}:\n{}", language, diff);
    }
}

/// Assert that two directory trees match, ignoring blank lines and whitespace.
pub fn assert_dirs_eq(expected: &Path, actual: &Path) {
    match compare_dirs(expected, actual) {
        Ok(None) => {}
        Ok(Some(divergence)) => panic!(
            "Generated sources in {} have some differences with {}: {}",
            actual.display(),
            expected.display(),
            divergence
        ),
        Err(e) => panic!("Failed to compare {}: {}", expected.display(), e),
    }
}

/// Write `files` (relative path, content) into a fresh temporary directory.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn write_tree(files: &[(&str, &str)]) -> io::Result<tempfile::TempDir> {
    let temp_dir = tempfile::TempDir::new()?;
    for (path, content) in files {
        let path = temp_dir.path().join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    }
    Ok(temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_names_passes() {
        assert_names(
            &Namer::new(),
            Language::Python,
            &[("zoneIds", "zone_ids"), ("VM", "vm")],
        );
    }

    #[test]
    #[should_panic(expected = "Name mismatch for python")]
    fn test_assert_names_reports_mismatch() {
        assert_names(&Namer::new(), Language::Python, &[("zoneIds", "zoneids")]);
    }

    #[test]
    fn test_write_tree_and_compare() {
        let expected = write_tree(&[("pkg/a.py", "x = 1\n"), ("b.py", "")]).unwrap();
        let actual = write_tree(&[("pkg/a.py", "x = 1"), ("b.py", "\n\n")]).unwrap();
        assert_dirs_eq(expected.path(), actual.path());
    }

    #[test]
    #[should_panic(expected = "missing file: b.py")]
    fn test_assert_dirs_eq_panics_on_divergence() {
        let expected = write_tree(&[("b.py", "")]).unwrap();
        let actual = write_tree(&[]).unwrap();
        assert_dirs_eq(expected.path(), actual.path());
    }
}
