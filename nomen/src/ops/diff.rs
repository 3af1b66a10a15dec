//! Diff operation - golden tree comparison.

use std::path::Path;

use eyre::{Context, Result, ensure};
use nomen_render::golden::compare_dirs;

use crate::reports::DiffReport;

/// Execute the diff operation.
pub fn diff(expected: &Path, actual: &Path) -> Result<DiffReport> {
    ensure!(
        expected.is_dir(),
        "expected tree {} is not a directory",
        expected.display()
    );
    ensure!(
        actual.is_dir(),
        "actual tree {} is not a directory",
        actual.display()
    );

    let divergence = compare_dirs(expected, actual).wrap_err_with(|| {
        format!(
            "Failed to compare {} with {}",
            actual.display(),
            expected.display()
        )
    })?;

    Ok(DiffReport {
        expected: expected.to_path_buf(),
        actual: actual.to_path_buf(),
        divergence,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_diff_ignores_blank_lines() {
        let expected = tempfile::tempdir().unwrap();
        let actual = tempfile::tempdir().unwrap();
        fs::write(expected.path().join("vport.py"), "class VPort:\n\n    pass\n").unwrap();
        fs::write(actual.path().join("vport.py"), "class  VPort:\n    pass").unwrap();

        let report = diff(expected.path(), actual.path()).unwrap();
        assert!(report.is_match());
    }

    #[test]
    fn test_diff_rejects_missing_tree() {
        let expected = tempfile::tempdir().unwrap();
        let err = diff(expected.path(), &expected.path().join("missing")).unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
    }
}
