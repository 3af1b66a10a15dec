//! Golden-tree comparison for generated output.
//!
//! Compares two directory trees the way `diff -B -w -r` does: blank lines
//! are ignored and whitespace inside lines does not matter. Only the first
//! divergence is reported.

use std::{
    collections::BTreeSet,
    fmt, fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::debug;
use walkdir::WalkDir;

/// First difference found between an expected and an actual tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Divergence {
    /// A file exists only in the expected tree
    MissingFile { path: PathBuf },
    /// A file exists only in the actual tree
    ExtraFile { path: PathBuf },
    /// Both trees have the file but its significant lines differ
    ContentMismatch {
        path: PathBuf,
        /// 1-based line in the expected file, `None` past its end
        expected_line: Option<usize>,
        /// 1-based line in the actual file, `None` past its end
        actual_line: Option<usize>,
    },
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Divergence::MissingFile { path } => {
                write!(f, "missing file: {}", path.display())
            }
            Divergence::ExtraFile { path } => {
                write!(f, "unexpected file: {}", path.display())
            }
            Divergence::ContentMismatch {
                path,
                expected_line,
                actual_line,
            } => {
                write!(
                    f,
                    "{} differs (expected line {}, actual line {})",
                    path.display(),
                    line_label(*expected_line),
                    line_label(*actual_line)
                )
            }
        }
    }
}

fn line_label(line: Option<usize>) -> String {
    line.map_or_else(|| "EOF".to_string(), |l| l.to_string())
}

/// Compare two directory trees, returning the first divergence.
pub fn compare_dirs(expected: &Path, actual: &Path) -> io::Result<Option<Divergence>> {
    let expected_files = relative_files(expected)?;
    let actual_files = relative_files(actual)?;
    debug!(
        expected = expected_files.len(),
        actual = actual_files.len(),
        "comparing trees"
    );

    let all: BTreeSet<&PathBuf> = expected_files.iter().chain(&actual_files).collect();
    for path in all {
        let divergence = match (expected_files.contains(path), actual_files.contains(path)) {
            (true, false) => Some(Divergence::MissingFile { path: path.clone() }),
            (false, true) => Some(Divergence::ExtraFile { path: path.clone() }),
            _ => compare_files(&expected.join(path), &actual.join(path), path)?,
        };
        if divergence.is_some() {
            return Ok(divergence);
        }
    }
    Ok(None)
}

fn relative_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
    let mut files = BTreeSet::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(root) {
            files.insert(relative.to_path_buf());
        }
    }
    Ok(files)
}

fn compare_files(expected: &Path, actual: &Path, relative: &Path) -> io::Result<Option<Divergence>> {
    let expected_content = fs::read(expected)?;
    let actual_content = fs::read(actual)?;
    let expected_lines = significant_lines(&String::from_utf8_lossy(&expected_content));
    let actual_lines = significant_lines(&String::from_utf8_lossy(&actual_content));

    let count = expected_lines.len().max(actual_lines.len());
    for i in 0..count {
        let expected_line = expected_lines.get(i);
        let actual_line = actual_lines.get(i);
        match (expected_line, actual_line) {
            (Some((_, e)), Some((_, a))) if e == a => continue,
            _ => {
                return Ok(Some(Divergence::ContentMismatch {
                    path: relative.to_path_buf(),
                    expected_line: expected_line.map(|(n, _)| *n),
                    actual_line: actual_line.map(|(n, _)| *n),
                }));
            }
        }
    }
    Ok(None)
}

/// Non-blank lines with all whitespace removed, tagged with their 1-based number.
fn significant_lines(content: &str) -> Vec<(usize, String)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split_whitespace().collect::<String>()))
        .filter(|(_, line)| !line.is_empty())
        .collect()
}
