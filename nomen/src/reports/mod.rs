//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod convert;
mod diff;
mod languages;
mod output;
mod tokens;

pub use check::{CheckFailure, CheckReport};
pub use convert::{ConvertReport, ConvertRow, NameKind};
pub use diff::DiffReport;
pub use languages::{LanguageInfo, LanguagesReport};
pub use output::{Report, TerminalOutput};
pub use tokens::{TokensEntry, TokensReport};

#[cfg(test)]
pub use output::BufferOutput;

/// Pad columns to a common width. Trailing cells are not padded.
pub(crate) fn format_table(rows: &[Vec<String>]) -> Vec<String> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(String::len)
                .max()
                .unwrap_or(0)
        })
        .collect();

    rows.iter()
        .map(|row| {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push_str("  ");
                }
                if i + 1 < row.len() {
                    line.push_str(&format!("{:<width$}", cell, width = widths[i]));
                } else {
                    line.push_str(cell);
                }
            }
            line
        })
        .collect()
}
