//! Diff command report data structures.

use std::path::PathBuf;

use nomen_render::golden::Divergence;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from comparing a generated tree with a golden tree.
#[derive(Debug, Serialize)]
pub struct DiffReport {
    pub expected: PathBuf,
    pub actual: PathBuf,
    pub divergence: Option<Divergence>,
}

impl DiffReport {
    pub fn is_match(&self) -> bool {
        self.divergence.is_none()
    }
}

impl Report for DiffReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.divergence {
            None => out.preformatted(&format!(
                "✓ {} matches {}",
                self.actual.display(),
                self.expected.display()
            )),
            Some(divergence) => {
                out.preformatted(&format!(
                    "✗ {} differs from {}",
                    self.actual.display(),
                    self.expected.display()
                ));
                out.list_item(&divergence.to_string());
            }
        }
    }
}
