//! Check command report data structures.

use nomen_core::InvalidName;

use super::output::{Output, Report};

/// A name that failed validation.
#[derive(Debug)]
pub struct CheckFailure {
    pub location: Option<String>,
    pub error: InvalidName,
}

/// Report data from validating a batch of names.
#[derive(Debug)]
pub struct CheckReport {
    /// Number of names checked.
    pub checked: usize,
    pub failures: Vec<CheckFailure>,
}

impl CheckReport {
    /// Whether every name tokenized.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for failure in &self.failures {
            out.diagnostic(
                failure.location.as_deref(),
                miette::Report::new(failure.error.clone()),
            );
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} name{} valid",
                self.checked,
                if self.checked == 1 { " is" } else { "s are" }
            ));
        } else {
            out.newline();
            out.preformatted(&format!(
                "✗ {} of {} names invalid",
                self.failures.len(),
                self.checked
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use nomen_core::tokenize;

    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_render_valid() {
        let report = CheckReport {
            checked: 1,
            failures: vec![],
        };
        insta::assert_snapshot!(BufferOutput::render(&report), @"✓ 1 name is valid");
    }

    #[test]
    fn test_render_failures() {
        let report = CheckReport {
            checked: 3,
            failures: vec![CheckFailure {
                location: Some("line 2".to_string()),
                error: tokenize("zone ids").unwrap_err(),
            }],
        };
        assert!(!report.is_valid());
        insta::assert_snapshot!(BufferOutput::render(&report), @r"
        error: line 2: invalid name 'zone ids': unexpected character ' '

        ✗ 1 of 3 names invalid
        ");
    }
}
