use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct DiffCommand {
    /// Golden tree
    expected: PathBuf,

    /// Generated tree
    actual: PathBuf,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl DiffCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::diff(&self.expected, &self.actual)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_match() {
            std::process::exit(1);
        }
        Ok(())
    }
}
