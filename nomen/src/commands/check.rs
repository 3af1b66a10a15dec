use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;

use super::{load_manifest, namer_for};
use crate::{
    input::read_names,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Names to validate (read from stdin when none are given)
    names: Vec<String>,

    /// Read names from a file, one per line
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self, config: Option<&Path>) -> Result<()> {
        let namer = namer_for(&load_manifest(config));
        let inputs = read_names(&self.names, self.file.as_deref())?;

        let report = ops::check(&namer, &inputs);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
