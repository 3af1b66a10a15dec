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
pub struct TokensCommand {
    /// Names to tokenize (read from stdin when none are given)
    names: Vec<String>,

    /// Read names from a file, one per line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl TokensCommand {
    pub fn run(&self, config: Option<&Path>) -> Result<()> {
        let namer = namer_for(&load_manifest(config));
        let inputs = read_names(&self.names, self.file.as_deref())?;

        let report = ops::tokens(&namer, &inputs);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if report.failures() > 0 {
            std::process::exit(1);
        }
        Ok(())
    }
}
