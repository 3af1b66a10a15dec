use std::path::Path;

use clap::Args;
use eyre::Result;

use super::{load_manifest, namer_for};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct LanguagesCommand {}

impl LanguagesCommand {
    pub fn run(&self, config: Option<&Path>) -> Result<()> {
        let namer = namer_for(&load_manifest(config));
        ops::languages(&namer).render(&mut TerminalOutput::new());
        Ok(())
    }
}
