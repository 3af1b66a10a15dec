use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use nomen_manifest::OutputFormat;
use nomen_render::Language;

use super::{load_manifest, namer_for};
use crate::{
    input::read_names,
    ops,
    reports::{NameKind, Report, TerminalOutput},
};

#[derive(Args)]
pub struct ConvertCommand {
    /// Names to convert (read from stdin when none are given)
    names: Vec<String>,

    /// Target language, repeatable (defaults to the languages in nomen.toml)
    #[arg(short, long = "lang")]
    languages: Vec<Language>,

    /// Read names from a file, one per line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Kind of identifier to produce
    #[arg(short, long, value_enum, default_value_t)]
    kind: NameKind,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl ConvertCommand {
    pub fn run(&self, config: Option<&Path>) -> Result<()> {
        let manifest = load_manifest(config);
        let namer = namer_for(&manifest);
        let inputs = read_names(&self.names, self.file.as_deref())?;

        let languages = if self.languages.is_empty() {
            manifest.languages()
        } else {
            self.languages.as_slice()
        };

        let report = ops::convert(&namer, &inputs, languages, self.kind);
        if self.json || manifest.output_format() == OutputFormat::Json {
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
