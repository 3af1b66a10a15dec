mod check;
mod completions;
mod convert;
mod diff;
mod languages;
mod tokens;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use convert::ConvertCommand;
use diff::DiffCommand;
use eyre::Result;
use languages::LanguagesCommand;
use nomen_manifest::{Manifest, NomenToml};
use nomen_render::Namer;
use tokens::TokensCommand;

use crate::logging::Verbosity;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for nomen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load nomen.toml from `config`, or from the working directory if present.
pub(crate) fn load_manifest(config: Option<&Path>) -> Manifest {
    NomenToml::discover(config)
        .unwrap_or_exit()
        .map(NomenToml::into_manifest)
        .unwrap_or_default()
}

/// A namer over the manifest's dictionary.
pub(crate) fn namer_for(manifest: &Manifest) -> Namer {
    if manifest.extra_acronyms().is_empty() {
        Namer::new()
    } else {
        Namer::with_dictionary(manifest.dictionary().clone())
    }
}

#[derive(Parser)]
#[command(name = "nomen")]
#[command(version)]
#[command(about = "Convert REST API names into idiomatic identifiers")]
pub(crate) struct Cli {
    /// Path to nomen.toml (defaults to ./nomen.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: Verbosity,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let config = self.config.as_deref();
        match &self.command {
            Commands::Convert(cmd) => cmd.run(config),
            Commands::Tokens(cmd) => cmd.run(config),
            Commands::Check(cmd) => cmd.run(config),
            Commands::Languages(cmd) => cmd.run(config),
            Commands::Diff(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert names for one or more target languages
    Convert(ConvertCommand),

    /// Show how names are split into tokens
    Tokens(TokensCommand),

    /// Validate names without converting them
    Check(CheckCommand),

    /// List supported languages and their conventions
    Languages(LanguagesCommand),

    /// Compare a generated tree with a golden tree
    Diff(DiffCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from([
            "nomen", "-v", "convert", "-l", "go", "-l", "ts", "--kind", "type", "VPortTag",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Convert(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_language() {
        let err = Cli::try_parse_from(["nomen", "convert", "-l", "cobol", "VM"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("unsupported language"));
    }

    #[test]
    fn test_load_manifest_with_acronyms() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nomen.toml");
        std::fs::write(&path, "[naming]\nacronyms = [\"VSD\"]\n").unwrap();

        let manifest = load_manifest(Some(&path));
        let namer = namer_for(&manifest);
        assert_eq!(
            namer
                .attribute_name("VSDIDs", nomen_render::Language::Python)
                .unwrap(),
            "vsd_ids"
        );
    }
}
