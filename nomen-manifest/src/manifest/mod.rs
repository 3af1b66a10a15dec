//! Manifest types and parsing for nomen.toml files.

mod file;
mod parse;
mod validate;

pub use file::NomenToml;
use nomen_core::AcronymDictionary;
use nomen_render::Language;
use serde::Deserialize;
use toml::Spanned;

/// How the CLI prints converted names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// One JSON document
    Json,
}

/// `[naming]` section as written in nomen.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamingSection {
    /// Default target languages
    #[serde(default)]
    pub languages: Vec<Spanned<String>>,
    /// Acronyms added to the built-in dictionary
    #[serde(default)]
    pub acronyms: Vec<Spanned<String>>,
}

/// `[output]` section as written in nomen.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Root of nomen.toml, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawManifest {
    #[serde(default)]
    pub naming: NamingSection,
    #[serde(default)]
    pub output: OutputSection,
}

/// Validated configuration.
///
/// Every language has been resolved and every acronym checked, so the
/// dictionary can be shared read-only from here on.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    languages: Vec<Language>,
    dictionary: AcronymDictionary,
    extra_acronyms: Vec<String>,
    output: OutputFormat,
}

impl Manifest {
    /// Target languages, defaulting to Python when none are configured.
    pub fn languages(&self) -> &[Language] {
        if self.languages.is_empty() {
            &[Language::Python]
        } else {
            &self.languages
        }
    }

    /// The built-in dictionary extended with the configured acronyms.
    pub fn dictionary(&self) -> &AcronymDictionary {
        &self.dictionary
    }

    /// Acronyms added by this manifest.
    pub fn extra_acronyms(&self) -> &[String] {
        &self.extra_acronyms
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
    }
}
