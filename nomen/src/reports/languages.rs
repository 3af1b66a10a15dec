//! Languages command report data structures.

use nomen_render::{CasingProfile, Language, Namer};

use super::{
    format_table,
    output::{Output, Report},
};

/// Sample name shown for each language.
const SAMPLE: &str = "DHCPServerAddress";

/// Conventions of one supported language.
#[derive(Debug)]
pub struct LanguageInfo {
    pub language: Language,
    pub attribute_case: CasingProfile,
    pub type_case: CasingProfile,
    pub file_case: CasingProfile,
    /// The word `class` run through the language's escape policy
    pub escape_example: String,
    pub sample: String,
}

impl LanguageInfo {
    pub fn new(namer: &Namer, language: Language) -> Self {
        let convention = language.convention();
        let sample = namer
            .attribute_name(SAMPLE, language)
            .map(|name| name.name)
            .unwrap_or_default();
        Self {
            language,
            attribute_case: convention.attribute_case,
            type_case: convention.type_case,
            file_case: convention.file_case,
            escape_example: (convention.escape_reserved)("class"),
            sample,
        }
    }
}

/// Report data listing every supported language.
#[derive(Debug)]
pub struct LanguagesReport {
    pub languages: Vec<LanguageInfo>,
}

impl Report for LanguagesReport {
    fn render(&self, out: &mut dyn Output) {
        let header = ["language", "attributes", "types", "files", "escape", SAMPLE]
            .map(String::from)
            .to_vec();
        let rows: Vec<Vec<String>> = std::iter::once(header)
            .chain(self.languages.iter().map(|info| {
                vec![
                    info.language.to_string(),
                    info.attribute_case.to_string(),
                    info.type_case.to_string(),
                    info.file_case.to_string(),
                    info.escape_example.clone(),
                    info.sample.clone(),
                ]
            }))
            .collect();

        for line in format_table(&rows) {
            out.preformatted(&line);
        }
    }
}
