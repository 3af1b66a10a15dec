//! Languages operation - describe every supported convention.

use nomen_render::{Language, Namer};

use crate::reports::{LanguageInfo, LanguagesReport};

/// Execute the languages operation.
pub fn languages(namer: &Namer) -> LanguagesReport {
    LanguagesReport {
        languages: Language::ALL
            .iter()
            .map(|&language| LanguageInfo::new(namer, language))
            .collect(),
    }
}
