//! Validation of a parsed nomen.toml.

use std::collections::HashMap;

use nomen_core::AcronymDictionary;
use nomen_render::Language;

use super::{Manifest, RawManifest};
use crate::{Result, error::SourceContext};

/// Resolve languages and acronyms, reporting the first problem with its span.
pub(crate) fn validate_manifest(raw: RawManifest, ctx: &SourceContext) -> Result<Manifest> {
    let mut languages = Vec::new();
    let mut seen: HashMap<Language, std::ops::Range<usize>> = HashMap::new();
    for entry in &raw.naming.languages {
        let language: Language = entry
            .get_ref()
            .parse()
            .map_err(|_| ctx.unsupported_language_error(entry.get_ref(), entry.span()))?;
        if let Some(first) = seen.get(&language) {
            return Err(ctx.duplicate_language_error(
                language.as_str(),
                first.clone(),
                entry.span(),
            ));
        }
        seen.insert(language, entry.span());
        languages.push(language);
    }

    let mut extra_acronyms = Vec::new();
    let mut dictionary = AcronymDictionary::builtin().clone();
    for entry in &raw.naming.acronyms {
        let acronym = entry.get_ref();
        dictionary = dictionary
            .with_entries([acronym.as_str()])
            .map_err(|e| ctx.invalid_acronym_error(acronym, e.reason, entry.span()))?;
        extra_acronyms.push(acronym.clone());
    }

    Ok(Manifest {
        languages,
        dictionary,
        extra_acronyms,
        output: raw.output.format,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::{Error, Manifest, OutputFormat};
    use nomen_render::Language;

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest = Manifest::from_str("").unwrap();
        assert_eq!(manifest.languages(), &[Language::Python]);
        assert_eq!(manifest.output_format(), OutputFormat::Table);
        assert!(manifest.extra_acronyms().is_empty());
        assert!(manifest.dictionary().contains("DHCP"));
    }

    #[test]
    fn test_full_manifest() {
        let manifest = Manifest::from_str(
            r#"
            [naming]
            languages = ["go", "ts"]
            acronyms = ["VSD", "VRS"]

            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(manifest.languages(), &[Language::Go, Language::TypeScript]);
        assert_eq!(manifest.extra_acronyms(), &["VSD", "VRS"]);
        assert!(manifest.dictionary().contains("VSD"));
        assert!(manifest.dictionary().contains("ID"));
        assert_eq!(manifest.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_unsupported_language_points_at_entry() {
        let src = "[naming]\nlanguages = [\"python\", \"cobol\"]\n";
        let err = Manifest::from_str(src).unwrap_err();
        match *err {
            Error::UnsupportedLanguage { name, span, .. } => {
                assert_eq!(name, "cobol");
                let labelled = &src[span.offset()..span.offset() + span.len()];
                assert!(labelled.contains("cobol"));
                assert!(!labelled.contains("python"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_language() {
        let err = Manifest::from_str("[naming]\nlanguages = [\"python\", \"py\"]\n").unwrap_err();
        assert!(matches!(*err, Error::DuplicateLanguage { ref name, .. } if name == "python"));
    }

    #[test]
    fn test_invalid_acronym() {
        let err = Manifest::from_str("[naming]\nacronyms = [\"Vsd\"]\n").unwrap_err();
        match *err {
            Error::InvalidAcronym {
                acronym, reason, ..
            } => {
                assert_eq!(acronym, "Vsd");
                assert!(reason.contains("uppercase"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_acronym_points_at_entry() {
        let src = "[naming]\nacronyms = [\"VSD\", \"X\"]\n";
        let err = Manifest::from_str(src).unwrap_err();
        match *err {
            Error::InvalidAcronym { span, reason, .. } => {
                let labelled = &src[span.offset()..span.offset() + span.len()];
                assert!(labelled.contains('X'));
                assert!(!labelled.contains("VSD"));
                assert!(reason.contains("two letters"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Manifest::from_str("[naming]\nlanguage = \"python\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_bad_output_format() {
        let err = Manifest::from_str("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
