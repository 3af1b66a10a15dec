//! Convert operation - raw names to idiomatic names.

use indexmap::IndexMap;
use nomen_core::InvalidName;
use nomen_render::{IdiomaticName, Language, Namer, render, render_file, render_type};
use tracing::debug;

use crate::{
    input::RawInput,
    reports::{ConvertReport, ConvertRow, NameKind},
};

/// Execute the convert operation.
///
/// Each name is tokenized once and rendered for every language; a name that
/// fails to tokenize is kept in the report with its error.
pub fn convert(
    namer: &Namer,
    inputs: &[RawInput],
    languages: &[Language],
    kind: NameKind,
) -> ConvertReport {
    debug!(names = inputs.len(), ?languages, ?kind, "converting names");

    let rows = inputs
        .iter()
        .map(|input| match convert_one(namer, &input.name, languages, kind) {
            Ok(names) => ConvertRow {
                name: input.name.clone(),
                line: input.line,
                names,
                error: None,
            },
            Err(error) => ConvertRow {
                name: input.name.clone(),
                line: input.line,
                names: IndexMap::new(),
                error: Some(error),
            },
        })
        .collect();

    ConvertReport {
        kind,
        languages: languages.to_vec(),
        rows,
    }
}

fn convert_one(
    namer: &Namer,
    raw: &str,
    languages: &[Language],
    kind: NameKind,
) -> Result<IndexMap<Language, IdiomaticName>, InvalidName> {
    let tokens = namer.tokenize(raw)?;
    Ok(languages
        .iter()
        .map(|&language| {
            let name = match kind {
                NameKind::Attribute => render(&tokens, language),
                NameKind::Type => render_type(&tokens, language),
                NameKind::File => IdiomaticName {
                    name: render_file(&tokens, language),
                    escaped: false,
                },
            };
            (language, name)
        })
        .collect())
}
