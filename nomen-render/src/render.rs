//! Rendering token sequences for a target language.

use nomen_core::{InvalidName, TokenSequence, Tokenizer};
use tracing::trace;

use crate::{Error, IdiomaticName, Language};

/// Render `tokens` as an attribute name in `language`.
pub fn render(tokens: &TokenSequence, language: Language) -> IdiomaticName {
    let name = language.convention().attribute_name(tokens);
    if name.escaped {
        trace!(%language, name = %name, "reserved word escaped");
    }
    name
}

/// Render `tokens` as a type name in `language`.
pub fn render_type(tokens: &TokenSequence, language: Language) -> IdiomaticName {
    language.convention().type_name(tokens)
}

/// Render `tokens` as a file stem in `language`.
pub fn render_file(tokens: &TokenSequence, language: Language) -> String {
    language.convention().file_name(tokens)
}

/// Convert a raw API name to its attribute name in `language`.
///
/// Uses the built-in acronym dictionary.
pub fn attribute_name(raw: &str, language: Language) -> Result<IdiomaticName, InvalidName> {
    let tokens = Tokenizer::default().tokenize(raw)?;
    Ok(render(&tokens, language))
}

/// Convert a raw API name using a language given by name (`"python"`, `"ts"`, ...).
pub fn idiomatic_name(raw: &str, language: &str) -> Result<IdiomaticName, Error> {
    let language: Language = language.parse()?;
    Ok(attribute_name(raw, language)?)
}
