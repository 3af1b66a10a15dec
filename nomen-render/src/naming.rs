//! Naming conventions for target languages.

use std::fmt;

use nomen_core::TokenSequence;
use serde::Serialize;

use crate::CasingProfile;

/// A rendered identifier, ready to be emitted as source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IdiomaticName {
    /// The identifier text.
    pub name: String,
    /// Whether the reserved-word policy rewrote the name.
    pub escaped: bool,
}

impl IdiomaticName {
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for IdiomaticName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq<&str> for IdiomaticName {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

/// Language-specific naming conventions.
///
/// Defines how tokens become attribute, type and file names, and how a name
/// that collides with a reserved word is escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Casing for attributes and fields (e.g., `enterprise_id`)
    pub attribute_case: CasingProfile,
    /// Casing for type names (e.g., `EnterpriseId`)
    pub type_case: CasingProfile,
    /// Casing for file stems (e.g., `enterprise-id`)
    pub file_case: CasingProfile,
    /// Reserved words of the language, matched case-sensitively
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: String) -> IdiomaticName {
        if self.is_reserved(&name) {
            IdiomaticName {
                name: (self.escape_reserved)(&name),
                escaped: true,
            }
        } else {
            IdiomaticName {
                name,
                escaped: false,
            }
        }
    }

    /// Render tokens as an attribute name.
    pub fn attribute_name(&self, tokens: &TokenSequence) -> IdiomaticName {
        self.safe_name(self.attribute_case.apply(tokens))
    }

    /// Render tokens as a type name.
    pub fn type_name(&self, tokens: &TokenSequence) -> IdiomaticName {
        self.safe_name(self.type_case.apply(tokens))
    }

    /// Render tokens as a file stem.
    pub fn file_name(&self, tokens: &TokenSequence) -> String {
        // File names are never escaped
        self.file_case.apply(tokens)
    }
}

pub(crate) fn escape_with_underscore_prefix(name: &str) -> String {
    format!("_{}", name)
}

pub(crate) fn escape_with_underscore_suffix(name: &str) -> String {
    format!("{}_", name)
}

#[cfg(test)]
mod tests {
    use nomen_core::tokenize;

    use super::*;

    const TEST_NAMING: NamingConvention = NamingConvention {
        attribute_case: CasingProfile::Snake,
        type_case: CasingProfile::Pascal,
        file_case: CasingProfile::Kebab,
        reserved_words: &["type", "Type"],
        escape_reserved: escape_with_underscore_suffix,
    };

    #[test]
    fn test_safe_name() {
        assert_eq!(
            TEST_NAMING.safe_name("type".to_string()),
            IdiomaticName {
                name: "type_".to_string(),
                escaped: true
            }
        );
        assert!(!TEST_NAMING.safe_name("kind".to_string()).escaped);
    }

    #[test]
    fn test_reserved_match_is_case_sensitive() {
        assert!(TEST_NAMING.is_reserved("type"));
        assert!(!TEST_NAMING.is_reserved("TYPE"));
    }

    #[test]
    fn test_names_by_kind() {
        let tokens = tokenize("VPortTag").unwrap();
        assert_eq!(TEST_NAMING.attribute_name(&tokens), "vport_tag");
        assert_eq!(TEST_NAMING.type_name(&tokens), "VportTag");
        assert_eq!(TEST_NAMING.file_name(&tokens), "vport-tag");

        let tokens = tokenize("Type").unwrap();
        assert!(TEST_NAMING.type_name(&tokens).escaped);
        assert!(TEST_NAMING.attribute_name(&tokens).escaped);
        assert_eq!(TEST_NAMING.file_name(&tokens), "type");
    }
}
