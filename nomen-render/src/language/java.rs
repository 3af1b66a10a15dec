//! Java naming conventions.

use crate::{CasingProfile, NamingConvention, naming::escape_with_underscore_prefix};

/// Java naming conventions.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    attribute_case: CasingProfile::Camel,
    type_case: CasingProfile::Pascal,
    file_case: CasingProfile::Pascal,
    reserved_words: &[
        "abstract",
        "assert",
        "boolean",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "class",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extends",
        "false",
        "final",
        "finally",
        "float",
        "for",
        "goto",
        "if",
        "implements",
        "import",
        "instanceof",
        "int",
        "interface",
        "long",
        "native",
        "new",
        "null",
        "package",
        "private",
        "protected",
        "public",
        "return",
        "short",
        "static",
        "strictfp",
        "super",
        "switch",
        "synchronized",
        "this",
        "throw",
        "throws",
        "transient",
        "true",
        "try",
        "void",
        "volatile",
        "while",
    ],
    escape_reserved: escape_with_underscore_prefix,
};

#[cfg(test)]
mod tests {
    use nomen_core::tokenize;

    use super::*;

    #[test]
    fn test_java_naming() {
        let tokens = tokenize("MultiNICVPortsFetcher").unwrap();
        assert_eq!(JAVA_NAMING.attribute_name(&tokens), "multiNicVportsFetcher");
        assert_eq!(JAVA_NAMING.type_name(&tokens), "MultiNicVportsFetcher");
        assert_eq!(JAVA_NAMING.file_name(&tokens), "MultiNicVportsFetcher");
    }

    #[test]
    fn test_java_escape_reserved() {
        let tokens = tokenize("Default").unwrap();
        let name = JAVA_NAMING.attribute_name(&tokens);
        assert_eq!(name, "_default");
        assert!(name.escaped);
    }
}
