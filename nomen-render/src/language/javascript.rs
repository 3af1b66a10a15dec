//! JavaScript naming conventions.

use crate::{CasingProfile, NamingConvention, naming::escape_with_underscore_prefix};

/// JavaScript naming conventions.
pub const JAVASCRIPT_NAMING: NamingConvention = NamingConvention {
    attribute_case: CasingProfile::Camel,
    type_case: CasingProfile::Pascal,
    file_case: CasingProfile::Kebab,
    reserved_words: &[
        "await",
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "implements",
        "import",
        "in",
        "instanceof",
        "interface",
        "let",
        "new",
        "null",
        "package",
        "private",
        "protected",
        "public",
        "return",
        "static",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
    ],
    escape_reserved: escape_with_underscore_prefix,
};
