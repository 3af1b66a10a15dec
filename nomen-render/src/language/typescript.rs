//! TypeScript naming conventions.

use crate::{CasingProfile, NamingConvention, naming::escape_with_underscore_prefix};

/// TypeScript naming conventions.
pub const TYPESCRIPT_NAMING: NamingConvention = NamingConvention {
    // Fields use camelCase
    attribute_case: CasingProfile::Camel,
    // Types use PascalCase
    type_case: CasingProfile::Pascal,
    // Files use kebab-case
    file_case: CasingProfile::Kebab,
    reserved_words: &[
        // JavaScript reserved words
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
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
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
        // TypeScript reserved words
        "any",
        "as",
        "async",
        "await",
        "boolean",
        "constructor",
        "declare",
        "get",
        "implements",
        "interface",
        "module",
        "namespace",
        "never",
        "number",
        "object",
        "package",
        "private",
        "protected",
        "public",
        "readonly",
        "require",
        "set",
        "static",
        "string",
        "symbol",
        "type",
        "undefined",
        "unknown",
    ],
    escape_reserved: escape_with_underscore_prefix,
};
