//! C# naming conventions.

use crate::{CasingProfile, NamingConvention};

fn escape_verbatim(name: &str) -> String {
    format!("@{}", name)
}

/// C# naming conventions.
///
/// Properties are PascalCase; keywords are escaped as verbatim identifiers.
/// C# keywords are all lowercase and never match a rendered name; the list
/// only applies to names passed to [`NamingConvention::safe_name`] directly.
pub const CSHARP_NAMING: NamingConvention = NamingConvention {
    attribute_case: CasingProfile::Pascal,
    type_case: CasingProfile::Pascal,
    file_case: CasingProfile::Pascal,
    reserved_words: &[
        "abstract",
        "as",
        "base",
        "bool",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "checked",
        "class",
        "const",
        "continue",
        "decimal",
        "default",
        "delegate",
        "do",
        "double",
        "else",
        "enum",
        "event",
        "explicit",
        "extern",
        "false",
        "finally",
        "fixed",
        "float",
        "for",
        "foreach",
        "goto",
        "if",
        "implicit",
        "in",
        "int",
        "interface",
        "internal",
        "is",
        "lock",
        "long",
        "namespace",
        "new",
        "null",
        "object",
        "operator",
        "out",
        "override",
        "params",
        "private",
        "protected",
        "public",
        "readonly",
        "ref",
        "return",
        "sbyte",
        "sealed",
        "short",
        "sizeof",
        "stackalloc",
        "static",
        "string",
        "struct",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "uint",
        "ulong",
        "unchecked",
        "unsafe",
        "ushort",
        "using",
        "virtual",
        "void",
        "volatile",
        "while",
    ],
    escape_reserved: escape_verbatim,
};
