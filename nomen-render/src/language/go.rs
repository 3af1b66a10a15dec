//! Go naming conventions.

use crate::{CasingProfile, NamingConvention, naming::escape_with_underscore_prefix};

/// Go naming conventions.
///
/// Attributes are exported struct fields, so they use PascalCase. Go
/// keywords are all lowercase and never match a rendered name; the list
/// only applies to names passed to [`NamingConvention::safe_name`] directly.
pub const GO_NAMING: NamingConvention = NamingConvention {
    attribute_case: CasingProfile::Pascal,
    type_case: CasingProfile::Pascal,
    file_case: CasingProfile::Snake,
    reserved_words: &[
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
    ],
    escape_reserved: escape_with_underscore_prefix,
};
