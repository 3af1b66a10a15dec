//! Objective-C naming conventions.

use crate::{CasingProfile, NamingConvention, naming::escape_with_underscore_prefix};

/// Objective-C naming conventions.
pub const OBJC_NAMING: NamingConvention = NamingConvention {
    attribute_case: CasingProfile::Camel,
    type_case: CasingProfile::Pascal,
    file_case: CasingProfile::Pascal,
    reserved_words: &[
        // C keywords
        "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
        "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
        "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch",
        "typedef", "union", "unsigned", "void", "volatile", "while",
        // Objective-C additions
        "BOOL", "Class", "IMP", "NO", "SEL", "YES", "bycopy", "byref", "id", "in", "inout",
        "nil", "oneway", "out", "self", "super",
    ],
    escape_reserved: escape_with_underscore_prefix,
};

#[cfg(test)]
mod tests {
    use nomen_core::tokenize;

    use super::*;

    #[test]
    fn test_objc_naming() {
        let tokens = tokenize("VPortsTag").unwrap();
        assert_eq!(OBJC_NAMING.attribute_name(&tokens), "vportsTag");
        assert_eq!(OBJC_NAMING.type_name(&tokens), "VportsTag");
    }

    #[test]
    fn test_objc_id_is_reserved() {
        let tokens = tokenize("ID").unwrap();
        let name = OBJC_NAMING.attribute_name(&tokens);
        assert_eq!(name, "_id");
        assert!(name.escaped);
    }
}
