//! Python naming conventions.

use crate::{CasingProfile, NamingConvention, naming::escape_with_underscore_suffix};

/// Python naming conventions (PEP 8).
///
/// Reserved names get a trailing underscore (`class_`), as PEP 8 recommends.
pub const PYTHON_NAMING: NamingConvention = NamingConvention {
    attribute_case: CasingProfile::Snake,
    type_case: CasingProfile::Pascal,
    file_case: CasingProfile::Snake,
    reserved_words: &[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield",
    ],
    escape_reserved: escape_with_underscore_suffix,
};

#[cfg(test)]
mod tests {
    use nomen_core::tokenize;

    use super::*;

    #[test]
    fn test_python_naming() {
        let tokens = tokenize("VCenterEAMConfig").unwrap();
        assert_eq!(PYTHON_NAMING.attribute_name(&tokens), "vcenter_eam_config");
        assert_eq!(PYTHON_NAMING.type_name(&tokens), "VcenterEamConfig");
        assert_eq!(PYTHON_NAMING.file_name(&tokens), "vcenter_eam_config");
    }

    #[test]
    fn test_python_escape_reserved() {
        let tokens = tokenize("from").unwrap();
        let name = PYTHON_NAMING.attribute_name(&tokens);
        assert_eq!(name, "from_");
        assert!(name.escaped);

        let tokens = tokenize("none").unwrap();
        assert_eq!(PYTHON_NAMING.type_name(&tokens), "None_");
    }
}
