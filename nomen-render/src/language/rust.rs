//! Rust naming conventions.

use crate::{CasingProfile, NamingConvention, naming::escape_with_underscore_suffix};

fn escape_rust_reserved(name: &str) -> String {
    // Path keywords cannot be raw identifiers
    match name {
        "crate" | "self" | "Self" | "super" => escape_with_underscore_suffix(name),
        _ => format!("r#{}", name),
    }
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    attribute_case: CasingProfile::Snake,
    type_case: CasingProfile::Pascal,
    file_case: CasingProfile::Snake,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
        "trait", "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
    ],
    escape_reserved: escape_rust_reserved,
};
