//! Joining conventions for token sequences.

use std::fmt;

use nomen_core::{Token, TokenSequence};
use serde::Serialize;

/// How normalized tokens are joined into one identifier.
///
/// Every token is lowercased as a unit first; a profile only decides the
/// separator and whether a token's first character is capitalized, so an
/// acronym is never split apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CasingProfile {
    /// `dhcp_server_address`
    Snake,
    /// `dhcpServerAddress`
    Camel,
    /// `DhcpServerAddress`
    Pascal,
    /// `dhcp-server-address`
    Kebab,
}

impl CasingProfile {
    /// Render `tokens` in this convention.
    pub fn apply(&self, tokens: &TokenSequence) -> String {
        match self {
            CasingProfile::Snake => join_lower(tokens, "_"),
            CasingProfile::Kebab => join_lower(tokens, "-"),
            CasingProfile::Pascal => tokens.iter().map(capitalized).collect(),
            CasingProfile::Camel => tokens
                .iter()
                .enumerate()
                .map(|(i, token)| {
                    if i == 0 {
                        token.normalized()
                    } else {
                        capitalized(token)
                    }
                })
                .collect(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CasingProfile::Snake => "snake_case",
            CasingProfile::Camel => "camelCase",
            CasingProfile::Pascal => "PascalCase",
            CasingProfile::Kebab => "kebab-case",
        }
    }
}

impl fmt::Display for CasingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn join_lower(tokens: &TokenSequence, separator: &str) -> String {
    tokens
        .iter()
        .map(Token::normalized)
        .collect::<Vec<_>>()
        .join(separator)
}

fn capitalized(token: &Token) -> String {
    let normalized = token.normalized();
    let mut chars = normalized.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
