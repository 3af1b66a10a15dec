//! Word tokens produced by the tokenizer.

use std::{fmt, ops::Index};

use serde::Serialize;

/// Whether a token is an ordinary word or a recognized acronym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A regular word (`Server`, `enterprise`, `L2`)
    Plain,
    /// An uppercase abbreviation, possibly carrying an absorbed suffix (`DHCP`, `IDs`, `IPv6`)
    Acronym,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Plain => "plain",
            TokenKind::Acronym => "acronym",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single word of an identifier, in its original case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    text: String,
    kind: TokenKind,
}

impl Token {
    /// Create a plain word token.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Plain,
        }
    }

    /// Create an acronym token.
    pub fn acronym(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Acronym,
        }
    }

    /// The token text exactly as it appeared in the raw name.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn is_acronym(&self) -> bool {
        self.kind == TokenKind::Acronym
    }

    /// The token lowercased as a single unit.
    pub fn normalized(&self) -> String {
        self.text.to_ascii_lowercase()
    }

    pub(crate) fn prepend(&mut self, prefix: &str) {
        self.text.insert_str(0, prefix);
    }

    pub(crate) fn append(&mut self, suffix: &str) {
        self.text.push_str(suffix);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered, non-empty list of tokens for one raw name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<Token>);

impl TokenSequence {
    /// Returns `None` for an empty token list.
    pub fn new(tokens: Vec<Token>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self(tokens))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.0
    }

    /// Concatenate the original-case text of every token.
    pub fn concat(&self) -> String {
        self.0.iter().map(Token::text).collect()
    }

    /// Token texts in order.
    pub fn texts(&self) -> Vec<&str> {
        self.0.iter().map(Token::text).collect()
    }
}

impl Index<usize> for TokenSequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for TokenSequence {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_lowercases_whole_token() {
        assert_eq!(Token::acronym("IPv6").normalized(), "ipv6");
        assert_eq!(Token::plain("Server").normalized(), "server");
    }

    #[test]
    fn test_empty_sequence_rejected() {
        assert!(TokenSequence::new(Vec::new()).is_none());
    }

    #[test]
    fn test_display_and_concat() {
        let seq = TokenSequence::new(vec![
            Token::acronym("DHCP"),
            Token::plain("Server"),
            Token::plain("Address"),
        ])
        .unwrap();
        assert_eq!(seq.to_string(), "DHCP Server Address");
        assert_eq!(seq.concat(), "DHCPServerAddress");
        assert_eq!(seq.len(), 3);
        assert!(seq[0].is_acronym());
    }

    #[test]
    fn test_serialize() {
        let seq = TokenSequence::new(vec![Token::acronym("IDs"), Token::plain("to")]).unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(
            json,
            r#"[{"text":"IDs","kind":"acronym"},{"text":"to","kind":"plain"}]"#
        );
    }
}
