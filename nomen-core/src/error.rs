use std::fmt;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Why a raw name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The name is the empty string
    Empty,
    /// The name contains a character outside `[A-Za-z0-9_]`
    IllegalChar(char),
    /// A leading or doubled underscore leaves an empty word
    EmptyWord,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::Empty => f.write_str("name is empty"),
            InvalidReason::IllegalChar(c) => write!(f, "unexpected character {:?}", c),
            InvalidReason::EmptyWord => f.write_str("underscore leaves an empty word"),
        }
    }
}

/// A raw name that cannot be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("invalid name '{name}': {reason}")]
#[diagnostic(
    code(nomen::invalid_name),
    help("names may only contain ASCII letters and digits, with single underscores between words")
)]
pub struct InvalidName {
    #[source_code]
    name: String,
    #[label("{reason}")]
    span: Option<SourceSpan>,
    reason: InvalidReason,
}

impl InvalidName {
    pub(crate) fn empty() -> Self {
        Self {
            name: String::new(),
            span: None,
            reason: InvalidReason::Empty,
        }
    }

    pub(crate) fn at(name: &str, offset: usize, len: usize, reason: InvalidReason) -> Self {
        Self {
            name: name.to_string(),
            span: Some((offset, len).into()),
            reason,
        }
    }

    /// The rejected name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reason(&self) -> InvalidReason {
        self.reason
    }

    /// Byte offset of the offending character, if any.
    pub fn offset(&self) -> Option<usize> {
        self.span.map(|span| span.offset())
    }
}

/// A dictionary entry that is not a usable acronym.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid acronym '{acronym}': {reason}")]
pub struct InvalidAcronym {
    pub acronym: String,
    pub reason: &'static str,
}
