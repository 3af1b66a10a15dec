//! Identifier tokenizer for nomen.
//!
//! This crate turns machine-generated API names such as `DHCPServerAddress`
//! or `IDsTORemove` into ordered word tokens, resolving acronym runs against
//! an [`AcronymDictionary`] and a small table of [`rules::TailRule`]s.
//!
//! ```
//! let tokens = nomen_core::tokenize("MultiNICVPortsFetcher").unwrap();
//! assert_eq!(tokens.texts(), ["Multi", "NIC", "VPorts", "Fetcher"]);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod dictionary;
mod error;
pub mod rules;
mod token;
mod tokenizer;

pub use dictionary::{AcronymDictionary, BUILTIN_ACRONYMS, validate_acronym};
pub use error::{InvalidAcronym, InvalidName, InvalidReason};
pub use token::{Token, TokenKind, TokenSequence};
pub use tokenizer::{Tokenizer, tokenize};
