//! Tokens operation - expose the tokenizer's view of names.

use nomen_render::Namer;

use crate::{
    input::RawInput,
    reports::{TokensEntry, TokensReport},
};

/// Execute the tokens operation.
pub fn tokens(namer: &Namer, inputs: &[RawInput]) -> TokensReport {
    TokensReport {
        entries: inputs
            .iter()
            .map(|input| TokensEntry {
                name: input.name.clone(),
                tokens: namer.tokenize(&input.name),
            })
            .collect(),
    }
}
