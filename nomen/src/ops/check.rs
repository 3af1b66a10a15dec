//! Check operation - validate names without rendering them.

use nomen_render::Namer;
use tracing::debug;

use crate::{
    input::RawInput,
    reports::{CheckFailure, CheckReport},
};

/// Execute the check operation.
pub fn check(namer: &Namer, inputs: &[RawInput]) -> CheckReport {
    let failures: Vec<CheckFailure> = inputs
        .iter()
        .filter_map(|input| {
            namer.tokenize(&input.name).err().map(|error| CheckFailure {
                location: input.location(),
                error,
            })
        })
        .collect();

    debug!(checked = inputs.len(), invalid = failures.len(), "checked names");

    CheckReport {
        checked: inputs.len(),
        failures,
    }
}
