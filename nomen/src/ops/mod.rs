//! Core operations.
//!
//! This module contains the business logic for nomen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod convert;
pub mod diff;
pub mod languages;
pub mod tokens;

pub use check::check;
pub use convert::convert;
pub use diff::diff;
pub use languages::languages;
pub use tokens::tokens;
