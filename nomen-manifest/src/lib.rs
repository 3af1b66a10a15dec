//! nomen.toml configuration for nomen.
//!
//! The manifest names the default target languages, extends the acronym
//! dictionary and picks the CLI output format. All keys are optional:
//!
//! ```toml
//! [naming]
//! languages = ["python", "go"]
//! acronyms = ["VSD", "VRS"]
//!
//! [output]
//! format = "json"
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    Manifest, NamingSection, NomenToml, OutputFormat, OutputSection, RawManifest,
};
