//! Supported target languages.
//!
//! Each language registers one [`NamingConvention`]. The set is closed:
//! a language tag that does not parse into [`Language`] is rejected with
//! [`UnsupportedLanguage`] before any rendering happens.

mod csharp;
mod go;
mod java;
mod javascript;
mod objc;
mod python;
mod rust;
mod typescript;

use std::{fmt, str::FromStr};

pub use csharp::CSHARP_NAMING;
pub use go::GO_NAMING;
pub use java::JAVA_NAMING;
pub use javascript::JAVASCRIPT_NAMING;
pub use objc::OBJC_NAMING;
pub use python::PYTHON_NAMING;
pub use rust::RUST_NAMING;
use serde::{Deserialize, Serialize};
pub use typescript::TYPESCRIPT_NAMING;

use crate::{NamingConvention, UnsupportedLanguage};

/// Target languages with a registered naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Rust,
    Go,
    Java,
    JavaScript,
    TypeScript,
    #[serde(rename = "csharp")]
    CSharp,
    #[serde(rename = "objc")]
    ObjectiveC,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Language; 8] = [
        Language::Python,
        Language::Rust,
        Language::Go,
        Language::Java,
        Language::JavaScript,
        Language::TypeScript,
        Language::CSharp,
        Language::ObjectiveC,
    ];

    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Rust => "rust",
            Language::Go => "go",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::CSharp => "csharp",
            Language::ObjectiveC => "objc",
        }
    }

    /// The naming convention registered for this language.
    pub fn convention(&self) -> &'static NamingConvention {
        match self {
            Language::Python => &PYTHON_NAMING,
            Language::Rust => &RUST_NAMING,
            Language::Go => &GO_NAMING,
            Language::Java => &JAVA_NAMING,
            Language::JavaScript => &JAVASCRIPT_NAMING,
            Language::TypeScript => &TYPESCRIPT_NAMING,
            Language::CSharp => &CSHARP_NAMING,
            Language::ObjectiveC => &OBJC_NAMING,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "rust" | "rs" => Ok(Language::Rust),
            "go" | "golang" => Ok(Language::Go),
            "java" => Ok(Language::Java),
            "javascript" | "js" => Ok(Language::JavaScript),
            "typescript" | "ts" => Ok(Language::TypeScript),
            "csharp" | "cs" | "c#" => Ok(Language::CSharp),
            "objc" | "objective-c" | "objectivec" => Ok(Language::ObjectiveC),
            _ => Err(UnsupportedLanguage {
                name: s.to_string(),
            }),
        }
    }
}
