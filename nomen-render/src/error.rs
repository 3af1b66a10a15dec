use miette::Diagnostic;
use nomen_core::InvalidName;
use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A language tag with no registered naming convention.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("unsupported language '{name}'")]
#[diagnostic(
    code(nomen::unsupported_language),
    help("expected one of: python, rust, go, java, javascript, typescript, csharp, objc")
)]
pub struct UnsupportedLanguage {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidName(#[from] InvalidName),

    #[error(transparent)]
    #[diagnostic(transparent)]
    UnsupportedLanguage(#[from] UnsupportedLanguage),
}
