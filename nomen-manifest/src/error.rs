use std::{ops::Range, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for nomen-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "nomen.toml");
/// ctx.unsupported_language_error("cobol", 24..31);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an unsupported language error.
    pub fn unsupported_language_error(&self, name: impl Into<String>, span: Range<usize>) -> Box<Error> {
        Box::new(Error::UnsupportedLanguage {
            src: self.named_source(),
            span: span.into(),
            name: name.into(),
        })
    }

    /// Create a duplicate language error.
    pub fn duplicate_language_error(
        &self,
        name: impl Into<String>,
        first_span: Range<usize>,
        second_span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateLanguage {
            src: self.named_source(),
            first_span: first_span.into(),
            second_span: second_span.into(),
            name: name.into(),
        })
    }

    /// Create an invalid acronym error.
    pub fn invalid_acronym_error(
        &self,
        acronym: impl Into<String>,
        reason: impl Into<String>,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::InvalidAcronym {
            src: self.named_source(),
            span: span.into(),
            acronym: acronym.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(nomen::io_error),
        help("check that the file exists and is readable, or pass another path with --config")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse nomen.toml")]
    #[diagnostic(code(nomen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported language '{name}'")]
    #[diagnostic(
        code(nomen::unsupported_language),
        help("expected one of: python, rust, go, java, javascript, typescript, csharp, objc")
    )]
    UnsupportedLanguage {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown language")]
        span: SourceSpan,
        name: String,
    },

    #[error("language '{name}' is listed twice")]
    #[diagnostic(code(nomen::duplicate_language), help("remove one of the entries"))]
    DuplicateLanguage {
        #[source_code]
        src: NamedSource<String>,
        #[label("first listed here")]
        first_span: SourceSpan,
        #[label("listed again here")]
        second_span: SourceSpan,
        name: String,
    },

    #[error("invalid acronym '{acronym}'")]
    #[diagnostic(code(nomen::invalid_acronym), help("{reason}"))]
    InvalidAcronym {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a usable acronym")]
        span: SourceSpan,
        acronym: String,
        reason: String,
    },
}
