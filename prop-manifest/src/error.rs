use std::path::PathBuf;

use htmlprop_core::BuildError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename of the manifest being reported on.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
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

    /// Create a validation error, with a span when one was found.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn invalid_tag_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidTag {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Wrap a builder failure of the property at `index`.
    pub fn build_error(
        &self,
        index: usize,
        kind: impl Into<String>,
        source: BuildError,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Build {
            src: self.named_source(),
            span,
            index,
            kind: kind.into(),
            reason: source.to_string(),
            code: source.code(),
            source,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest path with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse prop.toml")]
    #[diagnostic(code(prop::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(prop::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid tag name '{name}'")]
    #[diagnostic(
        code(prop::invalid_tag),
        help("{reason}. Use only ASCII letters, digits, and dashes.")
    )]
    InvalidTag {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid tag")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("{kind} property #{index} cannot be built")]
    #[diagnostic(code(prop::build_error), help("builder check '{code}' failed"))]
    Build {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        index: usize,
        kind: String,
        reason: String,
        code: &'static str,
        #[source]
        source: BuildError,
    },
}
