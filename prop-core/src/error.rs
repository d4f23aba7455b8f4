use thiserror::Error;

/// Result type for attribute template builders.
pub type Result<T> = std::result::Result<T, BuildError>;

/// A precondition violated while building an attribute template.
///
/// Builders expose `try_*` methods returning this error; their plain
/// counterparts panic with the same message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("the first integer must be less than the third (got {left} and {right})")]
    RectHorizontal { left: i64, right: i64 },

    #[error("the second integer must be less than the fourth (got {top} and {bottom})")]
    RectVertical { top: i64, bottom: i64 },

    #[error("expected a digit but saw '{found}' instead")]
    InvalidRadius { found: char },

    #[error("expected a digit but the radius is empty")]
    EmptyRadius,

    #[error("a polyline must have at least six comma-separated integers (got {count} points)")]
    TooFewPoints { count: usize },

    #[error("unknown dimension '{value}', expected a number followed by dpi or dpcm")]
    UnknownDimension { value: String },

    #[error(
        "bad value '{value}' for attribute srcset on element source: must contain one or more image candidate strings"
    )]
    MissingDescriptor { value: String },
}

impl BuildError {
    /// Stable short code, used when reporting the error in diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RectHorizontal { .. } | Self::RectVertical { .. } => "rect_order",
            Self::InvalidRadius { .. } | Self::EmptyRadius => "invalid_radius",
            Self::TooFewPoints { .. } => "too_few_points",
            Self::UnknownDimension { .. } => "unknown_dimension",
            Self::MissingDescriptor { .. } => "missing_descriptor",
        }
    }

    /// Panic with this error's message.
    ///
    /// Every non-`try_` finalizer ends here, so both paths report identical text.
    #[track_caller]
    pub fn fail(self) -> ! {
        panic!("{}", self)
    }
}
