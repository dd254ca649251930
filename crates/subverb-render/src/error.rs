//! Error types for template rendering.
//!
//! [`RenderError`] is the only error the render crate hands out. It hides
//! the underlying engine's error type so callers match on a stable set of
//! variants.

/// Error type for template compilation and rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template syntax error, unknown filter, or a reference to data the
    /// context does not carry.
    #[error("template error: {0}")]
    Template(String),

    /// No template is registered under the requested name.
    #[error("template not found: {0}")]
    NotFound(String),

    /// The render context could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Any other failure reported by the engine.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::NotFound(err.to_string()),
            ErrorKind::SyntaxError
            | ErrorKind::BadEscape
            | ErrorKind::UndefinedError
            | ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownMethod
            | ErrorKind::MissingArgument
            | ErrorKind::TooManyArguments
            | ErrorKind::InvalidOperation => RenderError::Template(err.to_string()),
            ErrorKind::BadSerialization => RenderError::Serialization(err.to_string()),
            _ => RenderError::Other(err.to_string()),
        }
    }
}
