//! # Framework Errors
//!
//! The generic category: request-shape and routing failures plus the
//! `Unhandled` catch-all that makes the taxonomy total. The routing
//! layer constructs these; anything it cannot name goes through
//! `GatewayError::unhandled`.

use thiserror::Error;

/// One rejected field from request-payload validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    /// Default message configured on the violated constraint.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Generic-class failure.
#[derive(Debug, Clone, Error)]
pub enum FrameworkError {
    /// Request body could not be parsed.
    #[error("Malformed request body: {0}")]
    UnreadableBody(String),

    /// A parameter could not be converted to its declared type.
    #[error("Type mismatch for parameter '{name}'")]
    TypeMismatch { name: String },

    /// A required parameter was absent.
    #[error("Missing required parameter '{name}'")]
    MissingParameter { name: String },

    /// No route matches the request.
    #[error("No route for {method} {path}")]
    NoRoute { method: String, path: String },

    /// The route exists but not for this method.
    #[error("Method {method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// None of the acceptable media types can be produced.
    #[error("Media type not acceptable: {0}")]
    MediaTypeNotAcceptable(String),

    /// Payload validation rejected one or more fields.
    #[error("Validation failed on {} field(s)", .field_errors.len())]
    InvalidMethodArgument { field_errors: Vec<FieldError> },

    /// An argument was structurally valid but semantically wrong.
    #[error("{0}")]
    IllegalArgument(String),

    /// The caller is authenticated but not permitted.
    #[error("{0}")]
    AccessDenied(String),

    /// Anything nothing else claimed.
    #[error("{0}")]
    Unhandled(String),
}
