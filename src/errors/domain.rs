//! # Domain Errors
//!
//! Application-defined failures raised by business logic behind the
//! gateway. Their messages are written for the caller and are echoed to
//! the client verbatim, so business logic must never put internal
//! detail in them.

use thiserror::Error;

/// Business-logic failure.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// Validation-style failure whose message goes to the caller as-is.
    /// Does not force an HTTP status; the caller's status stands.
    #[error("{0}")]
    Alert(String),

    /// Request signature verification failed.
    #[error("{0}")]
    SignatureDenied(String),

    /// Any other business failure.
    #[error("{0}")]
    Other(String),
}
