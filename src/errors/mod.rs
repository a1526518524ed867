//! # Gateway Error Taxonomy
//!
//! A closed partition of everything that can fail while a request is in
//! flight: authentication, delegated token, domain, framework. Each
//! collaborator tags its failures at the point they occur, so dispatch
//! is a match over a finite tag set rather than downcasting. Framework
//! is the catch-all; every error lands in exactly one category.

pub mod auth;
pub mod domain;
pub mod framework;
pub mod token;

pub use auth::AuthError;
pub use domain::DomainError;
pub use framework::{FieldError, FrameworkError};
pub use token::{TokenError, TokenErrorKind};

use thiserror::Error;

/// Any failure raised during request handling, tagged by category.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// Authentication infrastructure rejected the caller.
    #[error(transparent)]
    Authentication(#[from] AuthError),

    /// Token issuance, validation, or grant processing failed.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Business logic raised an application-defined failure.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Everything else: request shape, routing, unclassified.
    #[error(transparent)]
    Framework(#[from] FrameworkError),
}

impl GatewayError {
    /// Absorb an error no collaborator tagged. Keeps classification
    /// total: anything convertible to a display string has an outcome.
    pub fn unhandled(err: impl std::fmt::Display) -> Self {
        Self::Framework(FrameworkError::Unhandled(err.to_string()))
    }
}
