//! # Authentication Errors
//!
//! Failures raised by the authentication layer while establishing who
//! the caller is. Each variant carries the upstream message verbatim;
//! the auth layer owns keeping that text client-safe.

use thiserror::Error;

/// Authentication-class failure.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No account matches the presented principal.
    #[error("{0}")]
    UsernameNotFound(String),

    /// Credentials did not verify.
    #[error("{0}")]
    BadCredentials(String),

    #[error("{0}")]
    AccountExpired(String),

    #[error("{0}")]
    AccountLocked(String),

    #[error("{0}")]
    AccountDisabled(String),

    #[error("{0}")]
    CredentialsExpired(String),

    /// The request carried no usable authentication at all.
    #[error("{0}")]
    InsufficientAuthentication(String),

    /// Authentication failed for a reason with no dedicated code.
    #[error("{0}")]
    Other(String),
}
