//! # Delegated-Token Errors
//!
//! Failures surfaced by the OAuth2 token subsystem: issuance,
//! validation, and grant processing. The literal upstream message is
//! carried alongside the kind because invalid-grant failures are only
//! distinguishable by that text (see `classify::authorization`).

use std::fmt;

use thiserror::Error;

/// Sub-kind of a delegated-token failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenErrorKind {
    InvalidClient,
    UnauthorizedClient,
    InvalidGrant,
    InvalidScope,
    InvalidToken,
    InvalidRequest,
    RedirectUriMismatch,
    UnsupportedGrantType,
    UnsupportedResponseType,
    /// The resource owner refused the authorization request.
    UserDeniedAuthorization,
    /// Token failure with no dedicated sub-kind.
    Other,
}

impl fmt::Display for TokenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenErrorKind::InvalidClient => "invalid_client",
            TokenErrorKind::UnauthorizedClient => "unauthorized_client",
            TokenErrorKind::InvalidGrant => "invalid_grant",
            TokenErrorKind::InvalidScope => "invalid_scope",
            TokenErrorKind::InvalidToken => "invalid_token",
            TokenErrorKind::InvalidRequest => "invalid_request",
            TokenErrorKind::RedirectUriMismatch => "redirect_uri_mismatch",
            TokenErrorKind::UnsupportedGrantType => "unsupported_grant_type",
            TokenErrorKind::UnsupportedResponseType => "unsupported_response_type",
            TokenErrorKind::UserDeniedAuthorization => "access_denied",
            TokenErrorKind::Other => "error",
        };
        f.write_str(name)
    }
}

/// Delegated-token failure as reported by the token subsystem.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TokenError {
    pub kind: TokenErrorKind,
    /// Upstream message, verbatim.
    pub message: String,
}

impl TokenError {
    pub fn new(kind: TokenErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for the sub-kind that needs message inspection.
    pub fn invalid_grant(message: impl Into<String>) -> Self {
        Self::new(TokenErrorKind::InvalidGrant, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_upstream_message() {
        let err = TokenError::invalid_grant("Bad credentials");
        assert_eq!(err.to_string(), "Bad credentials");
        assert_eq!(err.kind, TokenErrorKind::InvalidGrant);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenErrorKind::RedirectUriMismatch.to_string(), "redirect_uri_mismatch");
        assert_eq!(TokenErrorKind::UserDeniedAuthorization.to_string(), "access_denied");
    }
}
