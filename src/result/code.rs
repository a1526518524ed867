//! # Result Code Registry
//!
//! The closed vocabulary every classifier emits into. Each member pairs a
//! stable numeric code with a default message. Numeric codes are grouped
//! by category: 1xxx authentication, 2xxx delegated token, 3xxx domain,
//! 4xxx request shape, 5000 catch-all. The numeric code is for
//! programmatic client-side branching; it is not an HTTP status.

use std::fmt;

/// Machine-readable identifier for a failure category.
///
/// Fixed at compile time. Every code maps to exactly one HTTP status
/// policy inside its category (see the classifiers in `classify`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    // Authentication
    UsernameNotFound,
    BadCredentials,
    AccountExpired,
    AccountLocked,
    AccountDisabled,
    CredentialsExpired,
    Unauthorized,

    // Delegated token
    InvalidClient,
    UnauthorizedClient,
    InvalidGrant,
    InvalidScope,
    InvalidToken,
    InvalidRequest,
    RedirectUriMismatch,
    UnsupportedGrantType,
    UnsupportedResponseType,
    AccessDenied,

    // Domain
    Alert,
    SignatureDenied,

    // Request shape
    BadRequest,
    NotFound,
    MethodNotAllowed,
    MediaTypeNotAcceptable,

    // Catch-all
    Error,
}

impl ResultCode {
    /// Every member of the registry, for coverage checks.
    pub const ALL: [ResultCode; 24] = [
        ResultCode::UsernameNotFound,
        ResultCode::BadCredentials,
        ResultCode::AccountExpired,
        ResultCode::AccountLocked,
        ResultCode::AccountDisabled,
        ResultCode::CredentialsExpired,
        ResultCode::Unauthorized,
        ResultCode::InvalidClient,
        ResultCode::UnauthorizedClient,
        ResultCode::InvalidGrant,
        ResultCode::InvalidScope,
        ResultCode::InvalidToken,
        ResultCode::InvalidRequest,
        ResultCode::RedirectUriMismatch,
        ResultCode::UnsupportedGrantType,
        ResultCode::UnsupportedResponseType,
        ResultCode::AccessDenied,
        ResultCode::Alert,
        ResultCode::SignatureDenied,
        ResultCode::BadRequest,
        ResultCode::NotFound,
        ResultCode::MethodNotAllowed,
        ResultCode::MediaTypeNotAcceptable,
        ResultCode::Error,
    ];

    /// Stable numeric code carried in the response body.
    pub fn code(&self) -> u16 {
        match self {
            ResultCode::UsernameNotFound => 1001,
            ResultCode::BadCredentials => 1002,
            ResultCode::AccountExpired => 1003,
            ResultCode::AccountLocked => 1004,
            ResultCode::AccountDisabled => 1005,
            ResultCode::CredentialsExpired => 1006,
            ResultCode::Unauthorized => 1010,
            ResultCode::InvalidClient => 2001,
            ResultCode::UnauthorizedClient => 2002,
            ResultCode::InvalidGrant => 2003,
            ResultCode::InvalidScope => 2004,
            ResultCode::InvalidToken => 2005,
            ResultCode::InvalidRequest => 2006,
            ResultCode::RedirectUriMismatch => 2007,
            ResultCode::UnsupportedGrantType => 2008,
            ResultCode::UnsupportedResponseType => 2009,
            ResultCode::AccessDenied => 2010,
            ResultCode::Alert => 3001,
            ResultCode::SignatureDenied => 3002,
            ResultCode::BadRequest => 4000,
            ResultCode::NotFound => 4004,
            ResultCode::MethodNotAllowed => 4005,
            ResultCode::MediaTypeNotAcceptable => 4006,
            ResultCode::Error => 5000,
        }
    }

    /// Default message, used when the originating error carries none.
    pub fn default_message(&self) -> &'static str {
        match self {
            ResultCode::UsernameNotFound => "Username not found",
            ResultCode::BadCredentials => "Bad credentials",
            ResultCode::AccountExpired => "Account expired",
            ResultCode::AccountLocked => "Account locked",
            ResultCode::AccountDisabled => "Account disabled",
            ResultCode::CredentialsExpired => "Credentials expired",
            ResultCode::Unauthorized => "Unauthorized",
            ResultCode::InvalidClient => "Invalid client",
            ResultCode::UnauthorizedClient => "Unauthorized client",
            ResultCode::InvalidGrant => "Invalid grant",
            ResultCode::InvalidScope => "Invalid scope",
            ResultCode::InvalidToken => "Invalid token",
            ResultCode::InvalidRequest => "Invalid request",
            ResultCode::RedirectUriMismatch => "Redirect URI mismatch",
            ResultCode::UnsupportedGrantType => "Unsupported grant type",
            ResultCode::UnsupportedResponseType => "Unsupported response type",
            ResultCode::AccessDenied => "Access denied",
            ResultCode::Alert => "Invalid parameter",
            ResultCode::SignatureDenied => "Signature denied",
            ResultCode::BadRequest => "Bad request",
            ResultCode::NotFound => "Not found",
            ResultCode::MethodNotAllowed => "Method not allowed",
            ResultCode::MediaTypeNotAcceptable => "Media type not acceptable",
            ResultCode::Error => "Internal error",
        }
    }

    /// Returns string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultCode::UsernameNotFound => "USERNAME_NOT_FOUND",
            ResultCode::BadCredentials => "BAD_CREDENTIALS",
            ResultCode::AccountExpired => "ACCOUNT_EXPIRED",
            ResultCode::AccountLocked => "ACCOUNT_LOCKED",
            ResultCode::AccountDisabled => "ACCOUNT_DISABLED",
            ResultCode::CredentialsExpired => "CREDENTIALS_EXPIRED",
            ResultCode::Unauthorized => "UNAUTHORIZED",
            ResultCode::InvalidClient => "INVALID_CLIENT",
            ResultCode::UnauthorizedClient => "UNAUTHORIZED_CLIENT",
            ResultCode::InvalidGrant => "INVALID_GRANT",
            ResultCode::InvalidScope => "INVALID_SCOPE",
            ResultCode::InvalidToken => "INVALID_TOKEN",
            ResultCode::InvalidRequest => "INVALID_REQUEST",
            ResultCode::RedirectUriMismatch => "REDIRECT_URI_MISMATCH",
            ResultCode::UnsupportedGrantType => "UNSUPPORTED_GRANT_TYPE",
            ResultCode::UnsupportedResponseType => "UNSUPPORTED_RESPONSE_TYPE",
            ResultCode::AccessDenied => "ACCESS_DENIED",
            ResultCode::Alert => "ALERT",
            ResultCode::SignatureDenied => "SIGNATURE_DENIED",
            ResultCode::BadRequest => "BAD_REQUEST",
            ResultCode::NotFound => "NOT_FOUND",
            ResultCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ResultCode::MediaTypeNotAcceptable => "MEDIA_TYPE_NOT_ACCEPTABLE",
            ResultCode::Error => "ERROR",
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
