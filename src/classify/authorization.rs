//! # Authorization / Delegated-Token Classifier
//!
//! Pure mapping from a token-subsystem failure to (code, status).
//! Access denial is 403; everything else in this category is 401.

use axum::http::StatusCode;

use crate::errors::{TokenError, TokenErrorKind};
use crate::result::ResultCode;

pub fn classify(err: &TokenError) -> (ResultCode, StatusCode) {
    let code = match err.kind {
        TokenErrorKind::InvalidClient => ResultCode::InvalidClient,
        TokenErrorKind::UnauthorizedClient => ResultCode::UnauthorizedClient,
        TokenErrorKind::InvalidGrant => refine_invalid_grant(&err.message),
        TokenErrorKind::InvalidScope => ResultCode::InvalidScope,
        TokenErrorKind::InvalidToken => ResultCode::InvalidToken,
        TokenErrorKind::InvalidRequest => ResultCode::InvalidRequest,
        TokenErrorKind::RedirectUriMismatch => ResultCode::RedirectUriMismatch,
        TokenErrorKind::UnsupportedGrantType => ResultCode::UnsupportedGrantType,
        TokenErrorKind::UnsupportedResponseType => ResultCode::UnsupportedResponseType,
        TokenErrorKind::UserDeniedAuthorization => ResultCode::AccessDenied,
        TokenErrorKind::Other => ResultCode::InvalidRequest,
    };
    let status = if code == ResultCode::AccessDenied {
        StatusCode::FORBIDDEN
    } else {
        StatusCode::UNAUTHORIZED
    };
    (code, status)
}

/// The token subsystem reports credential, disable, and lock failures
/// as invalid-grant, distinguishable only by the literal message text.
/// This is the single place that wording is matched; a change upstream
/// silently turns these back into plain `INVALID_GRANT`.
pub(crate) fn refine_invalid_grant(message: &str) -> ResultCode {
    match message {
        "Bad credentials" => ResultCode::BadCredentials,
        "User is disabled" => ResultCode::AccountDisabled,
        "User account is locked" => ResultCode::AccountLocked,
        _ => ResultCode::InvalidGrant,
    }
}
