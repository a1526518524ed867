//! # Domain Classifier
//!
//! Pure mapping from a business failure to (code, status). Alerts do
//! not force a status: the dispatcher keeps whatever the caller already
//! placed on the request context (500 unless it set something else).

use axum::http::StatusCode;

use crate::errors::DomainError;
use crate::result::ResultCode;

/// `None` status means the caller's status stands.
pub fn classify(err: &DomainError) -> (ResultCode, Option<StatusCode>) {
    match err {
        DomainError::Alert(_) => (ResultCode::Alert, None),
        DomainError::SignatureDenied(_) => {
            (ResultCode::SignatureDenied, Some(StatusCode::BAD_REQUEST))
        }
        DomainError::Other(_) => (ResultCode::Error, Some(StatusCode::INTERNAL_SERVER_ERROR)),
    }
}
