//! # Response Body
//!
//! The uniform client-facing payload for a failed request, and the final
//! classification outcome handed back to the routing layer. The body is
//! built once and immutable after construction; the HTTP status lives on
//! the outcome, not in the body, so clients branch on the numeric code
//! while transports branch on the status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use super::code::ResultCode;

/// Wire payload returned to the caller on failure.
///
/// `path` is absent in the field-validation short-circuit, where the
/// payload is built without request context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseBody {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Epoch milliseconds at construction time.
    pub timestamp: i64,
}

impl ResponseBody {
    /// Build a failure payload. An empty message falls back to the
    /// code's default message.
    pub fn failed(code: ResultCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            code.default_message().to_string()
        } else {
            message
        };
        Self {
            code: code.code(),
            message,
            path: None,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Attach the request path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Final classification of one failed request.
///
/// Produced once per failure, never shared across requests.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub code: ResultCode,
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
