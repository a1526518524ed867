//! # Request Context
//!
//! Request-scoped state threaded through classification: method, path,
//! the settable response status, and a write-once slot for the resolved
//! result code. Created at request entry, dropped at completion, never
//! shared across requests, so no locking is involved.

use axum::http::StatusCode;
use uuid::Uuid;

use crate::result::ResultCode;

/// Per-request context owned by the request-handling pipeline.
#[derive(Debug, Clone)]
pub struct RequestContext {
    id: Uuid,
    method: String,
    path: String,
    status: StatusCode,
    code: Option<ResultCode>,
}

impl RequestContext {
    /// Create a context for one inbound request. The status slot starts
    /// at 500 so an untouched failure renders as internal error.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            method: method.into(),
            path: path.into(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: None,
        }
    }

    /// Correlation id for log lines.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Status the transport layer will send.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    /// Stash the resolved code for downstream logging middleware.
    /// Write-once: the first write sticks, later writes are ignored.
    pub fn record_code(&mut self, code: ResultCode) {
        if self.code.is_none() {
            self.code = Some(code);
        }
    }

    /// Code resolved for this request, if classification has run.
    pub fn code(&self) -> Option<ResultCode> {
        self.code
    }
}
