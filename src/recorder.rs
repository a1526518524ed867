//! # Outcome Recorder
//!
//! One structured log event per failed request, plus the context stash
//! that lets downstream logging middleware read the resolved code
//! without re-classifying. Domain messages are written for the caller
//! and logged as-is; every other category logs its debug form so the
//! original failure is preserved in the log but never on the wire.

use crate::context::RequestContext;
use crate::errors::GatewayError;
use crate::result::{Outcome, ResponseBody, ResultCode};

/// Record the classification and build the final outcome.
///
/// Expects the dispatcher to have placed the authoritative status on
/// the context already.
pub fn record(err: &GatewayError, code: ResultCode, ctx: &mut RequestContext) -> Outcome {
    ctx.record_code(code);

    let message = err.to_string();
    let detail = match err {
        GatewayError::Domain(e) => e.to_string(),
        _ => format!("{err:?}"),
    };
    tracing::error!(
        request_id = %ctx.id(),
        method = %ctx.method(),
        path = %ctx.path(),
        code = code.code(),
        message = %message,
        detail = %detail,
        "request failed"
    );

    let code = ctx.code().unwrap_or(ResultCode::Error);
    let body = ResponseBody::failed(code, message).with_path(ctx.path());
    Outcome {
        code,
        status: ctx.status(),
        body,
    }
}
