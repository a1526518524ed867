//! # Classification Dispatch
//!
//! Top-level router from an arbitrary failure to its outcome. Category
//! precedence is fixed: authentication, delegated token, domain, then
//! the generic catch-all. `resolve` is total: every error value has a
//! defined outcome and classification itself never fails.

pub mod authentication;
pub mod authorization;
pub mod domain;
pub mod generic;

use axum::http::StatusCode;

use crate::context::RequestContext;
use crate::errors::{FrameworkError, GatewayError};
use crate::recorder;
use crate::result::{Outcome, ResponseBody, ResultCode};

/// Resolve one failed request into its outcome.
///
/// Sets the authoritative status on the context, stashes the resolved
/// code, emits the structured log record, and builds the client body.
/// Called exactly once per failed request by the routing layer's global
/// error handler.
pub fn resolve(err: &GatewayError, ctx: &mut RequestContext) -> Outcome {
    // Field-validation failures short-circuit straight to the payload:
    // the message is the first field error's default message, and the
    // normal logging and body-building path is bypassed entirely.
    if let GatewayError::Framework(FrameworkError::InvalidMethodArgument { field_errors }) = err {
        let message = field_errors
            .first()
            .map(|f| f.message.clone())
            .unwrap_or_else(|| ResultCode::Alert.default_message().to_string());
        ctx.set_status(StatusCode::BAD_REQUEST);
        return Outcome {
            code: ResultCode::Alert,
            status: StatusCode::BAD_REQUEST,
            body: ResponseBody::failed(ResultCode::Alert, message),
        };
    }

    let (code, status) = match err {
        GatewayError::Authentication(e) => authentication::classify(e),
        GatewayError::Token(e) => authorization::classify(e),
        GatewayError::Domain(e) => {
            let (code, status) = domain::classify(e);
            // Alerts inherit whatever status the caller already set.
            (code, status.unwrap_or(ctx.status()))
        }
        GatewayError::Framework(e) => generic::classify(e),
    };
    ctx.set_status(status);
    recorder::record(err, code, ctx)
}
