//! skygate - Unified error classification for the SkyGate API gateway
//!
//! Every failure raised while a request is in flight (authentication,
//! delegated-token, domain, or framework) is resolved here into a stable
//! result code, an HTTP status, a client-safe message, and one structured
//! log record. Routing, token issuance, and business logic live in other
//! crates; this one only classifies and renders the failure outcome.

pub mod classify;
pub mod context;
pub mod errors;
pub mod recorder;
pub mod result;

pub use classify::resolve;
pub use context::RequestContext;
pub use errors::GatewayError;
pub use result::{Outcome, ResponseBody, ResultCode};
