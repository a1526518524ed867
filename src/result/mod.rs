//! # Result Vocabulary
//!
//! The closed registry of result codes and the uniform client payload
//! built from them. Codes are compiled in; nothing here is configurable
//! at runtime.

pub mod body;
pub mod code;

pub use body::{Outcome, ResponseBody};
pub use code::ResultCode;
