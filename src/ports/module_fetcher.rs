//! Module retrieval port definition.

use crate::domain::{AppError, ModulePayload};

/// Result of a retrieval attempt that produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 2xx response; the raw module bytes, fully buffered.
    Payload(ModulePayload),
    /// Non-2xx response; the response body decoded as text, carried verbatim.
    Rejected(String),
}

/// Port for retrieving the module from a resolved target.
///
/// Only an HTTP status outside the 2xx class rejects. Transport-level
/// failures (DNS, connect, body read) are `Err`, never `Rejected`.
pub trait ModuleFetcher {
    /// Perform a single GET against the target.
    fn fetch(&self, target: &str) -> Result<FetchOutcome, AppError>;
}
