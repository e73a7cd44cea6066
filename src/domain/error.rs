use std::io;

use thiserror::Error;

/// Library-wide error type for modboot operations.
///
/// Only a non-2xx retrieval status is recovered by the loader itself (as a
/// `FetchOutcome::Rejected`, not an error). Every variant here is an
/// unhandled fault that propagates to the process boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Production target selected without a module version.
    #[error("No module version given. Pass VERSION or set MODBOOT_MODULE_VERSION.")]
    VersionMissing,

    /// Transport-level retrieval failure (DNS, connect, body read).
    #[error("Module retrieval failed: {message}")]
    Transport { message: String },

    /// Execution environment failure (compile, link, instantiate, or run).
    #[error("Execution environment failure: {message}")]
    Environment { message: String },
}
