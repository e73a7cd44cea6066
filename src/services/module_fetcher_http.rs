//! Module retrieval over HTTP using reqwest.

use reqwest::blocking::Client;

use crate::domain::{AppError, ModulePayload};
use crate::ports::{FetchOutcome, ModuleFetcher};

/// HTTP transport for module retrieval.
///
/// Issues a single GET with no custom headers and no request timeout; only
/// the transport's own defaults apply. The whole body is buffered before
/// use, as bytes on acceptance or as text on rejection.
#[derive(Debug, Clone)]
pub struct HttpModuleFetcher {
    client: Client,
}

impl HttpModuleFetcher {
    /// Create a fetcher.
    pub fn new() -> Result<Self, AppError> {
        // The blocking client ships a 30s default; the retrieval contract
        // has no timeout at all.
        let client = Client::builder().timeout(None).build().map_err(|e| {
            AppError::Transport { message: format!("Failed to create HTTP client: {}", e) }
        })?;

        Ok(Self { client })
    }
}

impl ModuleFetcher for HttpModuleFetcher {
    fn fetch(&self, target: &str) -> Result<FetchOutcome, AppError> {
        let response = self.client.get(target).send().map_err(|e| AppError::Transport {
            message: format!("GET {} failed: {}", target, e),
        })?;

        if !response.status().is_success() {
            let body = response.text().map_err(|e| AppError::Transport {
                message: format!("Failed to read rejection body: {}", e),
            })?;
            return Ok(FetchOutcome::Rejected(body));
        }

        let bytes = response.bytes().map_err(|e| AppError::Transport {
            message: format!("Failed to read module body: {}", e),
        })?;
        Ok(FetchOutcome::Payload(ModulePayload::new(bytes.to_vec())))
    }
}
