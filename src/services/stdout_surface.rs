//! Failure surface writing to process stdout.

use std::io::{self, Write};

use crate::domain::AppError;
use crate::ports::FailureSurface;

/// Renders rejection bodies verbatim on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSurface;

impl StdoutSurface {
    /// Create a stdout surface.
    pub fn new() -> Self {
        Self
    }
}

impl FailureSurface for StdoutSurface {
    fn render(&mut self, body: &str) -> Result<(), AppError> {
        let mut stdout = io::stdout().lock();
        // Exact bytes only; no prefix and no trailing newline.
        stdout.write_all(body.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
