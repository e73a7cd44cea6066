//! Launch configuration domain model.

use crate::domain::AppError;

/// Explicit configuration for a single launch.
///
/// Constructed once at the process boundary and never mutated afterwards.
/// The version identifier must be present when the production target is
/// selected; its content is never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    dev_mode: bool,
    version: Option<String>,
}

impl LaunchConfig {
    /// Create a launch configuration, enforcing the version-presence
    /// invariant for the production target.
    pub fn new(dev_mode: bool, version: Option<String>) -> Result<Self, AppError> {
        if !dev_mode && version.is_none() {
            return Err(AppError::VersionMissing);
        }
        Ok(Self { dev_mode, version })
    }

    /// Whether the development target is selected.
    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    /// Module version identifier, if one was supplied.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}
