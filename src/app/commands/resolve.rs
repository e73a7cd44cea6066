//! Target resolution without retrieval.

use crate::domain::{LaunchConfig, endpoint};

/// Resolve the retrieval target for the given configuration.
///
/// Pure; performs no network activity.
pub fn execute(config: &LaunchConfig) -> String {
    endpoint::resolve_target(config)
}
