//! Retrieval target resolution.

use crate::domain::LaunchConfig;

/// Development retrieval target, served by a local module build.
pub const DEV_TARGET: &str = "http://localhost:8080/main.wasm";

/// Resolve the retrieval target for a launch.
///
/// Exactly two forms exist: the fixed development target, and the production
/// target with the version identifier interpolated into the path verbatim.
/// No percent-encoding is applied to the version. In dev mode the version is
/// ignored entirely.
pub fn resolve_target(config: &LaunchConfig) -> String {
    if config.dev_mode() {
        return DEV_TARGET.to_string();
    }
    // `LaunchConfig::new` guarantees a version when production is selected.
    let version = config.version().unwrap_or_default();
    format!("https://storage.googleapis.com/sourcegraph-resource-estimator/main_{version}.wasm")
}
