//! Ambient-input adapter for the process boundary.
//!
//! Translates CLI flags, positional arguments, and the `MODBOOT_*`
//! environment values into an explicit `LaunchConfig`. The functions here
//! are pure over their inputs; `main` is the only place that touches the
//! real process environment.

use crate::domain::{AppError, LaunchConfig};

/// Environment variable selecting the development target when its value
/// equals the literal `"true"`.
pub const DEV_MODE_VAR: &str = "MODBOOT_DEV_MODE";

/// Environment variable supplying the module version when no positional
/// argument is given.
pub const MODULE_VERSION_VAR: &str = "MODBOOT_MODULE_VERSION";

/// Build a launch configuration from ambient inputs.
///
/// Dev mode is selected by the flag, or by an ambient value equal to the
/// literal `"true"` (case-sensitive exact match; any other value, including
/// absent, selects production). The version argument takes precedence over
/// the ambient version.
pub fn launch_config_from(
    dev_flag: bool,
    version_arg: Option<String>,
    ambient_dev: Option<&str>,
    ambient_version: Option<String>,
) -> Result<LaunchConfig, AppError> {
    let dev_mode = dev_flag || ambient_dev == Some("true");
    let version = version_arg.or(ambient_version);
    LaunchConfig::new(dev_mode, version)
}
