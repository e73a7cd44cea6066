pub mod endpoint;
pub mod error;
pub mod launch_config;
pub mod payload;

pub use endpoint::{DEV_TARGET, resolve_target};
pub use error::AppError;
pub use launch_config::LaunchConfig;
pub use payload::ModulePayload;
