//! Execution environment port definition.

use crate::domain::{AppError, ModulePayload};

/// Port for the host runtime that executes the retrieved module.
///
/// The loader treats the environment as an external collaborator: it hands
/// over the payload bytes and the resulting opaque instance, nothing more.
pub trait ExecutionEnvironment {
    /// Runnable instance produced by `instantiate`.
    type Instance;

    /// Compile and instantiate the payload against the environment's import
    /// surface.
    fn instantiate(&self, payload: &ModulePayload) -> Result<Self::Instance, AppError>;

    /// Invoke the environment's run entry point with the instance.
    fn run(&self, instance: Self::Instance) -> Result<(), AppError>;
}
