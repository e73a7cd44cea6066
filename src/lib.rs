//! modboot: retrieve a versioned WebAssembly module over HTTP and hand it to
//! a host runtime for execution.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


use app::AppContext;
use app::commands::{launch, resolve};
use services::{HttpModuleFetcher, StdoutSurface, WasmtimeEnvironment};

pub use app::commands::launch::LaunchOutcome;
pub use domain::{AppError, LaunchConfig};

/// Retrieve the configured module and hand it to the Wasmtime runtime.
///
/// A rejected retrieval renders the response body verbatim on stdout and
/// returns `LaunchOutcome::Rejected`; an accepted one instantiates and runs
/// the module and returns `LaunchOutcome::Completed`. Transport and runtime
/// faults propagate as errors.
pub fn launch(config: &LaunchConfig) -> Result<LaunchOutcome, AppError> {
    let fetcher = HttpModuleFetcher::new()?;
    let environment = WasmtimeEnvironment::new();
    let surface = StdoutSurface::new();
    let mut ctx = AppContext::new(fetcher, environment, surface);

    launch::execute(&mut ctx, config)
}

/// Resolve the retrieval target for the configuration without fetching.
pub fn resolve(config: &LaunchConfig) -> String {
    resolve::execute(config)
}
