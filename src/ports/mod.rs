mod execution_environment;
mod failure_surface;
mod module_fetcher;

pub use execution_environment::ExecutionEnvironment;
pub use failure_surface::FailureSurface;
pub use module_fetcher::{FetchOutcome, ModuleFetcher};
