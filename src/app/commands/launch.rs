//! Fetch-then-run orchestration.

use crate::app::AppContext;
use crate::domain::{AppError, LaunchConfig, endpoint};
use crate::ports::{ExecutionEnvironment, FailureSurface, FetchOutcome, ModuleFetcher};

/// Terminal outcome of a launch.
///
/// Both variants are final; a launch never returns to a pending state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The retrieval was rejected; the response body was rendered and the
    /// module was never executed.
    Rejected,
    /// The module was instantiated and run.
    Completed,
}

/// Resolve the target, retrieve the module once, and route the result.
///
/// A rejected retrieval renders the body on the failure surface and stops.
/// An accepted retrieval hands the exact fetched bytes to the execution
/// environment, instantiating and running exactly once. Transport and
/// environment faults propagate to the caller untouched.
pub fn execute<F, E, S>(
    ctx: &mut AppContext<F, E, S>,
    config: &LaunchConfig,
) -> Result<LaunchOutcome, AppError>
where
    F: ModuleFetcher,
    E: ExecutionEnvironment,
    S: FailureSurface,
{
    let target = endpoint::resolve_target(config);

    match ctx.fetcher().fetch(&target)? {
        FetchOutcome::Rejected(body) => {
            ctx.surface_mut().render(&body)?;
            Ok(LaunchOutcome::Rejected)
        }
        FetchOutcome::Payload(payload) => {
            let instance = ctx.environment().instantiate(&payload)?;
            ctx.environment().run(instance)?;
            Ok(LaunchOutcome::Completed)
        }
    }
}
