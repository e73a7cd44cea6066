use crate::ports::{ExecutionEnvironment, FailureSurface, ModuleFetcher};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ModuleFetcher, E: ExecutionEnvironment, S: FailureSurface> {
    fetcher: F,
    environment: E,
    surface: S,
}

impl<F: ModuleFetcher, E: ExecutionEnvironment, S: FailureSurface> AppContext<F, E, S> {
    /// Create a new application context.
    pub fn new(fetcher: F, environment: E, surface: S) -> Self {
        Self { fetcher, environment, surface }
    }

    /// Get a reference to the module fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Get a reference to the execution environment.
    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Get a mutable reference to the failure surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
