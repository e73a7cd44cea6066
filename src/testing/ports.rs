//! Shared fakes for exercising the launch orchestration.

use std::sync::{Arc, Mutex};

use crate::domain::{AppError, ModulePayload};
use crate::ports::{ExecutionEnvironment, FailureSurface, FetchOutcome, ModuleFetcher};

enum FetchScript {
    Payload(Vec<u8>),
    Rejected(String),
    TransportFailure(String),
}

/// Fetcher returning a scripted outcome and recording requested targets.
pub struct ScriptedFetcher {
    script: FetchScript,
    requested_targets: Arc<Mutex<Vec<String>>>,
}

impl ScriptedFetcher {
    /// Accept every fetch with the given payload bytes.
    pub fn payload(bytes: &[u8]) -> Self {
        Self::with_script(FetchScript::Payload(bytes.to_vec()))
    }

    /// Reject every fetch with the given body.
    pub fn rejected(body: &str) -> Self {
        Self::with_script(FetchScript::Rejected(body.to_string()))
    }

    /// Fail every fetch with a transport error.
    pub fn transport_failure(message: &str) -> Self {
        Self::with_script(FetchScript::TransportFailure(message.to_string()))
    }

    fn with_script(script: FetchScript) -> Self {
        Self { script, requested_targets: Arc::new(Mutex::new(vec![])) }
    }

    /// Handle on the recorded targets, usable after the fetcher is moved
    /// into a context.
    pub fn requested_targets(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.requested_targets)
    }
}

impl ModuleFetcher for ScriptedFetcher {
    fn fetch(&self, target: &str) -> Result<FetchOutcome, AppError> {
        self.requested_targets.lock().unwrap().push(target.to_string());
        match &self.script {
            FetchScript::Payload(bytes) => {
                Ok(FetchOutcome::Payload(ModulePayload::new(bytes.clone())))
            }
            FetchScript::Rejected(body) => Ok(FetchOutcome::Rejected(body.clone())),
            FetchScript::TransportFailure(message) => {
                Err(AppError::Transport { message: message.clone() })
            }
        }
    }
}

/// Execution environment recording every instantiation and run.
///
/// Clones share their recordings, so a copy kept outside the context can
/// observe what the context's copy saw. Instances carry the payload bytes
/// through to `run` so round-tripping can be asserted.
#[derive(Clone, Default)]
pub struct RecordingEnvironment {
    instantiated: Arc<Mutex<Vec<Vec<u8>>>>,
    ran: Arc<Mutex<Vec<Vec<u8>>>>,
    fail_instantiate: bool,
    fail_run: bool,
}

impl RecordingEnvironment {
    /// Environment that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment whose `instantiate` always faults.
    pub fn failing_instantiate() -> Self {
        Self { fail_instantiate: true, ..Self::default() }
    }

    /// Environment whose `run` always faults.
    pub fn failing_run() -> Self {
        Self { fail_run: true, ..Self::default() }
    }

    /// Payload bytes passed to `instantiate`, in order.
    pub fn instantiated_payloads(&self) -> Vec<Vec<u8>> {
        self.instantiated.lock().unwrap().clone()
    }

    /// Payload bytes carried by instances passed to `run`, in order.
    pub fn ran_payloads(&self) -> Vec<Vec<u8>> {
        self.ran.lock().unwrap().clone()
    }

    /// Number of `run` invocations.
    pub fn run_count(&self) -> usize {
        self.ran.lock().unwrap().len()
    }
}

impl ExecutionEnvironment for RecordingEnvironment {
    type Instance = Vec<u8>;

    fn instantiate(&self, payload: &ModulePayload) -> Result<Vec<u8>, AppError> {
        if self.fail_instantiate {
            return Err(AppError::Environment { message: "instantiate refused".to_string() });
        }
        let bytes = payload.as_bytes().to_vec();
        self.instantiated.lock().unwrap().push(bytes.clone());
        Ok(bytes)
    }

    fn run(&self, instance: Vec<u8>) -> Result<(), AppError> {
        if self.fail_run {
            return Err(AppError::Environment { message: "run refused".to_string() });
        }
        self.ran.lock().unwrap().push(instance);
        Ok(())
    }
}

/// Failure surface collecting rendered bodies in memory.
#[derive(Clone, Default)]
pub struct BufferSurface {
    rendered: Arc<Mutex<Vec<String>>>,
}

impl BufferSurface {
    /// Empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bodies rendered so far, in order.
    pub fn rendered_bodies(&self) -> Vec<String> {
        self.rendered.lock().unwrap().clone()
    }
}

impl FailureSurface for BufferSurface {
    fn render(&mut self, body: &str) -> Result<(), AppError> {
        self.rendered.lock().unwrap().push(body.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_surface_renders_identically_twice() {
        let mut surface = BufferSurface::new();
        surface.render("not found").unwrap();
        surface.render("not found").unwrap();

        let bodies = surface.rendered_bodies();
        assert_eq!(bodies.len(), 2);
        assert_eq!(bodies[0], bodies[1]);
    }
}
