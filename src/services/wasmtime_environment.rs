//! Execution environment backed by Wasmtime.

use wasmtime::{Engine, Instance, Linker, Module, Store};
use wasmtime_wasi::WasiCtxBuilder;
use wasmtime_wasi::preview1::{self, WasiP1Ctx};

use crate::domain::{AppError, ModulePayload};
use crate::ports::ExecutionEnvironment;

/// Export invoked as the module's run entry point.
const RUN_EXPORT: &str = "_start";

/// Host runtime embedding Wasmtime with a WASI preview 1 import surface.
///
/// The engine is shared; each instantiation gets a fresh store and WASI
/// context, and the module inherits the process stdio and environment once
/// it runs.
pub struct WasmtimeEnvironment {
    engine: Engine,
}

/// Instantiated module together with the store that owns it.
pub struct RunnableModule {
    store: Store<WasiP1Ctx>,
    instance: Instance,
}

impl WasmtimeEnvironment {
    /// Create an environment with a default engine configuration.
    pub fn new() -> Self {
        Self { engine: Engine::default() }
    }
}

impl Default for WasmtimeEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

fn environment_error(context: &str, err: wasmtime::Error) -> AppError {
    AppError::Environment { message: format!("{}: {}", context, err) }
}

impl ExecutionEnvironment for WasmtimeEnvironment {
    type Instance = RunnableModule;

    fn instantiate(&self, payload: &ModulePayload) -> Result<RunnableModule, AppError> {
        let module = Module::new(&self.engine, payload.as_bytes())
            .map_err(|e| environment_error("Failed to compile module", e))?;

        let mut linker: Linker<WasiP1Ctx> = Linker::new(&self.engine);
        preview1::add_to_linker_sync(&mut linker, |ctx| ctx)
            .map_err(|e| environment_error("Failed to link WASI imports", e))?;

        let wasi = WasiCtxBuilder::new().inherit_stdio().inherit_env().build_p1();
        let mut store = Store::new(&self.engine, wasi);

        let instance = linker
            .instantiate(&mut store, &module)
            .map_err(|e| environment_error("Failed to instantiate module", e))?;

        Ok(RunnableModule { store, instance })
    }

    fn run(&self, runnable: RunnableModule) -> Result<(), AppError> {
        let RunnableModule { mut store, instance } = runnable;

        let entry = instance
            .get_typed_func::<(), ()>(&mut store, RUN_EXPORT)
            .map_err(|e| environment_error("Module has no run entry point", e))?;
        entry.call(&mut store, ()).map_err(|e| environment_error("Module run failed", e))?;
        Ok(())
    }
}
