mod module_fetcher_http;
mod stdout_surface;
mod wasmtime_environment;

pub use module_fetcher_http::HttpModuleFetcher;
pub use stdout_surface::StdoutSurface;
pub use wasmtime_environment::{RunnableModule, WasmtimeEnvironment};
