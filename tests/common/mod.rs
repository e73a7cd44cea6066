//! Shared testing utilities for modboot CLI tests.

use assert_cmd::Command;

/// Environment variables the loader reads; scrubbed so the surrounding
/// environment cannot leak into a test.
const AMBIENT_VARS: &[&str] = &["MODBOOT_DEV_MODE", "MODBOOT_MODULE_VERSION"];

/// Build a command for invoking the compiled `modboot` binary with a clean
/// ambient environment.
#[allow(dead_code)]
pub fn modboot() -> Command {
    let mut cmd = Command::cargo_bin("modboot").expect("Failed to locate modboot binary");
    for var in AMBIENT_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Development target the binary resolves in dev mode.
#[allow(dead_code)]
pub const DEV_TARGET: &str = "http://localhost:8080/main.wasm";
