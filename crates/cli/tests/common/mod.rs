//! Shared test utilities for envdata integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Test variables use the `ENVDATA_IT_` prefix and are set per command.

use assert_cmd::Command;

/// Returns a hermetic `envdata` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Output and logging settings from the host do not leak in.
pub fn envdata_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envdata");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("ENVDATA_OUTPUT").env_remove("RUST_LOG");

    cmd
}
