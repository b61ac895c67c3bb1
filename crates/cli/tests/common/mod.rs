//! Shared test utilities for radstack integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write backing config files with a chosen permission mode.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Settings variables from the host never reach the command.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns a hermetic `radstack` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `RADSTACK_CONFIG_PATH` and `RADSTACK_FILE_ONLY` are cleared.
pub fn radstack_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("radstack");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("RADSTACK_CONFIG_PATH")
        .env_remove("RADSTACK_FILE_ONLY")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic command pointed at the config file at `path`.
pub fn radstack_cmd_with_config(path: &Path) -> Command {
    let mut cmd = radstack_cmd();
    cmd.env("RADSTACK_CONFIG_PATH", path);
    cmd
}

/// Write `content` to `config` inside `dir` with the given mode.
#[cfg(unix)]
pub fn write_config(dir: &Path, content: &str, mode: u32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("config");
    fs::write(&path, content).expect("Failed to write config file");
    fs::set_permissions(&path, fs::Permissions::from_mode(mode))
        .expect("Failed to set config file mode");
    path
}

#[cfg(not(unix))]
pub fn write_config(dir: &Path, content: &str, _mode: u32) -> PathBuf {
    let path = dir.join("config");
    fs::write(&path, content).expect("Failed to write config file");
    path
}

/// Write `content` with mode 0600.
pub fn write_secure_config(dir: &Path, content: &str) -> PathBuf {
    write_config(dir, content, 0o600)
}
