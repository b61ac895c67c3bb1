//! Tests for the layered resolver.
//!
//! Responsibilities:
//! - Test lookup precedence between cache, environment, and backing file.
//! - Test cache behavior, file-only mode, and error surfacing.
//! - Test builder settings and `.env` loading.
//!
//! Invariants:
//! - Tests use `serial_test` and `temp_env` to prevent environment variable pollution.
//! - Each test builds its own resolver against its own temporary backing file.

use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::TempDir;


/// Returns the global test lock for process-wide state (cwd, environment).
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write a backing file named `config` into `dir` with the given mode.
#[cfg(unix)]
pub fn write_config(dir: &TempDir, content: &str, mode: u32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.path().join("config");
    std::fs::write(&path, content).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
    path
}

#[cfg(not(unix))]
pub fn write_config(dir: &TempDir, content: &str, _mode: u32) -> PathBuf {
    let path = dir.path().join("config");
    std::fs::write(&path, content).unwrap();
    path
}

/// Write a well-formed `0600` backing file.
pub fn write_secure_config(dir: &TempDir, content: &str) -> PathBuf {
    write_config(dir, content, 0o600)
}
