//! Path helpers for the backing file location.
//!
//! Responsibilities:
//! - Determine the standard and legacy backing file paths.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O beyond existence checks.
//! - Moving a legacy file to the standard location.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_NAME, CONFIG_FILE_NAME, LEGACY_CONFIG_DIR};
use crate::error::ConfigError;

/// Returns the standard path to the backing file.
///
/// - Linux: `~/.config/radstack/config`
/// - macOS: `~/Library/Application Support/radstack/config`
/// - Windows: `%AppData%\radstack\config\config`
pub(crate) fn standard_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Returns the path used by older releases: `~/.radstack/config`.
pub(crate) fn legacy_config_path() -> Result<PathBuf, anyhow::Error> {
    let base_dirs = directories::BaseDirs::new().context("Failed to determine home directory")?;

    Ok(base_dirs
        .home_dir()
        .join(LEGACY_CONFIG_DIR)
        .join(CONFIG_FILE_NAME))
}

/// Pick the legacy path only when it exists and the standard one does not.
fn select_config_path(standard: PathBuf, legacy: Option<PathBuf>) -> PathBuf {
    match legacy {
        Some(legacy) if !standard.exists() && legacy.exists() => {
            tracing::warn!(
                legacy = %legacy.display(),
                standard = %standard.display(),
                "Using legacy config file location; move it to the standard location"
            );
            legacy
        }
        _ => standard,
    }
}

/// Returns the backing file a resolver uses when no path is configured.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let standard =
        standard_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(format!("{e:#}")))?;
    let legacy = legacy_config_path().ok();
    Ok(select_config_path(standard, legacy))
}
