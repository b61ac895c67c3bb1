//! Environment variable access for the resolver.
//!
//! Responsibilities:
//! - Look up requested names verbatim in the process environment.
//! - Read the resolver's own settings (`RADSTACK_CONFIG_PATH`, `RADSTACK_FILE_ONLY`)
//!   and apply them to a `ResolverBuilder`.
//!
//! Does NOT handle:
//! - Precedence between sources (see `lookup.rs`).
//! - `.env` file loading (handled by `ResolverBuilder::load_dotenv`).
//!
//! Invariants:
//! - Requested names are case-sensitive and an empty value counts as present.
//! - Settings variables that are empty or whitespace-only are treated as unset.
//! - Builder values set explicitly are never overridden by settings variables.

use std::env::VarError;
use std::path::PathBuf;

use super::builder::ResolverBuilder;
use crate::constants::{ENV_CONFIG_PATH, ENV_FILE_ONLY};
use crate::error::ConfigError;

/// Look up `name` exactly as given. Non-UTF-8 values are treated as absent.
pub(crate) fn env_value(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            tracing::debug!(name, "Ignoring environment variable with non-UTF-8 value");
            None
        }
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a boolean switch the way the settings variables accept it.
fn parse_switch(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true, false, 1, or 0".to_string(),
        }),
    }
}

/// Apply resolver settings from the environment to the builder.
pub(crate) fn apply_env(builder: &mut ResolverBuilder) -> Result<(), ConfigError> {
    if builder.file_path().is_none()
        && let Some(path) = env_var_or_none(ENV_CONFIG_PATH)
    {
        builder.set_file_path(Some(PathBuf::from(path)));
    }

    if builder.file_only().is_none()
        && let Some(value) = env_var_or_none(ENV_FILE_ONLY)
    {
        builder.set_file_only(Some(parse_switch(ENV_FILE_ONLY, &value)?));
    }

    Ok(())
}
