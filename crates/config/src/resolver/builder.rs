//! Resolver builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ResolverBuilder` for constructing a `Resolver`.
//! - Apply settings from builder methods and environment variables.
//! - Optionally load a `.env` file into the process environment.
//!
//! Does NOT handle:
//! - Value lookups (see `lookup.rs`).
//! - Settings variable parsing (delegated to `env.rs`).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Without an explicit or environment path, `build()` uses the default location.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Path, PathBuf};

use super::env::apply_env;
use super::lookup::Resolver;
use crate::constants::ENV_DOTENV_DISABLED;
use crate::error::ConfigError;
use crate::store::default_config_path;

/// Builder for a [`Resolver`].
#[derive(Debug, Default)]
pub struct ResolverBuilder {
    file_path: Option<PathBuf>,
    file_only: Option<bool>,
}

impl ResolverBuilder {
    /// Create a new builder with nothing configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file in the current directory, if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the file is not loaded.
    /// Variables already present in the environment are not overridden.
    ///
    /// # Errors
    ///
    /// - `ConfigError::DotenvParse` if the `.env` file has invalid syntax.
    /// - `ConfigError::DotenvIo` if it exists but cannot be read.
    ///
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Use `path` as the backing file.
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Bypass environment lookups entirely, resolving from cache and file only.
    pub fn with_file_only(mut self, file_only: bool) -> Self {
        self.file_only = Some(file_only);
        self
    }

    /// Read `RADSTACK_CONFIG_PATH` and `RADSTACK_FILE_ONLY` for settings not set yet.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub(crate) fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub(crate) fn set_file_path(&mut self, path: Option<PathBuf>) {
        self.file_path = path;
    }

    pub(crate) fn file_only(&self) -> Option<bool> {
        self.file_only
    }

    pub(crate) fn set_file_only(&mut self, file_only: Option<bool>) {
        self.file_only = file_only;
    }

    /// Build the resolver.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirUnavailable` if no path was configured and
    /// the default location cannot be determined.
    pub fn build(self) -> Result<Resolver, ConfigError> {
        let path = match self.file_path {
            Some(path) => path,
            None => default_config_path()?,
        };
        let file_only = self.file_only.unwrap_or(false);

        tracing::debug!(path = %path.display(), file_only, "Building config resolver");
        Ok(Resolver::with_mode(path, file_only))
    }
}
