//! Error types for configuration resolution.
//!
//! Responsibilities:
//! - Define error variants for every failure of the resolver and file store.
//! - Classify errors so the embedding application can pick a termination policy.
//!
//! Does NOT handle:
//! - Deciding whether an error is fatal (see the `radstack` binary).
//! - "Not found" outcomes, which are `Ok(None)` and never an error.
//!
//! Invariants:
//! - All error variants include context for debugging (names, paths, line numbers).
//! - Errors NEVER include raw backing file or `.env` contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::MIN_IDENTIFIER_LEN;

/// Errors that can occur while resolving configuration values.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The backing file exists but is readable or writable beyond its owner.
    #[error(
        "Config file at {path} has insecure permissions {mode:#o}; it must be 0600 or 0400"
    )]
    InsecurePermissions { path: PathBuf, mode: u32 },

    #[error("Config file path {path} exists but is not a regular file")]
    NotAFile { path: PathBuf },

    #[error("Failed to inspect config file at {path}: {source}")]
    FileStat {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A single-line record did not split into exactly one key and one value.
    ///
    /// SAFETY: Only the line number is reported, never the line itself.
    #[error(
        "Config file at {path} is malformed at line {line}: records must be key=value pairs"
    )]
    MalformedFile { path: PathBuf, line: usize },

    /// End of file reached while a backtick-delimited value was still open.
    #[error(
        "Config file at {path} ends inside the multi-line value for '{key}' opened at line {line}"
    )]
    UnterminatedMultiline {
        path: PathBuf,
        key: String,
        line: usize,
    },

    #[error("Config file at {path} is already loaded")]
    AlreadyLoaded { path: PathBuf },

    #[error("Missing required configuration value: {0}")]
    MissingValue(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error(
        "Identifier sanitized to '{sanitized}' is too short; it must be at least {min} characters of a-z",
        min = MIN_IDENTIFIER_LEN
    )]
    IdentifierTooShort { sanitized: String },

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Returns true if the backing file failed the permission gate.
    ///
    /// Applications holding secrets in the backing file usually treat these
    /// as fatal at startup.
    pub fn is_security_violation(&self) -> bool {
        matches!(
            self,
            ConfigError::InsecurePermissions { .. } | ConfigError::NotAFile { .. }
        )
    }

    /// Returns true if the backing file content could not be parsed.
    pub fn is_malformed_file(&self) -> bool {
        matches!(
            self,
            ConfigError::MalformedFile { .. } | ConfigError::UnterminatedMultiline { .. }
        )
    }
}
