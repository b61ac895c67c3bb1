//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 belongs to clap usage errors and is never returned by commands.

use std::io::ErrorKind;

use radstack_config::ConfigError;

/// Structured exit codes for radstack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Not found - the value or the config file does not exist.
    ///
    /// Scripts should provide the value or create the file.
    NotFound = 3,

    /// Validation error - malformed config file, bad setting, short identifier.
    ///
    /// Scripts should fix the input and not retry.
    ValidationError = 4,

    /// Permission denied - the config file failed the permission gate.
    ///
    /// The file must be a regular file with mode 0600 or 0400.
    PermissionDenied = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        if err.is_security_violation() {
            return ExitCode::PermissionDenied;
        }
        if err.is_malformed_file() {
            return ExitCode::ValidationError;
        }
        match err {
            ConfigError::MissingValue(_) => ExitCode::NotFound,
            ConfigError::FileRead { source, .. } if source.kind() == ErrorKind::NotFound => {
                ExitCode::NotFound
            }
            ConfigError::InvalidValue { .. } | ConfigError::IdentifierTooShort { .. } => {
                ExitCode::ValidationError
            }
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no `ConfigError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
