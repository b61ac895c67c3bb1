//! Permission gate for the backing file.
//!
//! Responsibilities:
//! - Distinguish a missing backing file from one that is present.
//! - Reject a present file unless it is a regular file with mode `0600` or `0400`.
//!
//! Does NOT handle:
//! - Parsing the file (see `store/mod.rs` and `store/parser.rs`).
//! - Fixing permissions; the operator must `chmod` the file.
//!
//! Invariants:
//! - Missing is not an error; every other open or stat failure is.
//! - The file is opened once and the gate inspects that handle, so the checked
//!   file is the one that gets read.
//! - Symlinks are followed, so the target's mode is what counts.

use std::fs::{File, Metadata};
use std::io::ErrorKind;
use std::path::Path;

use crate::constants::{ACCEPTED_FILE_MODES, PERMISSION_BITS_MASK};
use crate::error::ConfigError;

/// Outcome of the gate for a backing file path.
#[derive(Debug)]
pub(crate) enum FileStatus {
    Missing,
    /// Open handle on a file that passed the gate.
    Present(File),
}

/// Returns true if `mode` is one of the accepted owner-only modes.
pub fn is_accepted_mode(mode: u32) -> bool {
    ACCEPTED_FILE_MODES.contains(&(mode & PERMISSION_BITS_MASK))
}

/// Open the backing file and apply the permission gate to the open handle.
pub(crate) fn check_backing_file(path: &Path) -> Result<FileStatus, ConfigError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(FileStatus::Missing),
        Err(source) => return Err(classify_open_failure(path, source)),
    };

    let metadata = file.metadata().map_err(|source| ConfigError::FileStat {
        path: path.to_path_buf(),
        source,
    })?;
    check_metadata(path, &metadata)?;
    Ok(FileStatus::Present(file))
}

// Some platforms refuse to open directories, and an unreadable file may also
// have insecure bits; report those through the gate rather than as read errors.
fn classify_open_failure(path: &Path, source: std::io::Error) -> ConfigError {
    match std::fs::metadata(path) {
        Ok(metadata) => match check_metadata(path, &metadata) {
            Err(gate_error) => gate_error,
            Ok(()) => ConfigError::FileRead {
                path: path.to_path_buf(),
                source,
            },
        },
        Err(_) => ConfigError::FileStat {
            path: path.to_path_buf(),
            source,
        },
    }
}

fn check_metadata(path: &Path, metadata: &Metadata) -> Result<(), ConfigError> {
    if !metadata.is_file() {
        return Err(ConfigError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    check_mode(path, metadata)
}

#[cfg(unix)]
fn check_mode(path: &Path, metadata: &Metadata) -> Result<(), ConfigError> {
    use std::os::unix::fs::PermissionsExt;

    let mode = metadata.permissions().mode() & PERMISSION_BITS_MASK;
    if is_accepted_mode(mode) {
        Ok(())
    } else {
        tracing::warn!(
            path = %path.display(),
            mode = format_args!("{:#o}", mode),
            "Rejecting config file with insecure permissions"
        );
        Err(ConfigError::InsecurePermissions {
            path: path.to_path_buf(),
            mode,
        })
    }
}

// Mode bits do not exist here; the gate only checks that the file exists.
#[cfg(not(unix))]
fn check_mode(path: &Path, _metadata: &Metadata) -> Result<(), ConfigError> {
    tracing::debug!(
        path = %path.display(),
        "Skipping config file permission check on this platform"
    );
    Ok(())
}
