//! Centralized constants for the radstack configuration workspace.
//!
//! This module contains names, paths, and limits shared across crates to avoid
//! magic value duplication.

// =============================================================================
// Backing File Location
// =============================================================================

/// Application name used to derive the per-user configuration directory.
pub const APP_NAME: &str = "radstack";

/// File name of the backing file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config";

/// Directory under the home directory used by older releases (`~/.radstack`).
pub const LEGACY_CONFIG_DIR: &str = ".radstack";

// =============================================================================
// Backing File Permissions
// =============================================================================

/// Owner read-write, no access for group or other.
pub const MODE_OWNER_READ_WRITE: u32 = 0o600;

/// Owner read-only, no access for group or other.
pub const MODE_OWNER_READ_ONLY: u32 = 0o400;

/// Permission bits the gate accepts on the backing file.
pub const ACCEPTED_FILE_MODES: [u32; 2] = [MODE_OWNER_READ_WRITE, MODE_OWNER_READ_ONLY];

/// Mask selecting permission, setuid, setgid, and sticky bits from `st_mode`.
pub const PERMISSION_BITS_MASK: u32 = 0o7777;

// =============================================================================
// File Grammar
// =============================================================================

/// Separates a key from its value on a single-line record.
pub const KEY_VALUE_DELIMITER: char = '=';

/// Opens and closes a multi-line value.
pub const MULTILINE_DELIMITER: char = '`';

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the backing file location.
pub const ENV_CONFIG_PATH: &str = "RADSTACK_CONFIG_PATH";

/// Enables file-only mode (`true`/`1`), bypassing environment lookups.
pub const ENV_FILE_ONLY: &str = "RADSTACK_FILE_ONLY";

/// Disables `.env` loading when set to `true` or `1`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Identifiers
// =============================================================================

/// Minimum length of a sanitized identifier.
pub const MIN_IDENTIFIER_LEN: usize = 3;

/// Separator used when composing several sanitized identifiers.
pub const IDENTIFIER_SEPARATOR: char = '-';
