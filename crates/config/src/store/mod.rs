//! File-backed value store.
//!
//! Responsibilities:
//! - Own the backing file path and its two-state load machine (`Unloaded` -> `Loaded`).
//! - Gate every load on the permission check, then read and parse the gated handle once.
//! - Answer case-sensitive key lookups from the loaded table.
//!
//! Does NOT handle:
//! - Cache or environment lookups (see `resolver`).
//! - Locking; the owning `Resolver` serializes access.
//!
//! Invariants:
//! - The table is installed only after the whole file parsed; a failed load leaves
//!   the store `Unloaded` with no entries visible.
//! - Once `Loaded`, the table never changes.
//! - A missing backing file keeps the store `Unloaded`, so a file created later is
//!   picked up by a later lookup.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::PathBuf;

mod parser;
mod path;
mod permissions;

pub use parser::{ParseError, parse_entries};
pub use path::default_config_path;
pub use permissions::is_accepted_mode;

use crate::error::ConfigError;
use permissions::{FileStatus, check_backing_file};

enum LoadState {
    Unloaded,
    Loaded(HashMap<String, String>),
}

/// Lazily loaded key/value table backed by a permission-restricted file.
pub(crate) struct FileStore {
    path: PathBuf,
    state: LoadState,
}

// Values may be secrets; only the entry count is printed.
impl fmt::Debug for FileStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = match &self.state {
            LoadState::Unloaded => None,
            LoadState::Loaded(entries) => Some(entries.len()),
        };
        f.debug_struct("FileStore")
            .field("path", &self.path)
            .field("entries", &entries)
            .finish()
    }
}

impl FileStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: LoadState::Unloaded,
        }
    }

    pub(crate) fn is_loaded(&self) -> bool {
        matches!(self.state, LoadState::Loaded(_))
    }

    /// Look up `key` exactly as written in the file, loading the file first if needed.
    pub(crate) fn value(&mut self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(self
            .ensure_loaded()?
            .and_then(|entries| entries.get(key).cloned()))
    }

    /// Sorted keys of the backing file, loading it first if needed.
    pub(crate) fn keys(&mut self) -> Result<Vec<String>, ConfigError> {
        let mut keys: Vec<String> = self
            .ensure_loaded()?
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        Ok(keys)
    }

    /// Gate, read, and parse the backing file, returning the number of entries.
    ///
    /// # Errors
    ///
    /// - `AlreadyLoaded` if the table was loaded before.
    /// - `FileRead` with `NotFound` if the file does not exist.
    /// - Any permission or grammar error from the gate or the parser.
    pub(crate) fn load(&mut self) -> Result<usize, ConfigError> {
        if self.is_loaded() {
            return Err(ConfigError::AlreadyLoaded {
                path: self.path.clone(),
            });
        }

        match check_backing_file(&self.path)? {
            FileStatus::Present(file) => self.read_and_parse(file),
            FileStatus::Missing => Err(ConfigError::FileRead {
                path: self.path.clone(),
                source: ErrorKind::NotFound.into(),
            }),
        }
    }

    fn ensure_loaded(&mut self) -> Result<Option<&HashMap<String, String>>, ConfigError> {
        if !self.is_loaded() {
            match check_backing_file(&self.path)? {
                FileStatus::Missing => {
                    tracing::trace!(path = %self.path.display(), "Config file not present");
                    return Ok(None);
                }
                FileStatus::Present(file) => {
                    self.read_and_parse(file)?;
                }
            }
        }

        match &self.state {
            LoadState::Loaded(entries) => Ok(Some(entries)),
            LoadState::Unloaded => Ok(None),
        }
    }

    /// Read through the handle the gate checked, never by reopening the path.
    fn read_and_parse(&mut self, mut file: File) -> Result<usize, ConfigError> {
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(|source| ConfigError::FileRead {
            path: self.path.clone(),
            source,
        })?;

        let entries =
            parse_entries(&content).map_err(|e| e.into_config_error(&self.path))?;
        let count = entries.len();

        tracing::debug!(
            path = %self.path.display(),
            entries = count,
            "Loaded config file"
        );
        self.state = LoadState::Loaded(entries);
        Ok(count)
    }
}
