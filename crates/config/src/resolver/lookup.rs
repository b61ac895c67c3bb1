//! Layered value lookup: cache, then environment, then backing file.
//!
//! Responsibilities:
//! - Resolve a name by checking the cache, the process environment, and the file store,
//!   in that order, stopping at the first hit.
//! - Cache every successful resolution under the lower-cased name.
//! - Serialize cache writes and the one-shot file load behind a single lock.
//!
//! Does NOT handle:
//! - Parsing or permission checks of the backing file (see `store`).
//! - Deciding whether an error should end the process (left to the application).
//!
//! Invariants:
//! - Absence is never cached; a miss is retried from scratch on the next call.
//! - Defaults passed to `get_or_default` are never cached.
//! - Cache entries are never overwritten or invalidated.
//! - The environment is looked up with the name as given, the file with the name as given,
//!   and the cache with the lower-cased name.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use secrecy::SecretString;
use serde::Serialize;

use super::builder::ResolverBuilder;
use super::env::env_value;
use crate::error::ConfigError;
use crate::identifier::compose_identifier;
use crate::store::FileStore;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    Environment,
    File,
}

/// A resolved value together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    /// The name as requested by the caller.
    pub name: String,
    pub value: String,
    /// Source recorded when the value was first resolved.
    pub source: ValueSource,
    /// True if this call was answered from the cache.
    pub cached: bool,
}

struct CachedValue {
    value: String,
    source: ValueSource,
}

impl CachedValue {
    fn to_resolved(&self, name: &str, cached: bool) -> Resolved {
        Resolved {
            name: name.to_string(),
            value: self.value.clone(),
            source: self.source,
            cached,
        }
    }
}

struct ResolverState {
    cache: HashMap<String, CachedValue>,
    store: FileStore,
}

/// Resolves named configuration values from cache, environment, and a backing file.
///
/// A `Resolver` owns its cache and file table; nothing is shared between instances.
/// It is `Send + Sync` and may be shared across threads.
pub struct Resolver {
    path: PathBuf,
    file_only: bool,
    state: Mutex<ResolverState>,
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock_state();
        f.debug_struct("Resolver")
            .field("path", &self.path)
            .field("file_only", &self.file_only)
            .field("cached_names", &state.cache.len())
            .field("store", &state.store)
            .finish()
    }
}

impl Resolver {
    /// Create a resolver reading the backing file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_mode(path.into(), false)
    }

    /// Create a resolver that ignores the process environment.
    ///
    /// Intended for isolated execution such as tests and local runs.
    pub fn file_only(path: impl Into<PathBuf>) -> Self {
        Self::with_mode(path.into(), true)
    }

    /// Start building a resolver.
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    pub(crate) fn with_mode(path: PathBuf, file_only: bool) -> Self {
        Self {
            state: Mutex::new(ResolverState {
                cache: HashMap::new(),
                store: FileStore::new(path.clone()),
            }),
            path,
            file_only,
        }
    }

    /// Path of the backing file.
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// True if environment lookups are bypassed.
    pub fn is_file_only(&self) -> bool {
        self.file_only
    }

    /// True once the backing file has been parsed.
    pub fn is_file_loaded(&self) -> bool {
        self.lock_state().store.is_loaded()
    }

    // State is only mutated after a lookup or parse fully succeeded, so a
    // panic elsewhere cannot leave it half-written.
    fn lock_state(&self) -> MutexGuard<'_, ResolverState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Resolve `name`, reporting where the value came from.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backing file has to be consulted and fails the
    /// permission gate, cannot be read, or is malformed. A missing value is `Ok(None)`.
    pub fn resolve(&self, name: &str) -> Result<Option<Resolved>, ConfigError> {
        let cache_key = name.to_lowercase();
        let mut state = self.lock_state();

        if let Some(hit) = state.cache.get(&cache_key) {
            return Ok(Some(hit.to_resolved(name, true)));
        }

        let env_hit = if self.file_only {
            None
        } else {
            env_value(name)
        };
        let found = match env_hit {
            Some(value) => Some(CachedValue {
                value,
                source: ValueSource::Environment,
            }),
            None => state.store.value(name)?.map(|value| CachedValue {
                value,
                source: ValueSource::File,
            }),
        };

        let Some(entry) = found else {
            tracing::trace!(name, "Config value not found");
            return Ok(None);
        };

        tracing::trace!(name, source = ?entry.source, "Resolved config value");
        let resolved = entry.to_resolved(name, false);
        state.cache.insert(cache_key, entry);
        Ok(Some(resolved))
    }

    /// Resolve `name` to its value.
    pub fn get(&self, name: &str) -> Result<Option<String>, ConfigError> {
        Ok(self.resolve(name)?.map(|resolved| resolved.value))
    }

    /// Resolve `name`, falling back to `default` without caching it.
    pub fn get_or_default(&self, name: &str, default: &str) -> Result<String, ConfigError> {
        Ok(self.get(name)?.unwrap_or_else(|| default.to_string()))
    }

    /// Resolve `name`, failing with `ConfigError::MissingValue` if it has no value.
    pub fn must_get(&self, name: &str) -> Result<String, ConfigError> {
        self.get(name)?
            .ok_or_else(|| ConfigError::MissingValue(name.to_string()))
    }

    /// Like [`Resolver::get`], wrapping the value for secret material.
    pub fn get_secret(&self, name: &str) -> Result<Option<SecretString>, ConfigError> {
        Ok(self.get(name)?.map(|value| SecretString::new(value.into())))
    }

    /// Like [`Resolver::must_get`], wrapping the value for secret material.
    pub fn must_get_secret(&self, name: &str) -> Result<SecretString, ConfigError> {
        self.must_get(name).map(|value| SecretString::new(value.into()))
    }

    /// Must-get every name and compose their sanitized values into one identifier.
    pub fn identifier(&self, names: &[&str]) -> Result<String, ConfigError> {
        let values = names
            .iter()
            .map(|name| self.must_get(name))
            .collect::<Result<Vec<_>, _>>()?;
        compose_identifier(values)
    }

    /// Eagerly gate and parse the backing file, returning the number of entries.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyLoaded` if the file was already parsed, and
    /// `ConfigError::FileRead` if it does not exist.
    pub fn load_file(&self) -> Result<usize, ConfigError> {
        self.lock_state().store.load()
    }

    /// Sorted keys of the backing file. Values are not exposed.
    ///
    /// A missing backing file yields an empty list.
    pub fn file_keys(&self) -> Result<Vec<String>, ConfigError> {
        self.lock_state().store.keys()
    }
}
