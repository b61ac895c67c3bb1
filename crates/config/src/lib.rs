//! Layered configuration resolution for radstack services.
//!
//! This crate resolves named configuration values from an in-memory cache,
//! process environment variables, and a permission-restricted local file
//! (`~/.config/radstack/config` by default), parsing the file lazily and at
//! most once.
//!
//! ```rust,ignore
//! use radstack_config::Resolver;
//!
//! let resolver = Resolver::builder().from_env()?.build()?;
//! let nodes = resolver.get_or_default("RADSTACK_DB_NODES", "https://localhost:8080")?;
//! let cert = resolver.must_get_secret("RADSTACK_DB_CERT")?;
//! ```

pub mod constants;
mod error;
mod identifier;
mod resolver;
mod store;

pub use error::ConfigError;
pub use identifier::{compose_identifier, sanitize_identifier};
pub use resolver::{Resolved, Resolver, ResolverBuilder, ValueSource, env_var_or_none};
pub use store::{ParseError, default_config_path, is_accepted_mode, parse_entries};
