//! Layered configuration resolver.
//!
//! Responsibilities:
//! - Resolve named values from an in-memory cache, the process environment, and a
//!   permission-restricted backing file, in that order.
//! - Provide a builder-pattern `ResolverBuilder` for constructing resolvers.
//! - Enforce the `DOTENV_DISABLED` gate before loading a `.env` file.
//!
//! Does NOT handle:
//! - The backing file grammar or permission gate (see `store`).
//! - Typed conversion or validation of values; callers receive raw text.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over the backing file unless file-only
//!   mode was chosen at construction.
//! - The backing file is parsed at most once per resolver.

mod builder;
mod env;
mod lookup;

#[cfg(test)]
mod tests;

pub use builder::ResolverBuilder;
pub use env::env_var_or_none;
pub use lookup::{Resolved, Resolver, ValueSource};
