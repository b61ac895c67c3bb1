//! Subcommand implementations.
//!
//! Responsibilities:
//! - Route a parsed `Commands` value to its handler.
//!
//! Does NOT handle:
//! - Exit code selection (see `error.rs`); handlers return errors as values.

pub mod check;
pub mod get;
pub mod identifier;
pub mod keys;

use anyhow::Result;
use radstack_config::Resolver;

use crate::args::Commands;
use crate::output::OutputFormat;

pub fn run_command(command: Commands, resolver: &Resolver, format: OutputFormat) -> Result<()> {
    match command {
        Commands::Get { name, default } => get::run(resolver, &name, default.as_deref(), format),
        Commands::Check => check::run(resolver, format),
        Commands::Keys => keys::run(resolver, format),
        Commands::Identifier { names } => identifier::run(resolver, &names, format),
    }
}
