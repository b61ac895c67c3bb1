//! radstack - Command-line front end for the layered config resolver.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build a `Resolver` from global options, settings variables, and defaults.
//! - Run one subcommand and translate its outcome into a structured exit code.
//!
//! Does NOT handle:
//! - Resolution, parsing, or permission checks (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Values go to stdout; diagnostics and logs go to stderr.

mod args;
mod commands;
mod error;
mod output;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use commands::run_command;
use error::{ExitCode, ExitCodeExt};
use output::OutputFormat;
use radstack_config::{Resolver, ResolverBuilder};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    let builder = match Resolver::builder().load_dotenv() {
        Ok(builder) => builder,
        Err(e) => {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let cli = Cli::parse();
    init_logging(cli.log_json);

    let exit_code = match run(cli, builder) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn init_logging(json: bool) {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

fn run(cli: Cli, builder: ResolverBuilder) -> Result<()> {
    let format: OutputFormat = cli.output.parse()?;
    let resolver = build_resolver(builder, &cli)?;
    run_command(cli.command, &resolver, format)
}

fn build_resolver(mut builder: ResolverBuilder, cli: &Cli) -> Result<Resolver> {
    if let Some(path) = &cli.config_path {
        builder = builder.with_file_path(path);
    }
    // Without the flag, RADSTACK_FILE_ONLY still decides.
    if cli.file_only {
        builder = builder.with_file_only(true);
    }

    builder
        .from_env()
        .context("Invalid radstack settings in environment")?
        .build()
        .context("Failed to determine the config file location")
}
