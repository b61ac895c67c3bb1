//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not build the resolver (see `main.rs`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use radstack_config::constants::ENV_CONFIG_PATH;

#[derive(Parser)]
#[command(name = "radstack")]
#[command(about = "Resolve radstack configuration values from the environment and the secure config file", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  radstack get RADSTACK_STAGE\n  radstack get RADSTACK_DB_POOL --default 4\n  radstack --file-only check\n  radstack -o json keys\n  radstack identifier RADSTACK_ORG_ID RADSTACK_DB_NAME RADSTACK_STAGE\n"
)]
pub struct Cli {
    /// Path to the backing config file (default: platform config dir, then ~/.radstack/config)
    #[arg(long, global = true, env = ENV_CONFIG_PATH, value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Ignore the process environment and resolve from the config file only
    #[arg(long, global = true)]
    pub file_only: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: String,

    /// Emit log lines on stderr as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a single value
    #[command(after_help = "Examples:\n  radstack get RADSTACK_STAGE\n  radstack get TLS_CERT --file-only\n  radstack -o json get RADSTACK_DB_POOL --default 4\n")]
    Get {
        /// Name of the value (environment names are case-sensitive)
        name: String,

        /// Value to print when the name resolves to nothing
        #[arg(short, long)]
        default: Option<String>,
    },

    /// Check permissions and grammar of the config file
    Check,

    /// List the keys defined in the config file (values are never printed)
    Keys,

    /// Compose a sanitized identifier from the values of several names
    Identifier {
        /// Names whose values are sanitized and joined with '-'
        #[arg(required = true)]
        names: Vec<String>,
    },
}
