//! `check` command: run the permission gate and the parser over the config file.

use anyhow::Result;
use radstack_config::Resolver;
use serde::Serialize;

use crate::output::{OutputFormat, print_json};

#[derive(Debug, Serialize)]
struct CheckOutput {
    path: String,
    entries: usize,
    file_only: bool,
}

pub fn run(resolver: &Resolver, format: OutputFormat) -> Result<()> {
    let entries = resolver.load_file()?;
    let output = CheckOutput {
        path: resolver.file_path().display().to_string(),
        entries,
        file_only: resolver.is_file_only(),
    };

    match format {
        OutputFormat::Text => println!("{}: OK ({} entries)", output.path, output.entries),
        OutputFormat::Json => print_json(&output)?,
    }
    Ok(())
}
