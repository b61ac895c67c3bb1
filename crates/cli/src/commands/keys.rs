//! `keys` command: list config file keys without their values.

use anyhow::Result;
use radstack_config::Resolver;

use crate::output::{OutputFormat, print_json};

pub fn run(resolver: &Resolver, format: OutputFormat) -> Result<()> {
    let keys = resolver.file_keys()?;

    match format {
        OutputFormat::Text => {
            for key in &keys {
                println!("{key}");
            }
        }
        OutputFormat::Json => print_json(&keys)?,
    }
    Ok(())
}
