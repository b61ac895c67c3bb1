//! `identifier` command: compose a store name from resolved values.

use anyhow::Result;
use radstack_config::Resolver;
use serde_json::json;

use crate::output::{OutputFormat, print_json};

pub fn run(resolver: &Resolver, names: &[String], format: OutputFormat) -> Result<()> {
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let identifier = resolver.identifier(&names)?;

    match format {
        OutputFormat::Text => println!("{identifier}"),
        OutputFormat::Json => print_json(&json!({ "identifier": identifier }))?,
    }
    Ok(())
}
