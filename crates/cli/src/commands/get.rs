//! `get` command: resolve one value.

use anyhow::{Context, Result};
use radstack_config::{ConfigError, Resolver, ValueSource};
use serde::Serialize;

use crate::output::{OutputFormat, line_terminated, print_json};

#[derive(Debug, Serialize)]
struct GetOutput<'a> {
    name: &'a str,
    value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<ValueSource>,
    cached: bool,
    defaulted: bool,
}

pub fn run(
    resolver: &Resolver,
    name: &str,
    default: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let resolved = resolver
        .resolve(name)
        .with_context(|| format!("Failed to resolve {name}"))?;

    let output = match (&resolved, default) {
        (Some(resolved), _) => GetOutput {
            name,
            value: &resolved.value,
            source: Some(resolved.source),
            cached: resolved.cached,
            defaulted: false,
        },
        (None, Some(default)) => {
            tracing::debug!(name, "Using default value");
            GetOutput {
                name,
                value: default,
                source: None,
                cached: false,
                defaulted: true,
            }
        }
        (None, None) => return Err(ConfigError::MissingValue(name.to_string()).into()),
    };

    match format {
        OutputFormat::Text => print!("{}", line_terminated(output.value)),
        OutputFormat::Json => print_json(&output)?,
    }
    Ok(())
}
