//! Output format selection and rendering helpers.

use std::borrow::Cow;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: text, json", s),
        }
    }
}

/// Terminate `value` with exactly one newline, keeping a trailing one it already has.
pub fn line_terminated(value: &str) -> Cow<'_, str> {
    if value.ends_with('\n') {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("{value}\n"))
    }
}

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
