//! Identifier derivation from resolved values.
//!
//! Consumers build store and database names from resolved values such as an
//! organization id, a database name, and a deployment stage. Each part is
//! lower-cased and stripped to `a-z`, and must keep at least three characters.

use crate::constants::{IDENTIFIER_SEPARATOR, MIN_IDENTIFIER_LEN};
use crate::error::ConfigError;

/// Lower-case `raw` and drop every character outside `a-z`.
///
/// # Errors
///
/// Returns `ConfigError::IdentifierTooShort` if fewer than three characters remain.
pub fn sanitize_identifier(raw: &str) -> Result<String, ConfigError> {
    let sanitized: String = raw
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect();

    if sanitized.len() < MIN_IDENTIFIER_LEN {
        return Err(ConfigError::IdentifierTooShort { sanitized });
    }
    Ok(sanitized)
}

/// Sanitize each part and join them with `-`.
///
/// An empty list of parts is rejected like a too-short identifier.
pub fn compose_identifier<I, S>(parts: I) -> Result<String, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let sanitized = parts
        .into_iter()
        .map(|part| sanitize_identifier(part.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    if sanitized.is_empty() {
        return Err(ConfigError::IdentifierTooShort {
            sanitized: String::new(),
        });
    }
    Ok(sanitized.join(&IDENTIFIER_SEPARATOR.to_string()))
}
