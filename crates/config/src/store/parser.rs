//! Line-oriented grammar of the backing file.
//!
//! Responsibilities:
//! - Parse `key=value` records and backtick-delimited multi-line values.
//! - Report the 1-based line number of the first grammar violation.
//!
//! Does NOT handle:
//! - Reading the file or checking its permissions (see `store/mod.rs`).
//! - Case normalization; keys are kept exactly as written.
//!
//! Invariants:
//! - A record line splits on `=` into exactly one key and one value.
//! - At most one multi-line block is open at a time.
//! - Parsing is all-or-nothing: entries are only returned if the whole input parsed.
//! - Errors never carry line contents.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::constants::{KEY_VALUE_DELIMITER, MULTILINE_DELIMITER};
use crate::error::ConfigError;

/// Grammar violation found while parsing backing file content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line} is not a key=value record")]
    Malformed { line: usize },

    #[error("multi-line value for '{key}' opened at line {line} is never closed")]
    Unterminated { key: String, line: usize },
}

impl ParseError {
    /// Attach the backing file path, producing the resolver-facing error.
    pub(crate) fn into_config_error(self, path: &Path) -> ConfigError {
        match self {
            ParseError::Malformed { line } => ConfigError::MalformedFile {
                path: path.to_path_buf(),
                line,
            },
            ParseError::Unterminated { key, line } => ConfigError::UnterminatedMultiline {
                path: path.to_path_buf(),
                key,
                line,
            },
        }
    }
}

enum ParserState {
    ScanningKeys,
    AccumulatingMultiline {
        key: String,
        buffer: String,
        opened_at: usize,
    },
}

/// Two-state parser over the lines of a backing file.
struct Parser {
    state: ParserState,
    entries: HashMap<String, String>,
}

impl Parser {
    fn new() -> Self {
        Self {
            state: ParserState::ScanningKeys,
            entries: HashMap::new(),
        }
    }

    fn feed(&mut self, line_number: usize, line: &str) -> Result<(), ParseError> {
        match std::mem::replace(&mut self.state, ParserState::ScanningKeys) {
            ParserState::ScanningKeys => self.scan_record(line_number, line),
            ParserState::AccumulatingMultiline {
                key,
                mut buffer,
                opened_at,
            } => {
                match strip_closing_backtick(line) {
                    Some(last) => {
                        buffer.push_str(last);
                        self.entries.insert(key, buffer);
                    }
                    None => {
                        buffer.push_str(line);
                        buffer.push('\n');
                        self.state = ParserState::AccumulatingMultiline {
                            key,
                            buffer,
                            opened_at,
                        };
                    }
                }
                Ok(())
            }
        }
    }

    fn scan_record(&mut self, line_number: usize, line: &str) -> Result<(), ParseError> {
        let (key, value) =
            split_record(line).ok_or(ParseError::Malformed { line: line_number })?;

        let Some(first) = strip_opening_backtick(value) else {
            self.entries.insert(key.to_string(), value.to_string());
            return Ok(());
        };

        // The opening line never closes a block, even if it ends in a backtick.
        let mut buffer = String::with_capacity(first.len() + 1);
        buffer.push_str(first);
        buffer.push('\n');
        self.state = ParserState::AccumulatingMultiline {
            key: key.to_string(),
            buffer,
            opened_at: line_number,
        };
        Ok(())
    }

    fn finish(self) -> Result<HashMap<String, String>, ParseError> {
        match self.state {
            ParserState::ScanningKeys => Ok(self.entries),
            ParserState::AccumulatingMultiline { key, opened_at, .. } => {
                Err(ParseError::Unterminated {
                    key,
                    line: opened_at,
                })
            }
        }
    }
}

/// Split a record on `=`, requiring exactly one delimiter and a non-empty key.
fn split_record(line: &str) -> Option<(&str, &str)> {
    let mut tokens = line.split(KEY_VALUE_DELIMITER);
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(key), Some(value), None) if !key.is_empty() => Some((key, value)),
        _ => None,
    }
}

/// Drop the backtick that opens a multi-line value.
fn strip_opening_backtick(value: &str) -> Option<&str> {
    value.strip_prefix(MULTILINE_DELIMITER)
}

/// Drop the backtick that closes a multi-line value.
fn strip_closing_backtick(line: &str) -> Option<&str> {
    line.strip_suffix(MULTILINE_DELIMITER)
}

/// Parse backing file content into a key to value table.
///
/// Later records for the same key replace earlier ones. Lines may end in
/// `\n` or `\r\n`.
pub fn parse_entries(content: &str) -> Result<HashMap<String, String>, ParseError> {
    let mut parser = Parser::new();
    for (index, line) in content.lines().enumerate() {
        parser.feed(index + 1, line)?;
    }
    parser.finish()
}
