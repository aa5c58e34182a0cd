//! Pure input validation.
//!
//! These functions turn raw user text into typed values. They never prompt;
//! retrying on bad input is the menu's job.

use super::{RecordId, RecordIdError};

/// Parse a record id typed by the user.
pub fn parse_id(input: &str) -> Result<RecordId, RecordIdError> {
    input.parse()
}

/// Trim a name and reject it if nothing is left.
pub fn require_name(input: &str) -> Result<String, String> {
    let name = input.trim();
    if name.is_empty() {
        return Err("the name cannot be empty".to_string());
    }
    Ok(name.to_string())
}

/// Parse a `key=value` attribute assignment.
///
/// The value may be empty; the key may not.
pub fn parse_attribute(input: &str) -> Result<(String, String), String> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", input))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field name in '{}'", input));
    }

    Ok((key.to_string(), value.trim().to_string()))
}
