//! Input validation helpers
//!
//! Every write validates its typed input here before touching storage.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: venue, artist, drink title, category
pub const MAX_NAME_LEN: usize = 200;

/// City and state names
pub const MAX_LOCATION_LEN: usize = 120;

/// Seeking descriptions, question and answer text
pub const MAX_NOTE_LEN: usize = 500;

/// Phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 120;

/// Image, website and facebook links
pub const MAX_URL_LEN: usize = 500;

/// Street addresses
pub const MAX_ADDRESS_LEN: usize = 120;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Unwrap a required field, rejecting absent values
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::validation(format!("{field} is required")))
}

/// Unwrap a required text field, rejecting absent and blank values
pub fn require_text(value: Option<String>, field: &str, max_len: usize) -> Result<String, AppError> {
    let value = require(value, field)?;
    validate_required_text(&value, field, max_len)?;
    Ok(value)
}
