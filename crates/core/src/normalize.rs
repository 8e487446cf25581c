//! Trim and case helpers applied to every value before it is stored or
//! compared.

use crate::error::{CoreError, RequiredField};

/// Trim a required field, failing with the field's `MISSING_*` error when it
/// is absent or blank.
pub fn required(value: Option<&str>, field: RequiredField) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::MissingField(field)),
    }
}

/// Trim an optional free-text field; blank becomes `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Trim and uppercase (category codes, room categories).
pub fn upper(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Trim and lowercase (room status).
pub fn lower(value: &str) -> String {
    value.trim().to_lowercase()
}
