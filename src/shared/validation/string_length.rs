use serde_json::Value;

use crate::shared::errors::{AppError, AppResult};

/// Trims `value` and checks it is at least `min_length` characters long.
///
/// An absent value is accepted only when `allow_none` is set, in which case
/// `Ok(None)` is returned. Length is measured in characters, not bytes.
pub fn validate_string_length(
    field_name: &str,
    value: Option<&str>,
    min_length: usize,
    allow_none: bool,
) -> AppResult<Option<String>> {
    let Some(value) = value else {
        if allow_none {
            return Ok(None);
        }
        return Err(AppError::ValidationError(format!(
            "{} cannot be empty",
            field_name
        )));
    };

    let trimmed = value.trim();
    if trimmed.chars().count() < min_length {
        return Err(AppError::ValidationError(format!(
            "{} must be at least {} characters",
            field_name, min_length
        )));
    }

    Ok(Some(trimmed.to_string()))
}

/// Required variant of [`validate_string_length`]
pub fn validate_required(field_name: &str, value: &str, min_length: usize) -> AppResult<String> {
    validate_string_length(field_name, Some(value), min_length, false).map(Option::unwrap_or_default)
}

/// Same rules as [`validate_string_length`] for loosely typed input such as
/// a projection map, where the value may not be a string at all.
///
/// JSON `null` counts as absent.
pub fn validate_string_value(
    field_name: &str,
    value: Option<&Value>,
    min_length: usize,
    allow_none: bool,
) -> AppResult<Option<String>> {
    match value {
        None | Some(Value::Null) => validate_string_length(field_name, None, min_length, allow_none),
        Some(Value::String(s)) => validate_string_length(field_name, Some(s), min_length, allow_none),
        Some(_) => Err(AppError::ValidationError(format!(
            "{} must be a string",
            field_name
        ))),
    }
}
