//! Parsing of raw request input into typed values.
//!
//! Every failure here is classified: malformed values become `ReviewError::InvalidInput`
//! and absent required fields become `ReviewError::NoInputDetected`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::server::error::review::ReviewError;

/// Parses a review id from a path segment.
///
/// # Arguments
/// - `value` - Raw path segment, e.g. `"3"` or `"bananas"`
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(ReviewError::InvalidInput)` - Segment is not an integer in `i32` range
pub fn parse_review_id(value: &str) -> Result<i32, ReviewError> {
    value.parse::<i32>().map_err(|_| ReviewError::InvalidInput)
}

/// Parses a request body into a request DTO.
///
/// An empty (or whitespace-only) body yields `T::default()` so that a missing payload
/// surfaces as `NoInputDetected` once fields are looked up. Only JSON objects are
/// accepted; field values are left as raw JSON for the caller to classify.
///
/// # Returns
/// - `Ok(T)` - Body is empty or a JSON object
/// - `Err(ReviewError::InvalidInput)` - Body is not valid JSON or not an object
pub fn parse_json_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ReviewError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(object @ Value::Object(_)) => {
            serde_json::from_value(object).map_err(|_| ReviewError::InvalidInput)
        }
        _ => Err(ReviewError::InvalidInput),
    }
}

/// Unwraps a required request field.
///
/// JSON `null` deserializes to `None`, so it counts as absent.
///
/// # Returns
/// - `Ok(&Value)` - Field present with a non-null value
/// - `Err(ReviewError::NoInputDetected)` - Field absent or `null`
pub fn required_field(field: &Option<Value>) -> Result<&Value, ReviewError> {
    field.as_ref().ok_or(ReviewError::NoInputDetected)
}

/// Reads a JSON value as an `i32`.
///
/// # Returns
/// - `Ok(i32)` - Value is an integral JSON number in `i32` range
/// - `Err(ReviewError::InvalidInput)` - Any other value, including strings and floats
pub fn parse_integer(value: &Value) -> Result<i32, ReviewError> {
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(ReviewError::InvalidInput)
}

/// Reads a JSON value as a string with at least one non-whitespace character.
///
/// # Returns
/// - `Ok(String)` - Value is a non-blank string
/// - `Err(ReviewError::InvalidInput)` - Value is blank or not a string
pub fn parse_non_empty_string(value: &Value) -> Result<String, ReviewError> {
    match value.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(ReviewError::InvalidInput),
    }
}
