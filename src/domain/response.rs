//! Validation of raw review API responses.
//!
//! The API answers with `{"homeworks": [...], "current_date": <unix secs>}`.
//! Homeworks are ordered most recent first, so only the head of the list is
//! inspected.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::Homework;
use crate::error::PollError;

/// A validated response: the latest homework and the next poll timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewUpdate {
    pub homework: Homework,
    pub current_date: i64,
}

/// Validate a response and extract both the latest homework and the
/// server timestamp.
///
/// # Errors
///
/// See [`extract_timestamp`] and [`extract_latest`].
pub fn validate(response: &Value) -> Result<ReviewUpdate, PollError> {
    let current_date = extract_timestamp(response)?;
    let homework = extract_latest(response)?;
    Ok(ReviewUpdate {
        homework,
        current_date,
    })
}

/// Extract `current_date`, the `from_date` to use for the next request.
///
/// # Errors
///
/// - [`PollError::TypeMismatch`] if the response is not an object or the
///   timestamp is not an integer
/// - [`PollError::MissingTimestamp`] if the field is absent
pub fn extract_timestamp(response: &Value) -> Result<i64, PollError> {
    let value = as_object(response)?
        .get("current_date")
        .ok_or(PollError::MissingTimestamp)?;

    value.as_i64().ok_or(PollError::TypeMismatch {
        context: "current_date",
        expected: "integer",
        found: json_type(value),
    })
}

/// Extract the most recent homework from the `homeworks` list.
///
/// # Errors
///
/// - [`PollError::TypeMismatch`] if the response is not an object, the list
///   is not an array, or its head is not a homework object
/// - [`PollError::MissingField`] if `homeworks` is absent
/// - [`PollError::NoItemsAvailable`] if the list is empty
pub fn extract_latest(response: &Value) -> Result<Homework, PollError> {
    let homeworks = as_object(response)?
        .get("homeworks")
        .ok_or(PollError::MissingField { field: "homeworks" })?;

    let list = homeworks.as_array().ok_or(PollError::TypeMismatch {
        context: "homeworks",
        expected: "array",
        found: json_type(homeworks),
    })?;

    let latest = list.first().ok_or(PollError::NoItemsAvailable)?;
    if !latest.is_object() {
        return Err(PollError::TypeMismatch {
            context: "homework",
            expected: "object",
            found: json_type(latest),
        });
    }

    Homework::deserialize(latest).map_err(|_| PollError::TypeMismatch {
        context: "homework",
        expected: "string name and status",
        found: "non-string value",
    })
}

fn as_object(response: &Value) -> Result<&Map<String, Value>, PollError> {
    response.as_object().ok_or(PollError::TypeMismatch {
        context: "response",
        expected: "object",
        found: json_type(response),
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
