//! Field-level shape checks for inbound request bodies.
//!
//! Request DTOs derive [`validator::Validate`] with shape rules only:
//! maximum text lengths matching the stored column widths, and the JSON
//! object check on event payloads. Values themselves (negative times, empty
//! strings) are stored as sent. This module supplies the custom rule and
//! flattens [`validator::ValidationErrors`] into [`FieldViolation`]s for the
//! HTTP error body.

use std::borrow::Cow;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Maximum length of `session_id` and `participant_id`.
pub const MAX_ID_LEN: u64 = 100;

/// Maximum length of a trial response `selected_option`.
pub const MAX_OPTION_LEN: u64 = 10;

/// Maximum length of an event log `event_type`.
pub const MAX_EVENT_TYPE_LEN: u64 = 50;

/// Maximum length of a catalog `stimulus_url`.
pub const MAX_URL_LEN: u64 = 255;

/// One rejected field in a request body.
///
/// `field` is `None` when the body as a whole could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// A violation that applies to the whole body rather than one field.
    pub fn body(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

/// Run the derived rules on `input`, mapping failures to [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(collect_violations(&errors)))
}

/// Flatten validator errors into a stable, field-sorted list.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |e| FieldViolation::new(field.to_string(), describe(e)))
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }
    let param = |name: &str| error.params.get(name).map(|v| v.to_string());
    match error.code.as_ref() {
        "length" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("length must be between {min} and {max}"),
            (None, Some(max)) => format!("length must be at most {max}"),
            (Some(min), None) => format!("length must be at least {min}"),
            (None, None) => "invalid length".to_string(),
        },
        "range" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("must be between {min} and {max}"),
            (Some(min), None) => format!("must be at least {min}"),
            (None, Some(max)) => format!("must be at most {max}"),
            (None, None) => "out of range".to_string(),
        },
        code => format!("failed check '{code}'"),
    }
}

/// Event payloads are free-form but must be a JSON object.
pub fn validate_json_object(value: &serde_json::Value) -> Result<(), ValidationError> {
    if !value.is_object() {
        return Err(ValidationError::new("json_object")
            .with_message(Cow::Borrowed("must be a JSON object")));
    }
    Ok(())
}
