//! JSON body extractor that enforces field rules before the handler runs.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use pupil_core::error::CoreError;
use pupil_core::validation::{validate_input, FieldViolation};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";
const SYNTAX_ERROR_PREFIX: &str = "Failed to parse the request body as JSON: ";

/// Like [`Json`], but rejects with a 422 `VALIDATION_ERROR` carrying
/// per-field details when the body is malformed or fails its
/// [`Validate`] rules.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateSession>) -> AppResult<()> {
///     // `input` has already passed length and range checks here.
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        validate_input(&value)?;
        Ok(Self(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let text = err.body_text();
            let detail = text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(text.as_str());
            AppError::Core(CoreError::Validation(vec![violation_from_serde(detail)]))
        }
        JsonRejection::JsonSyntaxError(err) => {
            let text = err.body_text();
            let detail = text.strip_prefix(SYNTAX_ERROR_PREFIX).unwrap_or(text.as_str());
            AppError::Core(CoreError::Validation(vec![FieldViolation::body(detail)]))
        }
        JsonRejection::MissingJsonContentType(err) => {
            AppError::UnsupportedMediaType(err.body_text())
        }
        other => AppError::BadRequest(other.body_text()),
    }
}

/// Recover the offending field from a serde decode message.
///
/// Handles `missing field `name` ...` and the `path: message` form
/// produced for type mismatches. Anything else is reported against the
/// body as a whole.
fn violation_from_serde(detail: &str) -> FieldViolation {
    if let Some(rest) = detail.strip_prefix("missing field `") {
        if let Some((field, _)) = rest.split_once('`') {
            return FieldViolation::new(field, "field required");
        }
    }

    if let Some((path, message)) = detail.split_once(": ") {
        if !path.is_empty() && !path.contains(char::is_whitespace) {
            return FieldViolation::new(path, message);
        }
    }

    FieldViolation::body(detail)
}
