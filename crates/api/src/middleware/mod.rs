//! Request extractors and middleware.
//!
//! - [`validated_json::ValidatedJson`] -- Decodes a JSON body and runs its field rules.
//! - [`path_param::PathParam`] -- Path segments with JSON error bodies on parse failure.
//! - [`request_log::log_request`] -- Optional per-request debug line (`LOG_REQUESTS`).

pub mod path_param;
pub mod request_log;
pub mod validated_json;
