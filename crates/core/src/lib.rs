//! Shared domain types for the pupil study backend.
//!
//! Holds the primitive type aliases, the domain error type, and the
//! field-level validation helpers used by the request DTOs in `pupil-db`.

pub mod error;
pub mod types;
pub mod validation;
