//! Row models and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the database row
//! - A `Deserialize` + `Validate` create DTO carrying the field-level rules
//! - An update DTO (all `Option` fields) where the entity is mutable

pub mod event_log;
pub mod eye_tracking;
pub mod feedback;
pub mod sam;
pub mod session;
pub mod tlx;
pub mod trial;
pub mod trial_response;
