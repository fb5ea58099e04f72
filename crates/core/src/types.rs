/// All surrogate primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Server-side timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Client-supplied instants, as milliseconds since the Unix epoch.
pub type EpochMillis = i64;
