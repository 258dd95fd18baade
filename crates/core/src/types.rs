/// All primary keys are UUIDv7, generated application-side at insert time.
///
/// v7 identifiers are time-ordered, so freshly created rows sort last by id
/// as well as by `created_at`.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
