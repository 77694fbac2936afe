/// All primary keys are UUID v4, generated by the database and exposed as opaque strings.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
