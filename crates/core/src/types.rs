/// Vessel and pump identifiers are random UUIDs assigned at startup.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
