pub mod collection;
pub mod kv;
pub mod repository;

pub use collection::{Entity, RecordStore};

use thiserror::Error;

/// Errors from the record store.
///
/// `NotFound` is the only variant callers are expected to recover from;
/// the rest indicate a failure of the storage medium itself and should be
/// logged, not swallowed.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Corrupt collection payload: {0}")]
    Corrupt(String),

    #[error("Record not found in {collection}: {id}")]
    NotFound { collection: &'static str, id: String },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },
}

impl StoreError {
    /// Whether this error means the addressed record does not exist.
    /// Callers use this to decide between rolling back an optimistic
    /// change and surfacing a storage failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
