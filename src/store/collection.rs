//! Generic collection CRUD over the key-value layer.
//!
//! Every operation is a complete read-modify-write of one collection: the
//! stored JSON array is parsed, changed in memory, and written back whole.
//! That discipline is deliberate — it is the storage contract the portal's
//! pages were written against, and it keeps record-level last-writer-wins
//! semantics with no partial visibility window.

use std::path::Path;

use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{kv, StoreError};

/// A record type stored in a named collection.
///
/// `Draft` is the creation payload — the record minus its `id`, which the
/// store assigns. Records serialize as JSON objects with a stable `id`
/// field so partial updates can shallow-merge at the field level.
pub trait Entity: Serialize + DeserializeOwned {
    const COLLECTION: &'static str;
    type Draft: Serialize;

    fn id(&self) -> Uuid;
}

/// The record store: named, insertion-ordered collections of JSON records
/// over a single SQLite key-value table.
///
/// Collections are self-initializing — reading one that was never written
/// yields an empty sequence, so first run needs no provisioning step.
/// Constructed once and injected into every consumer; tests use
/// [`RecordStore::open_in_memory`].
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Open (or create) the on-disk store at `path` and run migrations.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            conn: kv::open_database(path)?,
        })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Ok(Self {
            conn: kv::open_memory_database()?,
        })
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    /// List the full collection in insertion order. Empty if uninitialized.
    pub fn list<T: Entity>(&self) -> Result<Vec<T>, StoreError> {
        let rows = self.read_rows(T::COLLECTION)?;
        rows.into_iter().map(decode::<T>).collect()
    }

    /// Look up one record by id. `None` is the not-found sentinel — callers
    /// routinely treat missing references as a benign placeholder.
    pub fn get<T: Entity>(&self, id: Uuid) -> Result<Option<T>, StoreError> {
        let rows = self.read_rows(T::COLLECTION)?;
        rows.into_iter()
            .find(|row| row_id(row) == Some(id))
            .map(decode::<T>)
            .transpose()
    }

    /// All records whose `field` equals `value`, in insertion order.
    pub fn filter_by<T: Entity, V: Serialize>(
        &self,
        field: &str,
        value: V,
    ) -> Result<Vec<T>, StoreError> {
        let needle = serde_json::to_value(value)?;
        let rows = self.read_rows(T::COLLECTION)?;
        rows.into_iter()
            .filter(|row| row.get(field) == Some(&needle))
            .map(decode::<T>)
            .collect()
    }

    /// Create a record: assign a fresh id, append, persist the collection.
    pub fn create<T: Entity>(&self, draft: &T::Draft) -> Result<T, StoreError> {
        let mut rows = self.read_rows(T::COLLECTION)?;
        let row = draft_row::<T>(draft)?;
        let record = decode::<T>(row.clone())?;
        rows.push(row);
        self.write_rows(T::COLLECTION, &rows)?;
        Ok(record)
    }

    /// Create several records with a single persist. Semantically identical
    /// to repeated [`RecordStore::create`] calls, without rewriting the
    /// collection once per record.
    pub fn create_many<T: Entity>(&self, drafts: &[T::Draft]) -> Result<Vec<T>, StoreError> {
        let mut rows = self.read_rows(T::COLLECTION)?;
        let mut records = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let row = draft_row::<T>(draft)?;
            records.push(decode::<T>(row.clone())?);
            rows.push(row);
        }
        self.write_rows(T::COLLECTION, &rows)?;
        Ok(records)
    }

    /// Shallow-merge `patch` into the record with `id` and persist.
    ///
    /// Only fields present in the serialized patch change; everything else
    /// is preserved as stored. Returns `StoreError::NotFound` — leaving the
    /// collection untouched — if the id is absent, so callers can tell a
    /// failed update apart from a successful one and roll back optimistic
    /// state.
    pub fn update<T: Entity, P: Serialize>(&self, id: Uuid, patch: &P) -> Result<T, StoreError> {
        let mut rows = self.read_rows(T::COLLECTION)?;
        let row = rows
            .iter_mut()
            .find(|row| row_id(row) == Some(id))
            .ok_or(StoreError::NotFound {
                collection: T::COLLECTION,
                id: id.to_string(),
            })?;

        let patch_obj = into_object(serde_json::to_value(patch)?, T::COLLECTION)?;
        for (key, value) in patch_obj {
            if key != "id" {
                row.insert(key, value);
            }
        }

        let record = decode::<T>(row.clone())?;
        self.write_rows(T::COLLECTION, &rows)?;
        Ok(record)
    }

    /// Remove the record with `id`. No-op safe: returns whether anything
    /// was removed, and absent ids are not an error.
    pub fn delete<T: Entity>(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut rows = self.read_rows(T::COLLECTION)?;
        let before = rows.len();
        rows.retain(|row| row_id(row) != Some(id));
        if rows.len() == before {
            return Ok(false);
        }
        self.write_rows(T::COLLECTION, &rows)?;
        Ok(true)
    }

    fn read_rows(&self, collection: &str) -> Result<Vec<Map<String, Value>>, StoreError> {
        let Some(payload) = kv::read_key(&self.conn, collection)? else {
            return Ok(Vec::new());
        };
        let value: Value = serde_json::from_str(&payload)?;
        let Value::Array(items) = value else {
            return Err(StoreError::Corrupt(format!(
                "collection {collection} is not an array"
            )));
        };
        items
            .into_iter()
            .map(|item| into_object(item, collection))
            .collect()
    }

    fn write_rows(
        &self,
        collection: &str,
        rows: &[Map<String, Value>],
    ) -> Result<(), StoreError> {
        let payload = serde_json::to_string(rows)?;
        kv::write_key(&self.conn, collection, &payload)
    }
}

/// Serialize a draft and stamp it with a fresh UUID v4 id.
///
/// UUIDs rather than timestamps: rapid successive creates must never
/// collide within a collection.
fn draft_row<T: Entity>(draft: &T::Draft) -> Result<Map<String, Value>, StoreError> {
    let mut row = into_object(serde_json::to_value(draft)?, T::COLLECTION)?;
    row.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
    Ok(row)
}

fn decode<T: Entity>(row: Map<String, Value>) -> Result<T, StoreError> {
    Ok(serde_json::from_value(Value::Object(row))?)
}

fn row_id(row: &Map<String, Value>) -> Option<Uuid> {
    row.get("id")?.as_str().and_then(|s| Uuid::parse_str(s).ok())
}

fn into_object(value: Value, collection: &str) -> Result<Map<String, Value>, StoreError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Corrupt(format!(
            "expected JSON object in {collection}, got {other}"
        ))),
    }
}
