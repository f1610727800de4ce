//! Key-value persistence seam and the typed collection layer above it.

use std::{collections::HashMap, sync::Mutex};

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::CoreError;

/// Abstraction over key-value persistence backends.
///
/// Every operation is idempotent and needs no prior initialization: the
/// first `write` creates the key, and removing an absent key succeeds.
pub trait KeyValueStore: Send + Sync {
    /// Returns the raw payload stored at `key`, or `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>, CoreError>;
    /// Replaces whatever is stored at `key` with `payload`, in full.
    fn write(&self, key: &str, payload: &str) -> Result<(), CoreError>;
    /// Deletes the payload at `key`.
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// Reads and deserializes the collection stored at `key`.
///
/// An absent key yields an empty collection. A backend failure or a
/// malformed payload also degrades to empty: the condition is logged and
/// never surfaced to the caller.
pub fn read_collection<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let payload = match store.read(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(key, %err, "failed to read collection, treating as empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&payload) {
        Ok(records) => records,
        Err(err) => {
            warn!(key, %err, "malformed collection payload, treating as empty");
            Vec::new()
        }
    }
}

/// Serializes `records` and replaces the collection stored at `key`.
pub fn write_collection<T, S>(store: &S, key: &str, records: &[T]) -> Result<(), CoreError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let payload =
        serde_json::to_string_pretty(records).map_err(|err| CoreError::Serde(err.to_string()))?;
    store.write(key, &payload)
}

/// In-memory key-value backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("store mutex poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("store mutex poisoned".into()))?;
        entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("store mutex poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketmint_domain::{ExpenseCategory, NewExpense};

    #[test]
    fn collections_round_trip_including_empty() {
        let store = MemoryStore::new();
        let empty: Vec<NewExpense> = Vec::new();
        write_collection(&store, "expenses", &empty).unwrap();
        assert!(read_collection::<NewExpense, _>(&store, "expenses").is_empty());

        let records = vec![NewExpense {
            amount: 12.0,
            category: ExpenseCategory::Shopping,
            description: String::new(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        }];
        write_collection(&store, "expenses", &records).unwrap();
        let restored: Vec<NewExpense> = read_collection(&store, "expenses");
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].amount, 12.0);
    }

    #[test]
    fn absent_key_reads_as_empty() {
        let store = MemoryStore::new();
        assert!(read_collection::<NewExpense, _>(&store, "missing").is_empty());
    }

    #[test]
    fn malformed_payload_degrades_to_empty() {
        let store = MemoryStore::new();
        store.write("expenses", "{not json").unwrap();
        assert!(read_collection::<NewExpense, _>(&store, "expenses").is_empty());
        // The stored payload is left untouched for inspection.
        assert_eq!(store.read("expenses").unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn removing_an_absent_key_is_ok() {
        let store = MemoryStore::new();
        store.remove("missing").unwrap();
        store.remove("missing").unwrap();
    }
}
