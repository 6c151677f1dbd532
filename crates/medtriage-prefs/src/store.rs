// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat key-value store abstraction and its in-memory backend.

use medtriage_core::TriageError;
use serde_json::{Map, Value};

/// A single value to write in a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefValue {
    Str(String),
    Bool(bool),
}

impl From<PrefValue> for Value {
    fn from(value: PrefValue) -> Self {
        match value {
            PrefValue::Str(s) => Value::String(s),
            PrefValue::Bool(b) => Value::Bool(b),
        }
    }
}

/// A flat, namespaced map of string and boolean preferences.
///
/// Reads never fail: a missing key or a value of the wrong type reads as
/// `None`. Writes are durable once they return `Ok`.
pub trait KeyValueStore {
    fn get_string(&self, key: &str) -> Option<String>;

    fn get_bool(&self, key: &str) -> Option<bool>;

    fn put_string(&mut self, key: &str, value: &str) -> Result<(), TriageError> {
        self.put_all(vec![(key.to_string(), PrefValue::Str(value.to_string()))])
    }

    fn put_bool(&mut self, key: &str, value: bool) -> Result<(), TriageError> {
        self.put_all(vec![(key.to_string(), PrefValue::Bool(value))])
    }

    /// Writes several entries as one update.
    fn put_all(&mut self, entries: Vec<(String, PrefValue)>) -> Result<(), TriageError>;

    /// Erases every key in the namespace.
    fn clear(&mut self) -> Result<(), TriageError>;

    /// Number of stored keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub(crate) fn read_string(entries: &Map<String, Value>, key: &str) -> Option<String> {
    entries.get(key)?.as_str().map(str::to_owned)
}

pub(crate) fn read_bool(entries: &Map<String, Value>, key: &str) -> Option<bool> {
    entries.get(key)?.as_bool()
}

/// Process-local store, used by tests and one-shot commands.
#[derive(Default, Clone)]
pub struct MemoryStore {
    entries: Map<String, Value>,
}

// Values may be passwords; only key names are shown.
impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        read_string(&self.entries, key)
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        read_bool(&self.entries, key)
    }

    fn put_all(&mut self, entries: Vec<(String, PrefValue)>) -> Result<(), TriageError> {
        for (key, value) in entries {
            self.entries.insert(key, value.into());
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), TriageError> {
        self.entries.clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_reads_ignore_mismatched_values() {
        let mut store = MemoryStore::new();
        store.put_string("patient_id", "P1").unwrap();
        store.put_bool("patient_remember", true).unwrap();

        assert_eq!(store.get_string("patient_id").as_deref(), Some("P1"));
        assert_eq!(store.get_bool("patient_remember"), Some(true));
        assert_eq!(store.get_bool("patient_id"), None);
        assert_eq!(store.get_string("patient_remember"), None);
        assert_eq!(store.get_string("missing"), None);
    }

    #[test]
    fn put_overwrites_and_clear_empties() {
        let mut store = MemoryStore::new();
        store.put_string("doctor_id", "D1").unwrap();
        store.put_string("doctor_id", "D2").unwrap();
        assert_eq!(store.get_string("doctor_id").as_deref(), Some("D2"));
        assert_eq!(store.len(), 1);

        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn debug_shows_keys_not_values() {
        let mut store = MemoryStore::new();
        store.put_string("patient_password", "hunter2").unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("patient_password"));
        assert!(!debug.contains("hunter2"));
    }
}
