// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON-file backend for [`KeyValueStore`].
//!
//! The whole namespace lives in one JSON object. Every write replaces the
//! file atomically (temp file in the same directory, then rename), so a crash
//! leaves either the old or the new contents on disk.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use medtriage_core::TriageError;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::store::{KeyValueStore, PrefValue, read_bool, read_string};

pub struct FileStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore")
            .field("path", &self.path)
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// also treated as empty and logged; it is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path);
        debug!(path = %path.display(), keys = entries.len(), "preference store opened");
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), TriageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(storage)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(storage)?;
        serde_json::to_writer_pretty(&mut tmp, &self.entries).map_err(storage)?;
        tmp.write_all(b"\n").map_err(storage)?;
        tmp.as_file().sync_all().map_err(storage)?;
        tmp.persist(&self.path).map_err(|e| storage(e.error))?;

        debug!(path = %self.path.display(), keys = self.entries.len(), "preferences written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_string(&self, key: &str) -> Option<String> {
        read_string(&self.entries, key)
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        read_bool(&self.entries, key)
    }

    fn put_all(&mut self, entries: Vec<(String, PrefValue)>) -> Result<(), TriageError> {
        let previous = self.entries.clone();
        for (key, value) in entries {
            self.entries.insert(key, value.into());
        }
        // Memory must not run ahead of disk.
        if let Err(e) = self.persist() {
            self.entries = previous;
            return Err(e);
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), TriageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(storage(e)),
        }
        self.entries.clear();
        debug!(path = %self.path.display(), "preferences cleared");
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

fn load_entries(path: &Path) -> Map<String, Value> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Map::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "preference file unreadable, starting empty");
            return Map::new();
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(entries)) => entries,
        Ok(_) => {
            warn!(path = %path.display(), "preference file is not a JSON object, starting empty");
            Map::new()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "preference file corrupt, starting empty");
            Map::new()
        }
    }
}

fn storage(e: impl std::error::Error + Send + Sync + 'static) -> TriageError {
    TriageError::Storage { source: Box::new(e) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("login_prefs.json"));
        assert!(store.is_empty());
        assert_eq!(store.get_string("patient_id"), None);
    }

    #[test]
    fn writes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("login_prefs.json");

        let mut store = FileStore::open(&path);
        store.put_string("patient_id", "P1").unwrap();
        store.put_bool("patient_remember", true).unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get_string("patient_id").as_deref(), Some("P1"));
        assert_eq!(reopened.get_bool("patient_remember"), Some(true));
    }

    #[test]
    fn corrupt_file_reads_empty_and_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("login_prefs.json");
        std::fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::open(&path);
        assert!(store.is_empty());

        store.put_string("doctor_id", "D1").unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["doctor_id"], "D1");
    }

    #[test]
    fn non_object_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("login_prefs.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(FileStore::open(&path).is_empty());
    }

    #[test]
    fn clear_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("login_prefs.json");
        let mut store = FileStore::open(&path);
        store.put_string("patient_id", "P1").unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
        assert!(store.is_empty());
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("login_prefs.json");
        let mut store = FileStore::open(&path);
        for i in 0..5 {
            store.put_string("patient_id", &format!("P{i}")).unwrap();
        }
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("login_prefs.json")]);
    }

    #[test]
    fn failed_write_keeps_memory_in_sync() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = dir.path().join("login_prefs.json");
        std::fs::create_dir(&path).unwrap();

        let mut store = FileStore::open(&path);
        let err = store.put_string("patient_id", "P1").unwrap_err();
        assert!(matches!(err, TriageError::Storage { .. }));
        assert_eq!(store.get_string("patient_id"), None);
    }
}
