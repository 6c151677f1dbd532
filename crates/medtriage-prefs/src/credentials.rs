// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed "remember me" credentials per account kind.
//!
//! Each kind owns three keys: `<kind>_id`, `<kind>_password`, and
//! `<kind>_remember`. The namespace never holds more than six keys.

use medtriage_core::{AccountKind, TriageError};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::store::{KeyValueStore, PrefValue};

/// Credentials remembered for one account kind.
///
/// `Debug` output redacts the password.
#[derive(Debug)]
pub struct SavedCredentials {
    pub identifier: String,
    pub password: SecretString,
    pub remember: bool,
}

impl SavedCredentials {
    /// The `("", "", false)` default returned when nothing is remembered.
    pub fn empty() -> Self {
        Self {
            identifier: String::new(),
            password: SecretString::from(String::new()),
            remember: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.identifier.is_empty() && self.password.expose_secret().is_empty() && !self.remember
    }
}

impl Default for SavedCredentials {
    fn default() -> Self {
        Self::empty()
    }
}

struct Keys {
    id: &'static str,
    password: &'static str,
    remember: &'static str,
}

fn keys(kind: AccountKind) -> Keys {
    match kind {
        AccountKind::Patient => Keys {
            id: "patient_id",
            password: "patient_password",
            remember: "patient_remember",
        },
        AccountKind::Doctor => Keys {
            id: "doctor_id",
            password: "doctor_password",
            remember: "doctor_remember",
        },
    }
}

/// Credential accessors over any [`KeyValueStore`].
#[derive(Debug)]
pub struct CredentialStore<S> {
    store: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saves or forgets credentials for `kind`.
    ///
    /// With `remember` the values are stored verbatim. Without it the
    /// entries are overwritten with empty strings and a false flag, so a
    /// later [`load`](Self::load) returns the empty default.
    pub fn save(
        &mut self,
        kind: AccountKind,
        identifier: &str,
        password: &str,
        remember: bool,
    ) -> Result<(), TriageError> {
        let keys = keys(kind);
        let (identifier, password) = if remember {
            (identifier.to_string(), password.to_string())
        } else {
            (String::new(), String::new())
        };

        self.store.put_all(vec![
            (keys.id.to_string(), PrefValue::Str(identifier)),
            (keys.password.to_string(), PrefValue::Str(password)),
            (keys.remember.to_string(), PrefValue::Bool(remember)),
        ])?;
        debug!(kind = %kind, remember, "credentials saved");
        Ok(())
    }

    /// Loads credentials for `kind`, defaulting each missing value.
    pub fn load(&self, kind: AccountKind) -> SavedCredentials {
        let keys = keys(kind);
        SavedCredentials {
            identifier: self.store.get_string(keys.id).unwrap_or_default(),
            password: SecretString::from(self.store.get_string(keys.password).unwrap_or_default()),
            remember: self.store.get_bool(keys.remember).unwrap_or(false),
        }
    }

    /// Erases remembered credentials for both kinds.
    pub fn clear_all(&mut self) -> Result<(), TriageError> {
        self.store.clear()?;
        debug!("all credentials cleared");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::FileStore;
    use crate::store::MemoryStore;

    #[test]
    fn remembered_credentials_round_trip() {
        let mut creds = CredentialStore::new(MemoryStore::new());
        creds.save(AccountKind::Patient, "P1", "Abcdef1!", true).unwrap();

        let loaded = creds.load(AccountKind::Patient);
        assert_eq!(loaded.identifier, "P1");
        assert_eq!(loaded.password.expose_secret(), "Abcdef1!");
        assert!(loaded.remember);
    }

    #[test]
    fn not_remembering_overwrites_with_empty_values() {
        let mut creds = CredentialStore::new(MemoryStore::new());
        creds.save(AccountKind::Doctor, "D1", "Abcdef1!", true).unwrap();
        creds.save(AccountKind::Doctor, "D1", "Abcdef1!", false).unwrap();

        let loaded = creds.load(AccountKind::Doctor);
        assert_eq!(loaded.identifier, "");
        assert_eq!(loaded.password.expose_secret(), "");
        assert!(!loaded.remember);
        assert!(loaded.is_empty());
    }

    #[test]
    fn kinds_are_independent() {
        let mut creds = CredentialStore::new(MemoryStore::new());
        creds.save(AccountKind::Patient, "P1", "pw-p", true).unwrap();
        creds.save(AccountKind::Doctor, "D1", "pw-d", true).unwrap();

        assert_eq!(creds.load(AccountKind::Patient).identifier, "P1");
        assert_eq!(creds.load(AccountKind::Doctor).identifier, "D1");
        assert_eq!(creds.store().len(), 6);
    }

    #[test]
    fn clear_all_resets_both_kinds() {
        let mut creds = CredentialStore::new(MemoryStore::new());
        creds.save(AccountKind::Patient, "P1", "pw", true).unwrap();
        creds.save(AccountKind::Doctor, "D1", "pw", true).unwrap();
        creds.clear_all().unwrap();

        for kind in AccountKind::ALL {
            assert!(creds.load(kind).is_empty());
        }
    }

    #[test]
    fn empty_store_loads_defaults() {
        let creds = CredentialStore::new(MemoryStore::new());
        let loaded = creds.load(AccountKind::Patient);
        assert!(loaded.is_empty());
    }

    #[test]
    fn debug_redacts_password() {
        let mut creds = CredentialStore::new(MemoryStore::new());
        creds.save(AccountKind::Patient, "P1", "hunter2-secret", true).unwrap();
        let debug = format!("{:?}", creds.load(AccountKind::Patient));
        assert!(debug.contains("P1"));
        assert!(!debug.contains("hunter2-secret"));
    }

    #[test]
    fn file_backed_credentials_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("login_prefs.json");

        let mut creds = CredentialStore::new(FileStore::open(&path));
        creds.save(AccountKind::Doctor, "D7", "Abcdef1!", true).unwrap();
        drop(creds);

        let creds = CredentialStore::new(FileStore::open(&path));
        let loaded = creds.load(AccountKind::Doctor);
        assert_eq!(loaded.identifier, "D7");
        assert_eq!(loaded.password.expose_secret(), "Abcdef1!");
        assert!(loaded.remember);
        assert!(creds.load(AccountKind::Patient).is_empty());
    }
}
