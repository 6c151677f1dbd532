// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local preference store for Medtriage.
//!
//! Remembers login credentials per account kind between runs. The storage
//! backend is pluggable through [`KeyValueStore`]; [`FileStore`] keeps one
//! JSON file per namespace and [`MemoryStore`] keeps nothing on disk.

pub mod credentials;
pub mod file;
pub mod store;

pub use credentials::{CredentialStore, SavedCredentials};
pub use file::FileStore;
pub use store::{KeyValueStore, MemoryStore, PrefValue};
