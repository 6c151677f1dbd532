// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Medtriage client.
//!
//! This crate provides the error taxonomy and the wire data types shared by
//! the HTTP client, the preference store, and the display helpers.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{FailureKind, TriageError};
pub use types::{AccountKind, AccountRef, DiseaseRisk, Probability, TriageLevel};
