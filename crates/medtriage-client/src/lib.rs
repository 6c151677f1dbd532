// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Medtriage symptom-triage backend.
//!
//! [`TriageClient`] sends typed request records to the backend and decodes
//! its responses into `medtriage_core` types. Operations are grouped into
//! facades: [`PatientApi`], [`DoctorApi`], [`AiApi`], and the account flows
//! shared by both kinds in [`AccountApi`].
//!
//! ```no_run
//! # async fn run() -> Result<(), medtriage_core::TriageError> {
//! use medtriage_client::TriageClient;
//! use medtriage_config::model::ApiConfig;
//!
//! let client = TriageClient::new(&ApiConfig::default())?;
//! let catalog = client.ai().symptoms().await?;
//! println!("{} symptoms", catalog.symptoms.len());
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod ai;
pub mod client;
pub mod doctor;
pub mod endpoint;
pub mod multipart;
pub mod patient;

pub use account::AccountApi;
pub use ai::AiApi;
pub use client::{TriageClient, decode_envelope};
pub use doctor::DoctorApi;
pub use endpoint::{BodyKind, Endpoint};
pub use multipart::{FilePart, FormFields};
pub use patient::PatientApi;
