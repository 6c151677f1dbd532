// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Medtriage client.

use strum::{Display, EnumString};
use thiserror::Error;

/// Message shown to the user when the backend could not be reached.
pub const TRANSPORT_USER_MESSAGE: &str =
    "Unable to reach the server. Check your connection and try again.";

/// Message shown to the user when the backend replied with something unreadable.
pub const DECODE_USER_MESSAGE: &str = "The server sent an unexpected response. Please try again.";

/// The primary error type used across the client, preference store, and CLI.
#[derive(Debug, Error)]
pub enum TriageError {
    /// Configuration errors (invalid base URL, bad header values, unreadable config).
    #[error("configuration error: {0}")]
    Config(String),

    /// The request never produced a response (connect failure, timeout, body read).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend answered with a non-success status and no `error` envelope.
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("decode error: {message}")]
    Decode {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend reported an application-level failure through its `error` field.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Local preference store errors (file I/O, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Input rejected locally before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Coarse failure category used by callers to decide what to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum FailureKind {
    /// No usable response: retryable by the user.
    Transport,
    /// A response arrived but could not be understood.
    Decoding,
    /// The backend declined the request and said why.
    Application,
    /// Failure that never left the device.
    Local,
}

impl TriageError {
    /// Classifies the error into one of the caller-visible failure categories.
    pub fn kind(&self) -> FailureKind {
        match self {
            TriageError::Transport { .. } | TriageError::Status { .. } => FailureKind::Transport,
            TriageError::Decode { .. } => FailureKind::Decoding,
            TriageError::Api { .. } => FailureKind::Application,
            TriageError::Config(_)
            | TriageError::Storage { .. }
            | TriageError::InvalidInput(_)
            | TriageError::Internal(_) => FailureKind::Local,
        }
    }

    /// Returns true when the user can reasonably retry the same action.
    pub fn is_retryable(&self) -> bool {
        self.kind() == FailureKind::Transport
    }

    /// Text suitable for direct display to the user.
    ///
    /// Backend-declared failures are surfaced verbatim.
    pub fn user_message(&self) -> String {
        match self {
            TriageError::Api { message, .. } => message.clone(),
            TriageError::Transport { .. } | TriageError::Status { .. } => {
                TRANSPORT_USER_MESSAGE.to_string()
            }
            TriageError::Decode { .. } => DECODE_USER_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
