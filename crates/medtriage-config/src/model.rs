// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Medtriage client.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Default display pattern: `dd MMM yyyy, hh:mm a` in strftime form.
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%d %b %Y, %I:%M %p";

/// India Standard Time, UTC+05:30.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;

/// Top-level Medtriage configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MedtriageConfig {
    /// Backend connection settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Local preference file settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Timestamp rendering settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend HTTP API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto. Must end with `/`
    /// for relative joins to keep the last segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api/".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("medtriage/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Local preference store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the JSON file holding remembered credentials.
    #[serde(default = "default_prefs_path")]
    pub prefs_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            prefs_path: default_prefs_path(),
        }
    }
}

fn default_prefs_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("medtriage").join("login_prefs.json"))
        .unwrap_or_else(|| std::path::PathBuf::from("login_prefs.json"))
        .to_string_lossy()
        .into_owned()
}

/// Timestamp display configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Offset from UTC, in minutes, that timestamps are shown in.
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,

    /// strftime pattern used when a caller does not supply one.
    #[serde(default = "default_timestamp_pattern")]
    pub timestamp_pattern: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: default_utc_offset_minutes(),
            timestamp_pattern: default_timestamp_pattern(),
        }
    }
}

fn default_utc_offset_minutes() -> i32 {
    DEFAULT_UTC_OFFSET_MINUTES
}

fn default_timestamp_pattern() -> String {
    DEFAULT_TIMESTAMP_PATTERN.to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
