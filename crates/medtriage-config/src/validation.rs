// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as URL schemes, timeout bounds, and strftime patterns.

use chrono::format::{Item, StrftimeItems};

use crate::diagnostic::ConfigError;
use crate::model::MedtriageConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Largest accepted request timeout.
const MAX_TIMEOUT_SECS: u64 = 600;

/// Real-world UTC offsets range from -12:00 to +14:00.
const MIN_OFFSET_MINUTES: i32 = -12 * 60;
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &MedtriageConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        errors.push(validation("api.base_url must not be empty".to_string()));
    } else {
        let host = base_url
            .strip_prefix("https://")
            .or_else(|| base_url.strip_prefix("http://"));
        match host {
            Some(rest) if !rest.is_empty() && !rest.starts_with('/') => {}
            Some(_) => errors.push(validation(format!(
                "api.base_url `{base_url}` has no host"
            ))),
            None => errors.push(validation(format!(
                "api.base_url `{base_url}` must start with http:// or https://"
            ))),
        }
    }

    if config.api.timeout_secs == 0 || config.api.timeout_secs > MAX_TIMEOUT_SECS {
        errors.push(validation(format!(
            "api.timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}, got {}",
            config.api.timeout_secs
        )));
    }

    if config.storage.prefs_path.trim().is_empty() {
        errors.push(validation("storage.prefs_path must not be empty".to_string()));
    }

    let offset = config.display.utc_offset_minutes;
    if !(MIN_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&offset) {
        errors.push(validation(format!(
            "display.utc_offset_minutes must be between {MIN_OFFSET_MINUTES} and {MAX_OFFSET_MINUTES}, got {offset}"
        )));
    }

    let pattern = &config.display.timestamp_pattern;
    if pattern.trim().is_empty() {
        errors.push(validation(
            "display.timestamp_pattern must not be empty".to_string(),
        ));
    } else if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        errors.push(validation(format!(
            "display.timestamp_pattern `{pattern}` is not a valid strftime pattern"
        )));
    }

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(validation(format!(
            "logging.level `{}` must be one of: {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        )));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validation(message: String) -> ConfigError {
    ConfigError::Validation { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_error(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        let config = MedtriageConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn base_url_without_scheme_fails() {
        let mut config = MedtriageConfig::default();
        config.api.base_url = "triage.example.com/api/".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "http:// or https://"));
    }

    #[test]
    fn base_url_without_host_fails() {
        let mut config = MedtriageConfig::default();
        config.api.base_url = "https:///api/".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "has no host"));
    }

    #[test]
    fn zero_timeout_fails() {
        let mut config = MedtriageConfig::default();
        config.api.timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "api.timeout_secs"));
    }

    #[test]
    fn out_of_range_offset_fails() {
        let mut config = MedtriageConfig::default();
        config.display.utc_offset_minutes = 15 * 60;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "utc_offset_minutes"));
    }

    #[test]
    fn invalid_strftime_pattern_fails() {
        let mut config = MedtriageConfig::default();
        config.display.timestamp_pattern = "%Q %d".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "strftime"));
    }

    #[test]
    fn unknown_log_level_fails() {
        let mut config = MedtriageConfig::default();
        config.logging.level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "logging.level"));
    }

    #[test]
    fn errors_are_collected_not_fail_fast() {
        let mut config = MedtriageConfig::default();
        config.api.base_url = String::new();
        config.storage.prefs_path = " ".to_string();
        config.logging.level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn valid_custom_config_passes() {
        let mut config = MedtriageConfig::default();
        config.api.base_url = "https://triage.example.com/api/".to_string();
        config.api.timeout_secs = 60;
        config.display.utc_offset_minutes = -300;
        config.display.timestamp_pattern = "%Y-%m-%d %H:%M".to_string();
        config.logging.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
