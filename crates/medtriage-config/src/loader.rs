// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./medtriage.toml` > `~/.config/medtriage/medtriage.toml` >
//! `/etc/medtriage/medtriage.toml`, with `MEDTRIAGE_` environment overrides on top.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::MedtriageConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/medtriage/medtriage.toml";

/// Config file name looked up in the working directory and the XDG config dir.
pub const CONFIG_FILE_NAME: &str = "medtriage.toml";

/// The per-user config file, if a config directory exists on this platform.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("medtriage").join(CONFIG_FILE_NAME))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/medtriage/medtriage.toml`
/// 3. `~/.config/medtriage/medtriage.toml`
/// 4. `./medtriage.toml`
/// 5. `MEDTRIAGE_*` environment variables
pub fn load_config() -> Result<MedtriageConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<MedtriageConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MedtriageConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from an explicit file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MedtriageConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MedtriageConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the layered Figment before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(MedtriageConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(CONFIG_FILE_NAME))
        .merge(env_provider())
}

/// Maps `MEDTRIAGE_<SECTION>_<KEY>` onto `section.key`.
///
/// Figment passes the key with the prefix stripped but case preserved
/// (`API_BASE_URL`), so it is lowercased before matching.
///
/// Only the first underscore after the section name is turned into a dot, so
/// `MEDTRIAGE_API_BASE_URL` becomes `api.base_url`, not `api.base.url`.
/// `MEDTRIAGE_PASSWORD` feeds the CLI password prompt and is not configuration.
fn env_provider() -> Env {
    Env::prefixed("MEDTRIAGE_")
        .ignore(&["password"])
        .map(|key| map_env_key(key.as_str()).into())
}

fn map_env_key(key: &str) -> String {
    const SECTIONS: [&str; 4] = ["api", "storage", "display", "logging"];

    let key = key.to_ascii_lowercase();
    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key
}
