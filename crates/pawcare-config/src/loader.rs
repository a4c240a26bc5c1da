// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./pawcare.toml` > `~/.config/pawcare/pawcare.toml`
//! > `/etc/pawcare/pawcare.toml`, with environment variable overrides via
//! the `PAWCARE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PawcareConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/pawcare/pawcare.toml` (system-wide)
/// 3. `~/.config/pawcare/pawcare.toml` (user XDG config)
/// 4. `./pawcare.toml` (local directory)
/// 5. `PAWCARE_*` environment variables
pub fn load_config() -> Result<PawcareConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PawcareConfig::default()))
        .merge(Toml::file("/etc/pawcare/pawcare.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("pawcare/pawcare.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("pawcare.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PawcareConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PawcareConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PawcareConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PawcareConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider with explicit section mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that key names
/// containing underscores stay intact: `PAWCARE_API_BASE_URL` must map to
/// `api.base_url`, not `api.base.url`.
fn env_provider() -> Env {
    Env::prefixed("PAWCARE_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("app_", "app.", 1)
            .replacen("api_", "api.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_loader_merges_over_defaults() {
        let config = load_config_from_str(
            r#"
[storage]
database_path = "/tmp/pawcare-test.db"
"#,
        )
        .unwrap();
        assert_eq!(config.storage.database_path, "/tmp/pawcare-test.db");
        // Untouched sections keep their defaults.
        assert_eq!(config.app.log_level, "info");
    }

    #[test]
    fn env_override_maps_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PAWCARE_API_BASE_URL", "http://127.0.0.1:9000/api");
            jail.set_env("PAWCARE_APP_LOG_LEVEL", "debug");
            let config: PawcareConfig = Figment::new()
                .merge(Serialized::defaults(PawcareConfig::default()))
                .merge(env_provider())
                .extract()?;
            assert_eq!(config.api.base_url, "http://127.0.0.1:9000/api");
            assert_eq!(config.app.log_level, "debug");
            Ok(())
        });
    }
}
