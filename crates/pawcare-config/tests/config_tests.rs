// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Pawcare configuration system.

use pawcare_config::diagnostic::ConfigError;
use pawcare_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_pawcare_config() {
    let toml = r#"
[app]
log_level = "debug"

[api]
base_url = "http://localhost:4000/api"
timeout_secs = 10

[storage]
database_path = "/tmp/pawcare.db"
wal_mode = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.app.log_level, "debug");
    assert_eq!(config.api.base_url, "http://localhost:4000/api");
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(config.storage.database_path, "/tmp/pawcare.db");
    assert!(!config.storage.wal_mode);
}

/// Unknown field in a section produces an error mentioning the bad key.
#[test]
fn unknown_field_in_api_produces_error() {
    let toml = r#"
[api]
base_ulr = "http://localhost/api"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("base_ulr"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// The validating entry point rejects semantically invalid values even
/// when the TOML itself is well-formed.
#[test]
fn load_and_validate_rejects_bad_base_url() {
    let toml = r#"
[api]
base_url = "not-a-url"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("base_url"))
    ));
}

/// Wrong value type surfaces as an InvalidType diagnostic.
#[test]
fn wrong_type_produces_invalid_type_error() {
    let toml = r#"
[api]
timeout_secs = "soon"
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail extraction");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::InvalidType { .. })));
}

/// Empty input yields the compiled defaults, which must validate.
#[test]
fn empty_toml_yields_valid_defaults() {
    let config = load_and_validate_str("").expect("defaults should validate");
    assert_eq!(config.app.log_level, "info");
    assert_eq!(config.api.timeout_secs, 30);
}
