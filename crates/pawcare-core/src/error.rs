// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Pawcare client.

use thiserror::Error;

/// The primary error type used across the Pawcare crates.
#[derive(Debug, Error)]
pub enum PawcareError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// A diet budget outside the accepted range or not a usable number.
    ///
    /// Recoverable: the caller should prompt the user to re-enter a value.
    #[error("invalid budget {value}: {reason}")]
    InvalidBudget { value: f64, reason: String },

    /// Local key-value store I/O failure (read or write).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Remote API transport or decode failure.
    #[error("api error: {message}")]
    Api {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The remote service refused a diet generation because its own
    /// cooldown window is still open (HTTP 429).
    #[error("diet cooldown active: {message}")]
    CooldownActive { message: String },

    /// Session token missing, expired, or rejected (HTTP 401/403).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PawcareError {
    /// Wrap any error as a storage failure.
    pub fn storage<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage {
            source: Box::new(source),
        }
    }

    /// Build an API error from a plain message with no underlying source.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            source: None,
        }
    }
}
