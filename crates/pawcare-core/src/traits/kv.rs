// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-value store capability for durable local persistence.

use async_trait::async_trait;

use crate::error::PawcareError;

/// Durable string-keyed storage on the local device.
///
/// Backends persist values across process restarts. Absence of a key is
/// a valid, expected state and is reported as `Ok(None)`, never as an
/// error; errors mean the read or write itself failed.
#[async_trait]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, PawcareError>;

    /// Write `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), PawcareError>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), PawcareError>;
}
