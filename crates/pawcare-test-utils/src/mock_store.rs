// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory key-value store with failure injection.
//!
//! `MemoryKvStore` implements `KeyValueStore` over a plain HashMap,
//! enabling fast, deterministic tests without a real SQLite database.
//! Reads and writes can be made to fail on demand to exercise the
//! degraded-persistence paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use pawcare_core::{KeyValueStore, PawcareError};

/// An in-memory `KeyValueStore` for tests.
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryKvStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Create a store pre-loaded with the given entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        {
            let mut map = store.entries.try_lock().unwrap();
            for (k, v) in entries {
                map.insert(k.into(), v.into());
            }
        }
        store
    }

    /// Make every subsequent `get` fail with a storage error.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `set`/`remove` fail with a storage error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl Default for MemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PawcareError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(PawcareError::Storage {
                source: "injected read failure".into(),
            });
        }
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PawcareError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PawcareError::Storage {
                source: "injected write failure".into(),
            });
        }
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), PawcareError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PawcareError::Storage {
                source: "injected write failure".into(),
            });
        }
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
