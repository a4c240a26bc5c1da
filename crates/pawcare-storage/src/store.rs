// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the KeyValueStore capability.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use pawcare_config::model::StorageConfig;
use pawcare_core::{KeyValueStore, PawcareError};

use crate::database::Database;
use crate::queries;

/// SQLite-backed key-value store.
///
/// Wraps a [`Database`] handle and delegates the capability operations to
/// the kv query module. The database is lazily opened on the first call
/// to [`SqliteKvStore::initialize`].
pub struct SqliteKvStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteKvStore {
    /// Create a new store with the given configuration.
    ///
    /// The database connection is not opened until [`initialize`] is
    /// called.
    ///
    /// [`initialize`]: SqliteKvStore::initialize
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Open the database at the configured path and run migrations.
    pub async fn initialize(&self) -> Result<(), PawcareError> {
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| PawcareError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite key-value store initialized");
        Ok(())
    }

    /// Checkpoint the WAL without closing the store.
    pub async fn flush(&self) -> Result<(), PawcareError> {
        let db = self.db()?;
        db.connection()
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(crate::database::map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }

    /// Returns the underlying Database, or an error if not initialized.
    fn db(&self) -> Result<&Database, PawcareError> {
        self.db.get().ok_or_else(|| PawcareError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }
}

#[async_trait]
impl KeyValueStore for SqliteKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PawcareError> {
        queries::kv::get(self.db()?, key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PawcareError> {
        queries::kv::set(self.db()?, key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), PawcareError> {
        queries::kv::remove(self.db()?, key).await
    }
}
