// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared state handed to every subcommand.

use std::sync::Arc;

use pawcare_api::ApiClient;
use pawcare_config::PawcareConfig;
use pawcare_core::{KeyValueStore, PawcareError};
use pawcare_session::SessionStore;
use pawcare_storage::SqliteKvStore;

/// Configured storage, session, and API client for one invocation.
pub struct AppContext {
    pub config: PawcareConfig,
    pub store: Arc<SqliteKvStore>,
    pub session: SessionStore,
    pub api: ApiClient,
}

impl AppContext {
    /// Open the local database and build the API client from config.
    pub async fn init(config: PawcareConfig) -> Result<Self, PawcareError> {
        let store = Arc::new(SqliteKvStore::new(config.storage.clone()));
        store.initialize().await?;
        let session = SessionStore::new(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        let api = ApiClient::new(&config.api)?;
        Ok(Self {
            config,
            store,
            session,
            api,
        })
    }

    /// The stored bearer token, or `Unauthorized` when not logged in.
    pub async fn require_token(&self) -> Result<String, PawcareError> {
        self.session
            .token()
            .await?
            .ok_or_else(|| PawcareError::Unauthorized("no active session".to_string()))
    }
}
