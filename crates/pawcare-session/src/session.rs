// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persisted login session and UI preferences.
//!
//! All state lives in the key-value store under fixed keys so that a
//! restarted client picks up where the previous run left off. The stored
//! profile is a JSON snapshot of the server response at login time; it is
//! refreshed on the next successful profile fetch, not kept in sync.

use std::sync::Arc;

use pawcare_core::{KeyValueStore, PawcareError, Theme, UserProfile};
use tracing::warn;

/// Bearer token returned by the login endpoint.
pub const TOKEN_KEY: &str = "userToken";
/// Identifier of the logged-in user.
pub const USER_ID_KEY: &str = "userId";
/// JSON snapshot of the user profile taken at login.
pub const USER_DATA_KEY: &str = "userData";
/// Selected UI theme, stored as its lowercase name.
pub const THEME_KEY: &str = "theme";

/// Reads and writes session state through a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persists the credentials and profile snapshot from a successful login.
    ///
    /// Writes all three session keys; a failure on any write surfaces and may
    /// leave a partial session behind, which `clear` removes.
    pub async fn save_login(&self, token: &str, profile: &UserProfile) -> Result<(), PawcareError> {
        let data = serde_json::to_string(profile)
            .map_err(|e| PawcareError::Internal(format!("failed to encode profile: {e}")))?;
        self.store.set(TOKEN_KEY, token).await?;
        self.store.set(USER_ID_KEY, &profile.id).await?;
        self.store.set(USER_DATA_KEY, &data).await?;
        Ok(())
    }

    /// Returns the stored bearer token, or `None` when not logged in.
    pub async fn token(&self) -> Result<Option<String>, PawcareError> {
        self.store.get(TOKEN_KEY).await
    }

    /// Returns the stored user id, or `None` when not logged in.
    pub async fn user_id(&self) -> Result<Option<String>, PawcareError> {
        self.store.get(USER_ID_KEY).await
    }

    /// Returns the profile snapshot taken at login.
    ///
    /// A missing key or a snapshot that no longer decodes yields `None`; the
    /// caller is expected to re-fetch the profile from the server.
    pub async fn profile(&self) -> Result<Option<UserProfile>, PawcareError> {
        let Some(raw) = self.store.get(USER_DATA_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!(error = %e, "stored profile is not valid JSON, ignoring");
                Ok(None)
            }
        }
    }

    /// Replaces the stored profile snapshot, e.g. after a profile update.
    pub async fn save_profile(&self, profile: &UserProfile) -> Result<(), PawcareError> {
        let data = serde_json::to_string(profile)
            .map_err(|e| PawcareError::Internal(format!("failed to encode profile: {e}")))?;
        self.store.set(USER_DATA_KEY, &data).await
    }

    /// Removes all credential keys. The theme preference survives logout.
    pub async fn clear(&self) -> Result<(), PawcareError> {
        self.store.remove(TOKEN_KEY).await?;
        self.store.remove(USER_ID_KEY).await?;
        self.store.remove(USER_DATA_KEY).await?;
        Ok(())
    }

    /// Returns the stored theme, defaulting to [`Theme::Light`] when the key
    /// is absent or holds an unrecognized value.
    pub async fn theme(&self) -> Result<Theme, PawcareError> {
        let Some(raw) = self.store.get(THEME_KEY).await? else {
            return Ok(Theme::Light);
        };
        match raw.parse() {
            Ok(theme) => Ok(theme),
            Err(_) => {
                warn!(value = %raw, "unrecognized stored theme, falling back to light");
                Ok(Theme::Light)
            }
        }
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<(), PawcareError> {
        self.store.set(THEME_KEY, &theme.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawcare_test_utils::MemoryKvStore;

    fn sample_profile() -> UserProfile {
        UserProfile {
            id: "u-42".into(),
            first_name: "Ana".into(),
            last_name: "Torres".into(),
            email: "ana@example.com".into(),
            address: Some("Av. Quito 10".into()),
            phone: Some("0991234567".into()),
            role: Some("cliente".into()),
            favorites: vec!["p-1".into()],
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn login_roundtrip() {
        let store = Arc::new(MemoryKvStore::new());
        let session = SessionStore::new(store);
        session
            .save_login("tok-abc", &sample_profile())
            .await
            .unwrap();

        assert_eq!(session.token().await.unwrap().as_deref(), Some("tok-abc"));
        assert_eq!(session.user_id().await.unwrap().as_deref(), Some("u-42"));
        let profile = session.profile().await.unwrap().unwrap();
        assert_eq!(profile.email, "ana@example.com");
        assert_eq!(profile.favorites, vec!["p-1".to_string()]);
    }

    #[tokio::test]
    async fn empty_store_means_logged_out() {
        let session = SessionStore::new(Arc::new(MemoryKvStore::new()));
        assert!(session.token().await.unwrap().is_none());
        assert!(session.user_id().await.unwrap().is_none());
        assert!(session.profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_profile_degrades_to_none() {
        let store = Arc::new(MemoryKvStore::with_entries([(
            USER_DATA_KEY.to_string(),
            "{not json".to_string(),
        )]));
        let session = SessionStore::new(store);
        assert!(session.profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_removes_credentials_but_keeps_theme() {
        let store = Arc::new(MemoryKvStore::new());
        let session = SessionStore::new(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        session
            .save_login("tok", &sample_profile())
            .await
            .unwrap();
        session.set_theme(Theme::Dark).await.unwrap();

        session.clear().await.unwrap();

        assert!(session.token().await.unwrap().is_none());
        assert!(session.user_id().await.unwrap().is_none());
        assert!(session.profile().await.unwrap().is_none());
        assert_eq!(session.theme().await.unwrap(), Theme::Dark);
    }

    #[tokio::test]
    async fn theme_defaults_to_light() {
        let session = SessionStore::new(Arc::new(MemoryKvStore::new()));
        assert_eq!(session.theme().await.unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn unknown_theme_value_falls_back_to_light() {
        let store = Arc::new(MemoryKvStore::with_entries([(
            THEME_KEY.to_string(),
            "sepia".to_string(),
        )]));
        let session = SessionStore::new(store);
        assert_eq!(session.theme().await.unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn theme_roundtrip() {
        let session = SessionStore::new(Arc::new(MemoryKvStore::new()));
        session.set_theme(Theme::Dark).await.unwrap();
        assert_eq!(session.theme().await.unwrap(), Theme::Dark);
        session.set_theme(Theme::Light).await.unwrap();
        assert_eq!(session.theme().await.unwrap(), Theme::Light);
    }
}
