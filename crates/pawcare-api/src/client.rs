// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the remote pet-store API.
//!
//! Provides [`ApiClient`] which handles request construction, bearer
//! authentication, error payload decoding, and transient error retry.

use std::time::Duration;

use pawcare_core::{BudgetTier, PawcareError, PetId, UserProfile};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::types::{
    ApiErrorBody, GenerateDietRequest, GenerateDietResponse, LoginRequest, LoginResponse, Pet,
    PetForm, PetListResponse, Product, ProductListResponse, ProfileUpdate, RegisterRequest,
};

use pawcare_config::model::ApiConfig;

/// HTTP client for the pet-store backend.
///
/// Manages connection pooling and retry logic for transient errors
/// (500, 503). HTTP 429 is never retried: on the diet endpoint it is a
/// semantic signal that the server-side cooldown is still open, and it
/// is surfaced as [`PawcareError::CooldownActive`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl ApiClient {
    /// Creates a new API client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, PawcareError> {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PawcareError::Api {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: 1,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    // --- Auth ---

    /// `POST usuario/login`.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, PawcareError> {
        let req = self.client.post(self.url("usuario/login")).json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        });
        let response = self.send(req, "login").await?;
        decode(response, "login").await
    }

    /// `POST usuario/registro`. The backend sends a verification email;
    /// the account is not usable until it is confirmed.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), PawcareError> {
        let req = self.client.post(self.url("usuario/registro")).json(request);
        self.send(req, "register").await?;
        Ok(())
    }

    /// `POST usuario/recuperar-password`.
    pub async fn recover_password(&self, email: &str) -> Result<(), PawcareError> {
        let req = self
            .client
            .post(self.url("usuario/recuperar-password"))
            .json(&serde_json::json!({ "email": email }));
        self.send(req, "recover_password").await?;
        Ok(())
    }

    /// `GET usuario/perfil`.
    pub async fn profile(&self, token: &str) -> Result<UserProfile, PawcareError> {
        let req = self.client.get(self.url("usuario/perfil")).bearer_auth(token);
        let response = self.send(req, "profile").await?;
        decode(response, "profile").await
    }

    /// `PUT usuario/actualizar-perfil/{id}`.
    pub async fn update_profile(
        &self,
        token: &str,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<(), PawcareError> {
        let req = self
            .client
            .put(self.url(&format!("usuario/actualizar-perfil/{user_id}")))
            .bearer_auth(token)
            .json(update);
        self.send(req, "update_profile").await?;
        Ok(())
    }

    // --- Pets ---

    /// `GET mascota/listar`.
    pub async fn list_pets(&self, token: &str) -> Result<Vec<Pet>, PawcareError> {
        let req = self.client.get(self.url("mascota/listar")).bearer_auth(token);
        let response = self.send(req, "list_pets").await?;
        let list: PetListResponse = decode(response, "list_pets").await?;
        Ok(list.into_pets())
    }

    /// `POST mascota/registro`.
    pub async fn create_pet(&self, token: &str, form: &PetForm) -> Result<(), PawcareError> {
        let req = self
            .client
            .post(self.url("mascota/registro"))
            .bearer_auth(token)
            .json(form);
        self.send(req, "create_pet").await?;
        Ok(())
    }

    /// `PUT mascota/actualizar/{id}`.
    pub async fn update_pet(
        &self,
        token: &str,
        pet: &PetId,
        form: &PetForm,
    ) -> Result<(), PawcareError> {
        let req = self
            .client
            .put(self.url(&format!("mascota/actualizar/{pet}")))
            .bearer_auth(token)
            .json(form);
        self.send(req, "update_pet").await?;
        Ok(())
    }

    /// `DELETE mascota/eliminar/{id}`.
    pub async fn delete_pet(&self, token: &str, pet: &PetId) -> Result<(), PawcareError> {
        let req = self
            .client
            .delete(self.url(&format!("mascota/eliminar/{pet}")))
            .bearer_auth(token);
        self.send(req, "delete_pet").await?;
        Ok(())
    }

    /// `POST mascota/generar-dieta/{id}`.
    ///
    /// Sends the budget tier (never the raw number) and returns the
    /// generated diet text. A 429 means the server-side weekly cooldown
    /// is still open -- distinct from, and in addition to, the local
    /// gate in `pawcare-diet`.
    pub async fn generate_diet(
        &self,
        token: &str,
        pet: &PetId,
        budget_tier: BudgetTier,
    ) -> Result<String, PawcareError> {
        let req = self
            .client
            .post(self.url(&format!("mascota/generar-dieta/{pet}")))
            .bearer_auth(token)
            .json(&GenerateDietRequest { budget_tier });
        let response = self.send(req, "generate_diet").await?;
        let diet: GenerateDietResponse = decode(response, "generate_diet").await?;
        Ok(diet.diet_text)
    }

    // --- Products ---

    /// `GET productos/publico`. No authentication required.
    pub async fn list_products(&self) -> Result<Vec<Product>, PawcareError> {
        let req = self.client.get(self.url("productos/publico"));
        let response = self.send(req, "list_products").await?;
        let list: ProductListResponse = decode(response, "list_products").await?;
        Ok(list.into_products())
    }

    /// `POST usuario/agregar-favorito/{id}`.
    pub async fn add_favorite(&self, token: &str, product_id: &str) -> Result<(), PawcareError> {
        let req = self
            .client
            .post(self.url(&format!("usuario/agregar-favorito/{product_id}")))
            .bearer_auth(token);
        self.send(req, "add_favorite").await?;
        Ok(())
    }

    /// `DELETE usuario/eliminar-favorito/{id}`.
    pub async fn remove_favorite(&self, token: &str, product_id: &str) -> Result<(), PawcareError> {
        let req = self
            .client
            .delete(self.url(&format!("usuario/eliminar-favorito/{product_id}")))
            .bearer_auth(token);
        self.send(req, "remove_favorite").await?;
        Ok(())
    }

    // --- Transport ---

    /// Send a request, retrying once on transient errors, and map
    /// non-2xx statuses to the error taxonomy.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        what: &str,
    ) -> Result<reqwest::Response, PawcareError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, what, "retrying request after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let req = request.try_clone().ok_or_else(|| {
                PawcareError::Internal(format!("{what}: request is not retryable"))
            })?;
            let response = req.send().await.map_err(|e| PawcareError::Api {
                message: format!("{what}: HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

            let status = response.status();
            debug!(status = %status, attempt, what, "response received");

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, what, "transient error, will retry");
                last_error = Some(PawcareError::api(format!(
                    "{what}: API returned {status}: {body}"
                )));
                continue;
            }

            return map_status(response, what).await;
        }

        Err(last_error
            .unwrap_or_else(|| PawcareError::api(format!("{what}: request failed after retries"))))
    }
}

/// Returns true for HTTP status codes that indicate transient errors
/// worth retrying. 429 is deliberately excluded: it carries the
/// server-side diet cooldown and must reach the caller.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 500 | 503)
}

/// Map a non-success status to the error taxonomy, extracting the
/// backend's `msg` field when present.
async fn map_status(
    response: reqwest::Response,
    what: &str,
) -> Result<reqwest::Response, PawcareError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let msg = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|b| b.msg)
        .unwrap_or_else(|_| format!("API returned {status}: {body}"));

    Err(match status.as_u16() {
        429 => PawcareError::CooldownActive { message: msg },
        401 | 403 => PawcareError::Unauthorized(msg),
        _ => PawcareError::api(format!("{what}: {msg}")),
    })
}

/// Decode a JSON response body.
async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    what: &str,
) -> Result<T, PawcareError> {
    let body = response.text().await.map_err(|e| PawcareError::Api {
        message: format!("{what}: failed to read response body: {e}"),
        source: Some(Box::new(e)),
    })?;
    serde_json::from_str(&body).map_err(|e| PawcareError::Api {
        message: format!("{what}: failed to parse API response: {e}"),
        source: Some(Box::new(e)),
    })
}
