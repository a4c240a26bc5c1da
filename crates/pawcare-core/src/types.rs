// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Pawcare crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a pet, assigned by the remote service.
///
/// The client only ever references ids of pets that already exist
/// server-side; it never mints its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetId(pub String);

impl PetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Coarse classification of a numeric diet budget.
///
/// The raw number the user enters never leaves the device; only the tier
/// is sent to the diet-generation endpoint. Wire form is lowercase
/// (`"bajo"`, `"medio"`, `"alto"`) to match the backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BudgetTier {
    Bajo,
    Medio,
    Alto,
}

/// The locally cached result of the most recent successful diet
/// generation for a pet.
///
/// At most one record is retained per pet: every successful generation
/// overwrites the previous one. Records are never evicted automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietRecord {
    pub pet_id: PetId,
    pub generated_at: DateTime<Utc>,
    pub diet_text: String,
}

/// UI theme preference, persisted across restarts.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Remote user profile, cached locally after login.
///
/// Field names follow the backend's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "rol", default)]
    pub role: Option<String>,
    #[serde(rename = "favoritos", default)]
    pub favorites: Vec<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}
