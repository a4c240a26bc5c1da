// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request/response types for the remote pet-store API.
//!
//! Wire field names are the backend's (Spanish); the Rust side uses
//! English names via `#[serde(rename)]`.

use pawcare_core::BudgetTier;
use serde::{Deserialize, Serialize};

// --- Auth types ---

/// Credentials for `POST usuario/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Payload for `POST usuario/registro`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub email: String,
    pub password: String,
}

/// Partial profile update for `PUT usuario/actualizar-perfil/{id}`.
///
/// Only the fields that are `Some` are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// --- Pet types ---

/// A pet as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "raza", default)]
    pub breed: Option<String>,
    #[serde(rename = "edad", default)]
    pub age: Option<f64>,
    #[serde(rename = "peso", default)]
    pub weight: Option<f64>,
    #[serde(rename = "actividad", default)]
    pub activity: Option<String>,
    #[serde(rename = "enfermedades", default)]
    pub conditions: Option<String>,
    #[serde(rename = "imagen", default)]
    pub image: Option<String>,
}

/// Payload for registering or updating a pet.
#[derive(Debug, Clone, Serialize)]
pub struct PetForm {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "raza")]
    pub breed: String,
    #[serde(rename = "edad")]
    pub age: f64,
    #[serde(rename = "peso")]
    pub weight: f64,
    #[serde(rename = "actividad")]
    pub activity: String,
    #[serde(rename = "enfermedades", skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
}

/// `GET mascota/listar` response.
///
/// The backend usually wraps the list in `{ "mascotas": [...] }` but has
/// been observed returning a bare array; both are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PetListResponse {
    Wrapped {
        #[serde(rename = "mascotas")]
        pets: Vec<Pet>,
    },
    Bare(Vec<Pet>),
}

impl PetListResponse {
    pub fn into_pets(self) -> Vec<Pet> {
        match self {
            Self::Wrapped { pets } | Self::Bare(pets) => pets,
        }
    }
}

// --- Diet types ---

/// Payload for `POST mascota/generar-dieta/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateDietRequest {
    #[serde(rename = "presupuesto")]
    pub budget_tier: BudgetTier,
}

/// Successful diet generation response.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateDietResponse {
    #[serde(rename = "dieta")]
    pub diet_text: String,
}

// --- Product types ---

/// A catalog product from `GET productos/publico`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "imagen", default)]
    pub image: Option<String>,
}

/// `GET productos/publico` response, wrapped or bare like the pet list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductListResponse {
    Wrapped {
        #[serde(rename = "productos")]
        products: Vec<Product>,
    },
    Bare(Vec<Product>),
}

impl ProductListResponse {
    pub fn into_products(self) -> Vec<Product> {
        match self {
            Self::Wrapped { products } | Self::Bare(products) => products,
        }
    }
}

// --- Error payload ---

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_list_accepts_wrapped_and_bare_forms() {
        let wrapped = serde_json::json!({
            "mascotas": [{"_id": "p1", "nombre": "Firulais"}]
        });
        let pets: PetListResponse = serde_json::from_value(wrapped).unwrap();
        assert_eq!(pets.into_pets()[0].name, "Firulais");

        let bare = serde_json::json!([{"_id": "p1", "nombre": "Luna"}]);
        let pets: PetListResponse = serde_json::from_value(bare).unwrap();
        assert_eq!(pets.into_pets()[0].name, "Luna");
    }

    #[test]
    fn diet_request_serializes_tier_under_presupuesto() {
        let req = GenerateDietRequest {
            budget_tier: BudgetTier::Medio,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"presupuesto": "medio"}));
    }

    #[test]
    fn profile_update_skips_unset_fields() {
        let update = ProfileUpdate {
            phone: Some("0991234567".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"telefono": "0991234567"}));
    }

    #[test]
    fn register_request_uses_wire_names() {
        let req = RegisterRequest {
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
            address: "Av. Siempre Viva".into(),
            phone: "0991234567".into(),
            email: "ana@example.com".into(),
            password: "secret".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["nombre"], "Ana");
        assert_eq!(json["apellido"], "Lopez");
        assert_eq!(json["direccion"], "Av. Siempre Viva");
        assert_eq!(json["telefono"], "0991234567");
    }
}
