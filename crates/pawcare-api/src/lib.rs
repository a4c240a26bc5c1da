// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the remote pet-store API.
//!
//! All business logic (authentication, persistence, diet generation,
//! product inventory) lives in the remote service; this crate is the
//! narrow typed interface the client talks to it through.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{
    GenerateDietRequest, GenerateDietResponse, LoginRequest, LoginResponse, Pet, PetForm,
    Product, ProfileUpdate, RegisterRequest,
};
