// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Pawcare pet-care client.
//!
//! This crate provides the foundational trait definitions, error types,
//! and domain types used throughout the Pawcare workspace. Storage and
//! clock backends implement the capability traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PawcareError;
pub use traits::{Clock, KeyValueStore, SystemClock};
pub use types::{BudgetTier, DietRecord, PetId, Theme, UserProfile};
