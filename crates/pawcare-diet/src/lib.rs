// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diet-generation gating for the Pawcare client.
//!
//! The remote service generates at most one diet per pet per week. This
//! crate holds the client side of that contract: a per-pet cooldown gate
//! computed from a locally persisted timestamp, budget-to-tier
//! classification, and a local cache of the last generated diet text so
//! it stays readable between generations and across restarts.

pub mod budget;
pub mod throttle;

pub use budget::classify_budget;
pub use throttle::{DietRequestThrottle, COOLDOWN_DAYS};
