// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Login session and preference persistence for the Pawcare client.

pub mod session;

pub use session::{SessionStore, THEME_KEY, TOKEN_KEY, USER_DATA_KEY, USER_ID_KEY};
