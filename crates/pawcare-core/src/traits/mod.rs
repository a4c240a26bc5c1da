// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability trait definitions for the Pawcare client.
//!
//! Collaborators the core logic depends on (durable key-value storage,
//! the clock) are injected behind these traits so the diet throttle and
//! session store can be tested without a device or real time.

pub mod clock;
pub mod kv;

pub use clock::{Clock, SystemClock};
pub use kv::KeyValueStore;
