// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Pawcare tests.
//!
//! Provides mock capability implementations for fast, deterministic,
//! CI-runnable tests without a device or real time.
//!
//! # Components
//!
//! - [`MockClock`] - Settable, advanceable clock
//! - [`MemoryKvStore`] - In-memory key-value store with failure injection

pub mod mock_clock;
pub mod mock_store;

pub use mock_clock::MockClock;
pub use mock_store::MemoryKvStore;
