// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock clock for deterministic cooldown tests.

use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};

use pawcare_core::Clock;

/// A clock that returns a fixed, settable instant.
///
/// Time only moves when the test calls [`MockClock::set`] or
/// [`MockClock::advance`], which makes day-boundary assertions exact.
pub struct MockClock {
    now: Mutex<DateTime<Utc>>,
}

impl MockClock {
    /// Create a mock clock at the given instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Create a mock clock at an arbitrary fixed epoch.
    pub fn new() -> Self {
        Self::at(Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap())
    }

    /// Jump to an absolute instant.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    /// Move time forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_time_forward() {
        let clock = MockClock::new();
        let start = clock.now();
        clock.advance(Duration::days(7));
        assert_eq!(clock.now() - start, Duration::days(7));
    }

    #[test]
    fn set_jumps_to_absolute_instant() {
        let clock = MockClock::new();
        let target = Utc.with_ymd_and_hms(2026, 6, 15, 0, 0, 0).unwrap();
        clock.set(target);
        assert_eq!(clock.now(), target);
    }
}
