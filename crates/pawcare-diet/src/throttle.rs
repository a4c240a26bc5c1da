// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diet-request cooldown gate and local diet cache.
//!
//! Tracks, per pet, when a diet was last generated and whether a new
//! generation request may be sent. The gate is recomputed from the
//! stored timestamp and the injected clock on every check; there is no
//! timer and no stored "on cooldown" flag.
//!
//! Persistence read failures never surface to the caller: a record that
//! cannot be read is treated as absent, which fails open (the request is
//! allowed and the server's own cooldown check still applies).

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use pawcare_core::{Clock, DietRecord, KeyValueStore, PawcareError, PetId};

/// Minimum whole days between diet generations for the same pet.
pub const COOLDOWN_DAYS: i64 = 7;

/// Storage key for a pet's cached diet text.
fn text_key(pet: &PetId) -> String {
    format!("dietText:{pet}")
}

/// Storage key for a pet's last generation timestamp (RFC 3339).
fn generated_at_key(pet: &PetId) -> String {
    format!("dietGeneratedAt:{pet}")
}

/// Gate for diet-generation requests with a per-pet local cache.
///
/// The throttle never talks to the network itself; it only decides
/// whether the caller should, and it caches the text of the most recent
/// successful generation so the last diet is readable offline.
pub struct DietRequestThrottle {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl DietRequestThrottle {
    /// Create a throttle over the given storage and clock capabilities.
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Whether a new diet-generation request may be sent for `pet`.
    ///
    /// True when no record is cached, or when at least
    /// [`COOLDOWN_DAYS`] whole days have elapsed since the last
    /// generation. Partial days do not count: the difference is floored
    /// to whole days before comparing.
    pub async fn is_request_allowed(&self, pet: &PetId) -> bool {
        match self.last_generated_at(pet).await {
            None => true,
            Some(generated_at) => {
                let elapsed_days = (self.clock.now() - generated_at).num_days();
                elapsed_days >= COOLDOWN_DAYS
            }
        }
    }

    /// Time left until the gate opens for `pet`, or `None` when a
    /// request is already allowed.
    pub async fn cooldown_remaining(&self, pet: &PetId) -> Option<Duration> {
        let generated_at = self.last_generated_at(pet).await?;
        let opens_at = generated_at + Duration::days(COOLDOWN_DAYS);
        let remaining = opens_at - self.clock.now();
        (remaining > Duration::zero()).then_some(remaining)
    }

    /// Cache a successfully generated diet for `pet`, stamped with the
    /// current time.
    ///
    /// Overwrites any previous record; at most one record is retained
    /// per pet. Write failures propagate to the caller. Two in-flight
    /// calls for the same pet are not ordered against each other: the
    /// last write wins.
    pub async fn record_diet(
        &self,
        pet: &PetId,
        diet_text: &str,
    ) -> Result<DietRecord, PawcareError> {
        let generated_at = self.clock.now();
        self.store.set(&text_key(pet), diet_text).await?;
        self.store
            .set(&generated_at_key(pet), &generated_at.to_rfc3339())
            .await?;
        debug!(pet = %pet, %generated_at, "diet recorded");
        Ok(DietRecord {
            pet_id: pet.clone(),
            generated_at,
            diet_text: diet_text.to_string(),
        })
    }

    /// Read back the cached diet for `pet`, if one was ever recorded.
    ///
    /// `None` when no diet was generated, when either key is missing,
    /// or when the persistence layer fails -- absence is an expected
    /// state, and a broken cache must not take the feature down.
    pub async fn cached_diet(&self, pet: &PetId) -> Option<DietRecord> {
        let generated_at = self.last_generated_at(pet).await?;
        let diet_text = match self.store.get(&text_key(pet)).await {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                warn!(pet = %pet, error = %e, "diet text read failed, treating as absent");
                return None;
            }
        };
        Some(DietRecord {
            pet_id: pet.clone(),
            generated_at,
            diet_text,
        })
    }

    /// Last generation timestamp for `pet`, or `None` when missing,
    /// unreadable, or unparseable.
    async fn last_generated_at(&self, pet: &PetId) -> Option<DateTime<Utc>> {
        let raw = match self.store.get(&generated_at_key(pet)).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(pet = %pet, error = %e, "diet timestamp read failed, treating as absent");
                return None;
            }
        };
        match DateTime::parse_from_rfc3339(&raw) {
            Ok(ts) => Some(ts.with_timezone(&Utc)),
            Err(e) => {
                warn!(pet = %pet, raw, error = %e, "stored diet timestamp unparseable, treating as absent");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pawcare_core::BudgetTier;
    use pawcare_test_utils::{MemoryKvStore, MockClock};

    fn day0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
    }

    fn setup() -> (DietRequestThrottle, Arc<MemoryKvStore>, Arc<MockClock>) {
        let store = Arc::new(MemoryKvStore::new());
        let clock = Arc::new(MockClock::at(day0()));
        let throttle = DietRequestThrottle::new(store.clone(), clock.clone());
        (throttle, store, clock)
    }

    #[tokio::test]
    async fn request_allowed_when_no_record_exists() {
        let (throttle, _store, clock) = setup();
        let pet = PetId("p1".into());

        assert!(throttle.is_request_allowed(&pet).await);

        // Allowed at any instant, not just the epoch we happened to pick.
        clock.advance(Duration::days(400));
        assert!(throttle.is_request_allowed(&pet).await);
    }

    #[tokio::test]
    async fn cooldown_boundary_is_inclusive_at_seven_days() {
        let (throttle, _store, clock) = setup();
        let pet = PetId("p1".into());
        throttle.record_diet(&pet, "Dieta base").await.unwrap();

        clock.set(day0() + Duration::days(6));
        assert!(!throttle.is_request_allowed(&pet).await);

        // Six days and change still floors to 6.
        clock.set(day0() + Duration::days(6) + Duration::hours(23));
        assert!(!throttle.is_request_allowed(&pet).await);

        clock.set(day0() + Duration::days(7));
        assert!(throttle.is_request_allowed(&pet).await);
    }

    #[tokio::test]
    async fn record_and_read_back_roundtrips() {
        let (throttle, _store, _clock) = setup();
        let pet = PetId("p1".into());

        let recorded = throttle.record_diet(&pet, "Pollo con arroz").await.unwrap();
        assert_eq!(recorded.generated_at, day0());

        let cached = throttle.cached_diet(&pet).await.unwrap();
        assert_eq!(cached, recorded);
        assert_eq!(cached.diet_text, "Pollo con arroz");
        assert_eq!(cached.pet_id, pet);
    }

    #[tokio::test]
    async fn recording_twice_keeps_a_single_record() {
        let (throttle, store, _clock) = setup();
        let pet = PetId("p1".into());

        throttle.record_diet(&pet, "Dieta A").await.unwrap();
        throttle.record_diet(&pet, "Dieta A").await.unwrap();

        let cached = throttle.cached_diet(&pet).await.unwrap();
        assert_eq!(cached.diet_text, "Dieta A");
        // Exactly two keys for the pet: text and timestamp.
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn full_generation_cycle_across_the_cooldown() {
        let (throttle, _store, clock) = setup();
        let pet = PetId("p1".into());

        assert!(throttle.is_request_allowed(&pet).await);
        assert_eq!(
            crate::budget::classify_budget(50.0).unwrap(),
            BudgetTier::Medio
        );
        throttle.record_diet(&pet, "Diet A").await.unwrap();

        // Immediately on cooldown.
        assert!(!throttle.is_request_allowed(&pet).await);

        clock.advance(Duration::days(7));
        assert!(throttle.is_request_allowed(&pet).await);

        throttle.record_diet(&pet, "Diet B").await.unwrap();
        let cached = throttle.cached_diet(&pet).await.unwrap();
        assert_eq!(cached.diet_text, "Diet B");
        assert_eq!(cached.generated_at, day0() + Duration::days(7));
    }

    #[tokio::test]
    async fn pets_are_gated_independently() {
        let (throttle, _store, _clock) = setup();
        let p1 = PetId("p1".into());
        let p2 = PetId("p2".into());

        throttle.record_diet(&p1, "Dieta p1").await.unwrap();

        assert!(!throttle.is_request_allowed(&p1).await);
        assert!(throttle.is_request_allowed(&p2).await);
        assert!(throttle.cached_diet(&p2).await.is_none());
    }

    #[tokio::test]
    async fn read_failure_degrades_to_no_record() {
        let (throttle, store, _clock) = setup();
        let pet = PetId("p1".into());
        throttle.record_diet(&pet, "Dieta").await.unwrap();

        store.fail_reads(true);
        // A broken cache fails open: the request is allowed and the
        // cached diet reads as absent.
        assert!(throttle.is_request_allowed(&pet).await);
        assert!(throttle.cached_diet(&pet).await.is_none());
        assert!(throttle.cooldown_remaining(&pet).await.is_none());

        store.fail_reads(false);
        assert!(!throttle.is_request_allowed(&pet).await);
        assert!(throttle.cached_diet(&pet).await.is_some());
    }

    #[tokio::test]
    async fn write_failure_propagates() {
        let (throttle, store, _clock) = setup();
        let pet = PetId("p1".into());

        store.fail_writes(true);
        let result = throttle.record_diet(&pet, "Dieta").await;
        assert!(matches!(result, Err(PawcareError::Storage { .. })));
    }

    #[tokio::test]
    async fn corrupt_timestamp_treated_as_absent() {
        let pet = PetId("p1".into());
        let store = Arc::new(MemoryKvStore::with_entries([
            (generated_at_key(&pet), "not-a-timestamp".to_string()),
            (text_key(&pet), "Dieta".to_string()),
        ]));
        let clock = Arc::new(MockClock::at(day0()));
        let throttle = DietRequestThrottle::new(store, clock);

        assert!(throttle.is_request_allowed(&pet).await);
        assert!(throttle.cached_diet(&pet).await.is_none());
    }

    #[tokio::test]
    async fn cooldown_remaining_counts_down_to_none() {
        let (throttle, _store, clock) = setup();
        let pet = PetId("p1".into());

        assert!(throttle.cooldown_remaining(&pet).await.is_none());

        throttle.record_diet(&pet, "Dieta").await.unwrap();
        let remaining = throttle.cooldown_remaining(&pet).await.unwrap();
        assert_eq!(remaining, Duration::days(7));

        clock.advance(Duration::days(5));
        let remaining = throttle.cooldown_remaining(&pet).await.unwrap();
        assert_eq!(remaining, Duration::days(2));

        clock.advance(Duration::days(2));
        assert!(throttle.cooldown_remaining(&pet).await.is_none());
    }

    #[tokio::test]
    async fn timestamp_is_persisted_as_rfc3339() {
        let (throttle, store, _clock) = setup();
        let pet = PetId("p1".into());
        throttle.record_diet(&pet, "Dieta").await.unwrap();

        let raw = store.get(&generated_at_key(&pet)).await.unwrap().unwrap();
        assert!(DateTime::parse_from_rfc3339(&raw).is_ok(), "got: {raw}");
    }
}
