//! Environment traits - injected collaborators.
//!
//! All external collaborators are abstracted behind traits and injected via
//! the Environment parameter of a reducer. The UI shell owns the production
//! implementations of [`Notifier`] and [`Navigator`]; this crate ships
//! production implementations only where the collaborator is process-local
//! (clock, reference generation, in-memory scoped storage).

use crate::notification::Notification;
use crate::route::RoutePath;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::sync::Mutex;

/// Clock trait - abstracts time operations for testability
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of numeric suffixes for human-facing references
///
/// Booking references are a fixed prefix plus a short numeric suffix; the
/// suffix is not required to be globally unique.
pub trait ReferenceSource: Send + Sync {
    /// Next numeric suffix, in `0..10_000`
    fn next_suffix(&self) -> u32;
}

/// Production reference source drawing random suffixes
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomReferences;

impl ReferenceSource for RandomReferences {
    fn next_suffix(&self) -> u32 {
        rand::thread_rng().gen_range(0..10_000)
    }
}

/// Notification sink - the toast layer of the UI shell
///
/// Fire-and-forget: the collaborator owns presentation and auto-dismissal.
pub trait Notifier: Send + Sync {
    /// Deliver a notification to the user
    fn notify(&self, notification: Notification);
}

/// Navigation collaborator - the router of the UI shell
///
/// The core requests a path change and may pass forward a transient state
/// snapshot (for example a booking seed) for the target surface.
pub trait Navigator: Send + Sync {
    /// Request a navigation to `path`
    fn navigate(&self, path: &RoutePath, state: Option<serde_json::Value>);
}

/// Device-local scoped storage holding a single string payload
///
/// Models the durable key-value storage the session persists into. Reads
/// never fail: absent and unreadable payloads both surface as `None`.
pub trait ScopedStorage: Send + Sync {
    /// Read the persisted payload, if any
    fn read(&self) -> Option<String>;

    /// Replace the persisted payload
    fn write(&self, payload: &str);

    /// Remove the persisted payload
    fn clear(&self);
}

/// In-memory scoped storage
///
/// Stands in for device storage in the demo binary and in tests. A poisoned
/// lock degrades to the last written value rather than panicking.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    payload: Mutex<Option<String>>,
}

impl InMemoryStorage {
    /// Creates an empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-populated with `payload`
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Mutex::new(Some(payload.into())),
        }
    }
}

impl ScopedStorage for InMemoryStorage {
    fn read(&self) -> Option<String> {
        self.payload
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn write(&self, payload: &str) {
        *self
            .payload
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(payload.to_string());
    }

    fn clear(&self) {
        *self
            .payload
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_storage_round_trips() {
        let storage = InMemoryStorage::new();
        assert_eq!(storage.read(), None);

        storage.write("payload");
        assert_eq!(storage.read(), Some("payload".to_string()));

        storage.clear();
        assert_eq!(storage.read(), None);
    }

    #[test]
    fn pre_populated_storage_reads_back() {
        let storage = InMemoryStorage::with_payload("seeded");
        assert_eq!(storage.read(), Some("seeded".to_string()));
    }

    #[test]
    fn random_references_stay_in_range() {
        let source = RandomReferences;
        for _ in 0..100 {
            assert!(source.next_suffix() < 10_000);
        }
    }
}
