//! Mock implementations of the environment collaborators.

use chrono::{DateTime, Utc};
use encore_core::environment::{Clock, Navigator, Notifier, ReferenceSource};
use encore_core::notification::Notification;
use encore_core::route::RoutePath;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

/// Fixed clock for deterministic tests
///
/// Always returns the same time, making tests reproducible.
#[derive(Debug, Clone)]
pub struct FixedClock {
    time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a new fixed clock with the given time
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Create a default fixed clock for tests (2026-01-01 00:00:00 UTC)
///
/// # Panics
///
/// This function will panic if the hardcoded timestamp fails to parse,
/// which should never happen in practice.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_clock() -> FixedClock {
    FixedClock::new(
        DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
            .expect("hardcoded timestamp should always parse")
            .with_timezone(&Utc),
    )
}

/// Notifier that records everything it is asked to deliver
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains and returns the recorded notifications
    #[must_use]
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(
            &mut self
                .sent
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner),
        )
    }

    /// The recorded message texts, in delivery order
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .map(|notification| notification.message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(notification);
    }
}

/// Navigator that records every requested path change
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<RoutePath>>,
}

impl RecordingNavigator {
    /// Creates an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently requested path, if any
    #[must_use]
    pub fn last(&self) -> Option<RoutePath> {
        self.visits
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Drains and returns the recorded paths, in request order
    #[must_use]
    pub fn take(&self) -> Vec<RoutePath> {
        std::mem::take(
            &mut self
                .visits
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner),
        )
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &RoutePath, _state: Option<serde_json::Value>) {
        self.visits
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(path.clone());
    }
}

/// Reference source handing out consecutive suffixes
///
/// Deterministic stand-in for the random production source.
#[derive(Debug)]
pub struct SequentialReferences {
    next: AtomicU32,
}

impl SequentialReferences {
    /// Creates a source starting at `first`
    #[must_use]
    pub const fn starting_at(first: u32) -> Self {
        Self {
            next: AtomicU32::new(first),
        }
    }
}

impl Default for SequentialReferences {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl ReferenceSource for SequentialReferences {
    fn next_suffix(&self) -> u32 {
        self.next.fetch_add(1, Ordering::SeqCst) % 10_000
    }
}
