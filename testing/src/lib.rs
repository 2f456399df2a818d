//! # Encore Testing
//!
//! Testing utilities and helpers for the Encore feature crates.
//!
//! This crate provides:
//! - Mock implementations of the environment collaborators (fixed clock,
//!   recording notifier and navigator, sequential reference source)
//! - The [`ReducerTest`] fluent harness for Given-When-Then reducer tests
//! - Assertion helpers for effect lists
//!
//! ## Example
//!
//! ```ignore
//! use encore_testing::{ReducerTest, assertions, mocks::test_clock};
//!
//! ReducerTest::new(BookingReducer::new())
//!     .with_env(test_environment())
//!     .given_state(BookingState::seeded(seed))
//!     .when_action(BookingAction::Advance)
//!     .then_state(|state| assert_eq!(state.step, BookingStep::Options))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

pub mod mocks;

pub use mocks::{
    FixedClock, RecordingNavigator, RecordingNotifier, SequentialReferences, test_clock,
};
pub use reducer_test::{ReducerTest, assertions};
