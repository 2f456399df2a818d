//! # Encore Core
//!
//! Core traits and types for the Encore booking marketplace.
//!
//! This crate provides the fundamental abstractions the feature crates are
//! built on. Encore follows the Composable Architecture: all business logic
//! lives in pure reducers, all side work is described as effect values, and
//! every collaborator the core talks to (clock, notifier, navigation, scoped
//! storage) is injected through an environment trait.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (owned data, `Clone + Debug`)
//! - **Action**: All possible inputs to a reducer (UI commands and events)
//! - **Reducer**: Pure function `(State, Action, Environment) → Effects`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected collaborators via traits
//!
//! ## Example
//!
//! ```ignore
//! use encore_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! impl Reducer for BookingReducer {
//!     type State = BookingState;
//!     type Action = BookingAction;
//!     type Environment = BookingEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut BookingState,
//!         action: BookingAction,
//!         env: &BookingEnvironment,
//!     ) -> SmallVec<[Effect<BookingAction>; 4]> {
//!         // Business logic goes here
//!         SmallVec::new()
//!     }
//! }
//! ```

pub mod effect;
pub mod environment;
pub mod money;
pub mod notification;
pub mod reducer;
pub mod route;

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};
