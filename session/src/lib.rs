//! Session state for the Encore booking marketplace.
//!
//! Holds who is currently authenticated and in what role. The session
//! reducer accepts an already-validated [`Identity`] from the auth
//! collaborator (credential issuance is out of scope here), persists the
//! resulting [`Session`] into device-local scoped storage, and rehydrates it
//! on process start. Malformed persisted data fails open to logged-out.
//!
//! The [`guard`] module decides whether a navigation target is permitted for
//! the current session and where to redirect otherwise.

pub mod guard;
pub mod reducer;
pub mod types;

pub use guard::{GuardDecision, authorize};
pub use reducer::{SessionAction, SessionEnvironment, SessionReducer, STORAGE_NAMESPACE};
pub use types::{Identity, Role, Session, SessionState, UserId};
