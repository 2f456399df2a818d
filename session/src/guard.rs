//! Role guard for protected routes.
//!
//! Pure decision logic: given the current session and the roles a surface
//! requires, decide whether the navigation is allowed and where to send the
//! user otherwise. No side effects; the router collaborator acts on the
//! decision.

use crate::types::{Role, Session};
use encore_core::route::{RoutePath, routes};

/// Outcome of a guard check for one navigation attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardDecision {
    /// Whether the navigation may proceed
    pub allowed: bool,
    /// Where to send the user instead, when not allowed
    pub redirect: Option<RoutePath>,
}

impl GuardDecision {
    /// An allowing decision
    #[must_use]
    pub const fn allowed() -> Self {
        Self {
            allowed: true,
            redirect: None,
        }
    }

    /// A denying decision redirecting to `path`
    #[must_use]
    pub const fn denied(path: RoutePath) -> Self {
        Self {
            allowed: false,
            redirect: Some(path),
        }
    }
}

/// Decides whether a navigation target is permitted for `session`
///
/// - No session: denied, redirect home.
/// - `required` empty or containing the session role: allowed.
/// - Otherwise: denied, redirect to the dashboard of the session's own role.
#[must_use]
pub fn authorize(session: Option<&Session>, required: &[Role]) -> GuardDecision {
    let Some(session) = session else {
        return GuardDecision::denied(routes::HOME);
    };

    if required.is_empty() || required.contains(&session.role) {
        return GuardDecision::allowed();
    }

    GuardDecision::denied(session.role.dashboard_path())
}
