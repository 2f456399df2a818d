//! Domain types for the session feature.

use encore_core::route::{RoutePath, routes};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random `UserId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `UserId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of an authenticated user
///
/// A closed enumeration: the guard matches it exhaustively, so there is no
/// "unrecognized role" path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Books artists for events
    Client,
    /// Performs at events
    Artist,
    /// Operates the marketplace
    Admin,
}

impl Role {
    /// The dashboard canonically associated with this role
    #[must_use]
    pub const fn dashboard_path(self) -> RoutePath {
        match self {
            Self::Client => routes::DASHBOARD_CLIENT,
            Self::Artist => routes::DASHBOARD_ARTIST,
            Self::Admin => routes::DASHBOARD_ADMIN,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Client => write!(f, "client"),
            Self::Artist => write!(f, "artist"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// The currently authenticated identity
///
/// Serialized as-is into scoped storage; field names match the persisted
/// payload of earlier builds, so existing sessions survive an upgrade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// User identifier
    #[serde(rename = "id")]
    pub user_id: UserId,
    /// Name shown in the UI shell
    #[serde(rename = "name")]
    pub display_name: String,
    /// Login email
    pub email: String,
    /// Authenticated role
    pub role: Role,
}

/// An identity already validated by the auth collaborator
///
/// The session store never synthesizes credentials; it receives this from
/// whatever performed the authentication and turns it into a [`Session`].
/// When `display_name` is absent the local part of the email is used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    /// User identifier issued by the auth collaborator
    pub user_id: UserId,
    /// Preferred display name, if the user provided one
    pub display_name: Option<String>,
    /// Login email
    pub email: String,
    /// Authenticated role
    pub role: Role,
}

/// State of the session feature
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The active session, if anyone is logged in
    pub current: Option<Session>,
}

impl SessionState {
    /// Creates a logged-out state
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Whether someone is logged in
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The active session, if any
    #[must_use]
    pub const fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Artist).unwrap_or_default();
        assert_eq!(json, "\"artist\"");
    }

    #[test]
    fn session_round_trips_with_legacy_field_names() {
        let session = Session {
            user_id: UserId::new(),
            display_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Client,
        };

        let json = serde_json::to_string(&session).unwrap_or_default();
        assert!(json.contains("\"name\":\"Ada\""));
        assert!(json.contains("\"role\":\"client\""));

        let back: Session = serde_json::from_str(&json).unwrap_or(session.clone());
        assert_eq!(back, session);
    }

    #[test]
    fn dashboard_paths_are_role_specific() {
        assert_eq!(Role::Client.dashboard_path().as_str(), "/dashboard/client");
        assert_eq!(Role::Artist.dashboard_path().as_str(), "/dashboard/artist");
        assert_eq!(Role::Admin.dashboard_path().as_str(), "/dashboard/admin");
    }
}
