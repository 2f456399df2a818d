//! Navigation targets.
//!
//! The core never performs navigation itself; it computes [`RoutePath`]
//! values (guard redirects, booking entry targets) and hands them to the
//! [`Navigator`](crate::environment::Navigator) collaborator.

use std::borrow::Cow;

/// A navigation target path
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RoutePath(Cow<'static, str>);

impl RoutePath {
    /// Creates a route from a static path literal
    #[must_use]
    pub const fn from_static(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Creates a route from an owned path
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(Cow::Owned(path.into()))
    }

    /// Returns the path as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical application routes
pub mod routes {
    use super::RoutePath;

    /// Landing page
    pub const HOME: RoutePath = RoutePath::from_static("/");

    /// The four-step booking flow
    pub const BOOKING: RoutePath = RoutePath::from_static("/booking");

    /// Client login surface
    pub const CLIENT_LOGIN: RoutePath = RoutePath::from_static("/client/login");

    /// Client dashboard
    pub const DASHBOARD_CLIENT: RoutePath = RoutePath::from_static("/dashboard/client");

    /// Artist dashboard
    pub const DASHBOARD_ARTIST: RoutePath = RoutePath::from_static("/dashboard/artist");

    /// Admin dashboard
    pub const DASHBOARD_ADMIN: RoutePath = RoutePath::from_static("/dashboard/admin");
}
