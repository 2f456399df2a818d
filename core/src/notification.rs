//! User-facing notifications.
//!
//! Notifications are delivered through the
//! [`Notifier`](crate::environment::Notifier) collaborator. The UI shell owns
//! presentation and dismisses each notification after a fixed duration.

/// Notification severity, mapped to toast styling by the UI shell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Positive confirmation
    Success,
    /// Something went wrong
    Error,
    /// Neutral guidance (missing input, login required)
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A fire-and-forget message for the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Human-readable message text
    pub message: String,
    /// Severity level
    pub severity: Severity,
}

impl Notification {
    /// Creates a success notification
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// Creates an error notification
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Creates an info notification
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_the_severity() {
        assert_eq!(Notification::success("ok").severity, Severity::Success);
        assert_eq!(Notification::error("bad").severity, Severity::Error);
        assert_eq!(Notification::info("hint").severity, Severity::Info);
    }

    #[test]
    fn severity_display_is_lowercase() {
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
