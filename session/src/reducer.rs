//! Reducer logic for the session feature.
//!
//! Rehydrate on start, log in with a validated identity, log out. The
//! persisted payload lives under a single fixed namespace in device-local
//! scoped storage; anything unreadable there fails open to logged-out.

use crate::types::{Identity, Session, SessionState};
use encore_core::{
    SmallVec,
    effect::Effect,
    environment::{Navigator, Notifier, ScopedStorage},
    notification::Notification,
    reducer::Reducer,
    route::routes,
};
use std::sync::Arc;

/// Namespace key under which the UI shell scopes the session storage
pub const STORAGE_NAMESPACE: &str = "encore.session";

/// Environment collaborators for the session reducer
#[derive(Clone)]
pub struct SessionEnvironment {
    /// Device-local scoped storage for the persisted session
    pub storage: Arc<dyn ScopedStorage>,
    /// Toast layer of the UI shell
    pub notifier: Arc<dyn Notifier>,
    /// Router of the UI shell
    pub navigator: Arc<dyn Navigator>,
}

impl SessionEnvironment {
    /// Creates a new `SessionEnvironment`
    #[must_use]
    pub fn new(
        storage: Arc<dyn ScopedStorage>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            storage,
            notifier,
            navigator,
        }
    }
}

/// Actions for the session feature
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    /// Restore a persisted session on process start
    Rehydrate,

    /// Accept a validated identity from the auth collaborator
    LogIn {
        /// The identity to start a session for
        identity: Identity,
    },

    /// End the active session
    LogOut,
}

/// Reducer for the session feature
#[derive(Clone, Debug, Default)]
pub struct SessionReducer;

impl SessionReducer {
    /// Creates a new `SessionReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds a session from a validated identity
    ///
    /// Falls back to the local part of the email when no display name was
    /// provided, mirroring the signup surface's behavior.
    fn session_from_identity(identity: Identity) -> Session {
        let display_name = identity.display_name.unwrap_or_else(|| {
            identity
                .email
                .split('@')
                .next()
                .unwrap_or(identity.email.as_str())
                .to_string()
        });

        Session {
            user_id: identity.user_id,
            display_name,
            email: identity.email,
            role: identity.role,
        }
    }
}

impl Reducer for SessionReducer {
    type State = SessionState;
    type Action = SessionAction;
    type Environment = SessionEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SessionAction::Rehydrate => {
                state.current = match env.storage.read() {
                    None => None,
                    Some(payload) => match serde_json::from_str::<Session>(&payload) {
                        Ok(session) => {
                            tracing::debug!(user = %session.user_id, "session rehydrated");
                            Some(session)
                        }
                        Err(error) => {
                            tracing::warn!(%error, "persisted session unreadable, starting logged out");
                            None
                        }
                    },
                };
                SmallVec::new()
            }

            SessionAction::LogIn { identity } => {
                let session = Self::session_from_identity(identity);

                match serde_json::to_string(&session) {
                    Ok(payload) => {
                        env.storage.write(&payload);
                        tracing::debug!(namespace = STORAGE_NAMESPACE, "session persisted");
                    }
                    Err(error) => {
                        tracing::warn!(%error, "session not persisted, continuing in memory");
                    }
                }

                env.notifier
                    .notify(Notification::success("Welcome to Encore!"));
                env.navigator
                    .navigate(&session.role.dashboard_path(), None);

                state.current = Some(session);
                SmallVec::new()
            }

            SessionAction::LogOut => {
                if state.current.take().is_none() {
                    tracing::debug!("logout with no active session ignored");
                    return SmallVec::new();
                }

                env.storage.clear();
                env.navigator.navigate(&routes::HOME, None);
                SmallVec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Role, UserId};
    use encore_core::environment::InMemoryStorage;
    use encore_testing::{
        ReducerTest,
        assertions,
        mocks::{RecordingNavigator, RecordingNotifier},
    };

    struct TestEnv {
        env: SessionEnvironment,
        storage: Arc<InMemoryStorage>,
        notifier: Arc<RecordingNotifier>,
        navigator: Arc<RecordingNavigator>,
    }

    fn test_env(storage: InMemoryStorage) -> TestEnv {
        let storage = Arc::new(storage);
        let notifier = Arc::new(RecordingNotifier::new());
        let navigator = Arc::new(RecordingNavigator::new());
        TestEnv {
            env: SessionEnvironment::new(storage.clone(), notifier.clone(), navigator.clone()),
            storage,
            notifier,
            navigator,
        }
    }

    fn identity(role: Role) -> Identity {
        Identity {
            user_id: UserId::new(),
            display_name: Some("Ada".to_string()),
            email: "ada@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn rehydrate_restores_a_persisted_session() {
        let session = Session {
            user_id: UserId::new(),
            display_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Client,
        };
        let payload = serde_json::to_string(&session).unwrap_or_default();
        let test = test_env(InMemoryStorage::with_payload(payload));

        let expected = session.clone();
        ReducerTest::new(SessionReducer::new())
            .with_env(test.env)
            .given_state(SessionState::new())
            .when_action(SessionAction::Rehydrate)
            .then_state(move |state| {
                assert_eq!(state.current, Some(expected.clone()));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn rehydrate_with_corrupt_payload_stays_logged_out() {
        let test = test_env(InMemoryStorage::with_payload("{not json"));

        ReducerTest::new(SessionReducer::new())
            .with_env(test.env)
            .given_state(SessionState::new())
            .when_action(SessionAction::Rehydrate)
            .then_state(|state| {
                assert!(!state.is_authenticated());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn rehydrate_with_empty_storage_stays_logged_out() {
        let test = test_env(InMemoryStorage::new());

        ReducerTest::new(SessionReducer::new())
            .with_env(test.env)
            .given_state(SessionState::new())
            .when_action(SessionAction::Rehydrate)
            .then_state(|state| {
                assert_eq!(state.current, None);
            })
            .run();
    }

    #[test]
    fn login_persists_welcomes_and_navigates_to_the_role_dashboard() {
        let test = test_env(InMemoryStorage::new());
        let storage = test.storage.clone();
        let notifier = test.notifier.clone();
        let navigator = test.navigator.clone();

        ReducerTest::new(SessionReducer::new())
            .with_env(test.env)
            .given_state(SessionState::new())
            .when_action(SessionAction::LogIn {
                identity: identity(Role::Artist),
            })
            .then_state(move |state| {
                assert!(state.is_authenticated());
                assert!(storage.read().is_some());
                assert_eq!(notifier.messages(), vec!["Welcome to Encore!"]);
                assert_eq!(
                    navigator.last().map(|path| path.as_str().to_string()),
                    Some("/dashboard/artist".to_string())
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn login_derives_the_display_name_from_the_email_when_absent() {
        let test = test_env(InMemoryStorage::new());

        ReducerTest::new(SessionReducer::new())
            .with_env(test.env)
            .given_state(SessionState::new())
            .when_action(SessionAction::LogIn {
                identity: Identity {
                    user_id: UserId::new(),
                    display_name: None,
                    email: "grace.hopper@example.com".to_string(),
                    role: Role::Client,
                },
            })
            .then_state(|state| {
                let name = state.current().map(|s| s.display_name.as_str());
                assert_eq!(name, Some("grace.hopper"));
            })
            .run();
    }

    #[test]
    fn logout_clears_memory_storage_and_goes_home() {
        let test = test_env(InMemoryStorage::new());
        let storage = test.storage.clone();
        let navigator = test.navigator.clone();

        ReducerTest::new(SessionReducer::new())
            .with_env(test.env)
            .given_state(SessionState::new())
            .when_action(SessionAction::LogIn {
                identity: identity(Role::Client),
            })
            .when_action(SessionAction::LogOut)
            .then_state(move |state| {
                assert!(!state.is_authenticated());
                assert_eq!(storage.read(), None);
                assert_eq!(
                    navigator.last().map(|path| path.as_str().to_string()),
                    Some("/".to_string())
                );
            })
            .run();
    }

    #[test]
    fn logout_when_logged_out_is_a_no_op() {
        let test = test_env(InMemoryStorage::new());
        let navigator = test.navigator.clone();

        ReducerTest::new(SessionReducer::new())
            .with_env(test.env)
            .given_state(SessionState::new())
            .when_action(SessionAction::LogOut)
            .then_state(move |state| {
                assert_eq!(state.current, None);
                assert_eq!(navigator.take(), vec![]);
            })
            .run();
    }
}
