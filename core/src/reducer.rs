//! The Reducer trait - core abstraction for business logic.
//!
//! Reducers are pure functions: `(State, Action, Environment) → Effects`.
//! They contain all business logic and are deterministic and testable.

use crate::effect::Effect;
use smallvec::SmallVec;

/// The Reducer trait - core abstraction for business logic
///
/// # Type Parameters
///
/// - `State`: The domain state this reducer operates on
/// - `Action`: The action type this reducer processes
/// - `Environment`: The injected collaborators this reducer needs
///
/// # Example
///
/// ```ignore
/// impl Reducer for SessionReducer {
///     type State = SessionState;
///     type Action = SessionAction;
///     type Environment = SessionEnvironment;
///
///     fn reduce(
///         &self,
///         state: &mut SessionState,
///         action: SessionAction,
///         env: &SessionEnvironment,
///     ) -> SmallVec<[Effect<SessionAction>; 4]> {
///         match action {
///             SessionAction::LogOut => {
///                 state.current = None;
///                 env.storage.clear();
///                 SmallVec::new()
///             }
///             _ => SmallVec::new(),
///         }
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type with injected collaborators
    type Environment;

    /// Reduce an action into state changes and effects
    ///
    /// This is a pure function that:
    /// 1. Validates the action
    /// 2. Updates state in place
    /// 3. Returns effect descriptions to be executed
    ///
    /// Rejected actions (failed validation, transitions out of a terminal
    /// state) leave the step-relevant state untouched and return no effects;
    /// they never panic and never surface as `Err`.
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]>;
}
