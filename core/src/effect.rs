//! Effect type - side effect descriptions.
//!
//! Effects are NOT executed immediately. They are descriptions of what should
//! happen, returned from reducers and executed by the Store runtime.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Effect type - describes a side effect to be executed
///
/// # Type Parameters
///
/// - `Action`: The action type that effects can produce (feedback loop)
pub enum Effect<Action> {
    /// No-op effect
    None,

    /// Run effects in parallel
    Parallel(Vec<Effect<Action>>),

    /// Run effects sequentially
    Sequential(Vec<Effect<Action>>),

    /// Delayed action (for timeouts, retries)
    Delay {
        /// How long to wait
        duration: Duration,
        /// Action to dispatch after delay
        action: Box<Action>,
    },

    /// Arbitrary async computation
    ///
    /// Returns `Option<Action>` - if Some, the action is fed back into the
    /// reducer and broadcast to action observers.
    Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
}

// Manual Debug implementation since Future doesn't implement Debug
impl<Action> std::fmt::Debug for Effect<Action>
where
    Action: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "Effect::None"),
            Effect::Parallel(effects) => {
                f.debug_tuple("Effect::Parallel").field(effects).finish()
            },
            Effect::Sequential(effects) => {
                f.debug_tuple("Effect::Sequential").field(effects).finish()
            },
            Effect::Delay { duration, action } => f
                .debug_struct("Effect::Delay")
                .field("duration", duration)
                .field("action", action)
                .finish(),
            Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
        }
    }
}

impl<Action> Effect<Action> {
    /// Combine effects to run in parallel
    #[must_use]
    pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
        Effect::Parallel(effects)
    }

    /// Chain effects to run sequentially
    #[must_use]
    pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
        Effect::Sequential(effects)
    }

    /// Emit an event action back through the store
    ///
    /// Commands apply their event to state synchronously; the same event is
    /// then re-dispatched through this effect so action observers (for
    /// example a surface waiting on a confirmed booking) see it.
    #[must_use]
    pub fn emit(action: Action) -> Effect<Action>
    where
        Action: Send + 'static,
    {
        Effect::Future(Box::pin(std::future::ready(Some(action))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Ping,
    }

    #[test]
    fn debug_formatting_is_stable() {
        let effect: Effect<TestAction> = Effect::None;
        assert_eq!(format!("{effect:?}"), "Effect::None");

        let effect = Effect::merge(vec![Effect::<TestAction>::None]);
        assert!(format!("{effect:?}").starts_with("Effect::Parallel"));
    }

    #[test]
    #[allow(clippy::panic)] // Test assertion
    fn emit_resolves_to_the_action() {
        let effect = Effect::emit(TestAction::Ping);
        let Effect::Future(future) = effect else {
            panic!("emit should produce a future effect");
        };
        assert_eq!(tokio_test::block_on(future), Some(TestAction::Ping));
    }
}
