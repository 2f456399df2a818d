//! # Encore Runtime
//!
//! Store runtime for the Encore booking marketplace.
//!
//! The [`Store`] coordinates reducer execution: actions go in, the reducer
//! runs synchronously under the single state lock, and the returned effect
//! descriptions are executed on the async runtime. Actions produced by
//! effects are fed back through the reducer and broadcast to observers, so a
//! surface can wait for a terminal event (for example a confirmed booking).
//!
//! There is exactly one active mutator per store — the UI drives one booking
//! draft and one session at a time — so no retry or failure-isolation
//! machinery lives here; every core operation completes locally.
//!
//! ## Example
//!
//! ```ignore
//! use encore_runtime::Store;
//!
//! let store = Store::new(BookingState::seeded(seed), BookingReducer::new(), env);
//!
//! store.send(BookingAction::Advance).await?;
//! let step = store.state(|s| s.step).await;
//! ```

use encore_core::{effect::Effect, reducer::Reducer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, broadcast};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// All of these are infrastructure-level: domain rejections never
    /// surface here, they are recorded in feature state by the reducer.
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Action broadcast channel closed
        ///
        /// Typically means the store is shutting down while an observer
        /// was waiting.
        #[error("Action broadcast channel closed")]
        ChannelClosed,

        /// Timeout waiting for a terminal action
        ///
        /// Returned by `send_and_wait_for` when the timeout expires before
        /// a matching action is received.
        #[error("Timeout waiting for action")]
        Timeout,
    }
}

pub use error::StoreError;

/// The Store - runtime for a feature's reducer
///
/// Holds the feature state behind a single async lock, runs the reducer on
/// every dispatched action, and executes the resulting effects.
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    shutdown: Arc<AtomicBool>,
    /// Actions produced by effects are broadcast to observers; direct sends
    /// are not. Observers therefore see events, not UI commands.
    action_broadcast: broadcast::Sender<A>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + Clone + 'static,
    A: Send + Clone + std::fmt::Debug + 'static,
    S: Send + Sync + 'static,
    E: Send + Sync + Clone + 'static,
{
    /// Creates a new store with initial state, reducer, and environment
    ///
    /// Action broadcast capacity defaults to 16; use
    /// [`Store::with_broadcast_capacity`] when observers are slow.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self::with_broadcast_capacity(initial_state, reducer, environment, 16)
    }

    /// Creates a new store with a custom action broadcast capacity
    #[must_use]
    pub fn with_broadcast_capacity(
        initial_state: S,
        reducer: R,
        environment: E,
        capacity: usize,
    ) -> Self {
        let (action_broadcast, _) = broadcast::channel(capacity);

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            shutdown: Arc::new(AtomicBool::new(false)),
            action_broadcast,
        }
    }

    /// Send an action through the reducer and execute its effects
    ///
    /// The reducer runs synchronously under the state lock; effects are
    /// executed after the lock is released. Actions produced by effects are
    /// fed back through `send` and broadcast to observers.
    ///
    /// # Errors
    ///
    /// [`StoreError::ShutdownInProgress`] when the store no longer accepts
    /// actions.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<(), StoreError> {
        if self.shutdown.load(Ordering::SeqCst) {
            return Err(StoreError::ShutdownInProgress);
        }

        metrics::counter!("store.actions.dispatched").increment(1);

        let effects = {
            let mut state = self.state.write().await;
            self.reducer.reduce(&mut state, action, &self.environment)
        };

        for effect in effects {
            self.execute_effect(effect);
        }

        Ok(())
    }

    /// Send an action and wait for a matching result action
    ///
    /// Designed for surfaces that need a terminal event: subscribe first,
    /// send, then wait for the first effect-produced action matching the
    /// predicate.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Timeout`]: no matching action within `timeout`
    /// - [`StoreError::ChannelClosed`]: the store shut down while waiting
    /// - [`StoreError::ShutdownInProgress`]: the initial send was rejected
    pub async fn send_and_wait_for<F>(
        &self,
        action: A,
        predicate: F,
        timeout: Duration,
    ) -> Result<A, StoreError>
    where
        F: Fn(&A) -> bool,
    {
        // Subscribe BEFORE sending to avoid a race with fast effects.
        let mut rx = self.action_broadcast.subscribe();

        self.send(action).await?;

        tokio::time::timeout(timeout, async {
            loop {
                match rx.recv().await {
                    Ok(action) if predicate(&action) => return Ok(action),
                    Ok(_) => {}
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // Slow observer; if the terminal action was among the
                        // dropped ones the timeout catches it.
                        tracing::warn!(skipped, "action observer lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        return Err(StoreError::ChannelClosed);
                    }
                }
            }
        })
        .await
        .map_err(|_| StoreError::Timeout)?
    }

    /// Subscribe to actions produced by effects
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
        self.action_broadcast.subscribe()
    }

    /// Read the current state through a projection
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Stop accepting new actions
    ///
    /// In-flight effects finish on their own; there is nothing durable to
    /// flush in this product.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
        tracing::debug!("store shutdown requested");
    }

    /// Execute one effect, spawning onto the runtime as needed
    fn execute_effect(&self, effect: Effect<A>) {
        match effect {
            Effect::None => {}

            Effect::Parallel(effects) => {
                for effect in effects {
                    self.execute_effect(effect);
                }
            }

            Effect::Sequential(effects) => {
                let store = self.clone();
                tokio::spawn(async move {
                    for effect in effects {
                        store.run_effect(effect).await;
                    }
                });
            }

            Effect::Delay { duration, action } => {
                let store = self.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(duration).await;
                    store.feed_back(*action).await;
                });
            }

            Effect::Future(future) => {
                let store = self.clone();
                tokio::spawn(async move {
                    if let Some(action) = future.await {
                        store.feed_back(action).await;
                    }
                });
            }
        }
        metrics::counter!("store.effects.executed").increment(1);
    }

    /// Await one effect to completion (used inside `Sequential`)
    fn run_effect(
        &self,
        effect: Effect<A>,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send + '_>> {
        Box::pin(async move {
            match effect {
                Effect::None => {}
                Effect::Parallel(effects) => {
                    for effect in effects {
                        self.execute_effect(effect);
                    }
                }
                Effect::Sequential(effects) => {
                    for effect in effects {
                        self.run_effect(effect).await;
                    }
                }
                Effect::Delay { duration, action } => {
                    tokio::time::sleep(duration).await;
                    self.feed_back(*action).await;
                }
                Effect::Future(future) => {
                    if let Some(action) = future.await {
                        self.feed_back(action).await;
                    }
                }
            }
            metrics::counter!("store.effects.executed").increment(1);
        })
    }

    /// Feed an effect-produced action back through the reducer and broadcast it
    ///
    /// The reducer runs first so observers woken by the broadcast always see
    /// the updated state.
    async fn feed_back(&self, action: A) {
        if let Err(error) = Box::pin(self.send(action.clone())).await {
            tracing::debug!(%error, "effect action dropped during shutdown");
            return;
        }

        // Observers may come and go; a send with no receivers is fine.
        let _ = self.action_broadcast.send(action);
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            shutdown: Arc::clone(&self.shutdown),
            action_broadcast: self.action_broadcast.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encore_core::{SmallVec, smallvec};

    #[derive(Clone, Debug, Default)]
    struct FlowState {
        started: bool,
        finished: bool,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum FlowAction {
        Start,
        Finished,
    }

    #[derive(Clone)]
    struct FlowEnv;

    #[derive(Clone)]
    struct FlowReducer;

    impl Reducer for FlowReducer {
        type State = FlowState;
        type Action = FlowAction;
        type Environment = FlowEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                FlowAction::Start => {
                    state.started = true;
                    smallvec![Effect::emit(FlowAction::Finished)]
                }
                FlowAction::Finished => {
                    state.finished = true;
                    SmallVec::new()
                }
            }
        }
    }

    #[tokio::test]
    async fn send_runs_the_reducer_synchronously() {
        let store = Store::new(FlowState::default(), FlowReducer, FlowEnv);

        let sent = store.send(FlowAction::Start).await;
        assert!(sent.is_ok());
        assert!(store.state(|s| s.started).await);
    }

    #[tokio::test]
    async fn effect_actions_feed_back_and_broadcast() {
        let store = Store::new(FlowState::default(), FlowReducer, FlowEnv);

        let result = store
            .send_and_wait_for(
                FlowAction::Start,
                |a| matches!(a, FlowAction::Finished),
                Duration::from_secs(1),
            )
            .await;

        assert!(matches!(result, Ok(FlowAction::Finished)));
        assert!(store.state(|s| s.finished).await);
    }

    #[tokio::test]
    async fn observers_see_effect_produced_actions() {
        let store = Store::new(FlowState::default(), FlowReducer, FlowEnv);
        let mut rx = store.subscribe_actions();

        let sent = store.send(FlowAction::Start).await;
        assert!(sent.is_ok());

        let observed = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await;
        assert!(matches!(observed, Ok(Ok(FlowAction::Finished))));
    }

    #[tokio::test]
    async fn shutdown_rejects_new_actions() {
        let store = Store::new(FlowState::default(), FlowReducer, FlowEnv);
        store.shutdown();

        let result = store.send(FlowAction::Start).await;
        assert!(matches!(result, Err(StoreError::ShutdownInProgress)));
    }

    #[tokio::test]
    async fn delay_effects_dispatch_after_sleeping() {
        #[derive(Clone)]
        struct DelayReducer;

        impl Reducer for DelayReducer {
            type State = FlowState;
            type Action = FlowAction;
            type Environment = FlowEnv;

            fn reduce(
                &self,
                state: &mut Self::State,
                action: Self::Action,
                _env: &Self::Environment,
            ) -> SmallVec<[Effect<Self::Action>; 4]> {
                match action {
                    FlowAction::Start => {
                        state.started = true;
                        smallvec![Effect::Delay {
                            duration: Duration::from_millis(10),
                            action: Box::new(FlowAction::Finished),
                        }]
                    }
                    FlowAction::Finished => {
                        state.finished = true;
                        SmallVec::new()
                    }
                }
            }
        }

        let store = Store::new(FlowState::default(), DelayReducer, FlowEnv);
        let result = store
            .send_and_wait_for(
                FlowAction::Start,
                |a| matches!(a, FlowAction::Finished),
                Duration::from_secs(1),
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn waiting_for_an_action_that_never_comes_times_out() {
        let store = Store::new(FlowState::default(), FlowReducer, FlowEnv);

        // Finished is terminal and emits nothing further.
        let result = store
            .send_and_wait_for(
                FlowAction::Finished,
                |a| matches!(a, FlowAction::Start),
                Duration::from_millis(50),
            )
            .await;

        assert!(matches!(result, Err(StoreError::Timeout)));
    }
}
