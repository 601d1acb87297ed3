//! # Store
//!
//! This module defines the `Store`, the state-machine object that owns a reducer's state.
//! Every transition goes through [`Store::dispatch`], which runs the reducer, keeps or
//! replaces the state, and publishes the new value to subscribers.

use crate::reducer::{reducer_name, Reducer};
use crate::subscription::Subscription;
use std::marker::PhantomData;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Owns the state of a [`Reducer`] and broadcasts every applied transition.
///
/// **Concurrency Model**:
/// The store is driven from a single owner (`&mut self`), one action at a time, so the state
/// needs no lock. Views never hold the state themselves: they keep a [`Subscription`] and
/// re-render when it reports a change.
///
/// ## Operations
///
/// * **Dispatch**:
///     1. Logs the action.
///     2. Calls `R::reduce` with the current state.
///     3. On success, replaces the state, bumps the version and notifies subscribers. A result
///        equal to the current state is a no-op: no version bump, no notification.
///     4. On rejection, logs a warning and leaves the state untouched. Subscribers are not
///        woken.
///
/// * **Subscribe**: hands out a [`Subscription`] that starts at the current version.
pub struct Store<R: Reducer> {
    state: R::State,
    version: u64,
    notifier: watch::Sender<R::State>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    /// Creates a store holding `initial`.
    pub fn new(initial: R::State) -> Self {
        let (notifier, _) = watch::channel(initial.clone());
        info!(reducer = reducer_name::<R>(), "Store started");
        Self {
            state: initial,
            version: 0,
            notifier,
            _reducer: PhantomData,
        }
    }

    /// Current state.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of transitions that changed the state. Rejected and no-op actions do not count.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies `action` and returns the resulting state.
    ///
    /// A rejected action is logged and absorbed: the returned state is the previous one.
    pub fn dispatch(&mut self, action: R::Action) -> &R::State {
        if let Err(e) = self.try_dispatch(action) {
            warn!(reducer = reducer_name::<R>(), error = %e, "Action rejected");
        }
        &self.state
    }

    /// Applies `action`, reporting a rejection to the caller instead of logging it.
    pub fn try_dispatch(&mut self, action: R::Action) -> Result<&R::State, R::Rejection> {
        let reducer = reducer_name::<R>();
        debug!(reducer, ?action, "Dispatch");

        let next = R::reduce(&self.state, action)?;
        if next == self.state {
            debug!(reducer, version = self.version, "Unchanged");
            return Ok(&self.state);
        }
        self.state = next;
        self.version += 1;
        self.notifier.send_replace(self.state.clone());
        info!(reducer, version = self.version, "Applied");
        Ok(&self.state)
    }

    /// Subscribes to future transitions.
    pub fn subscribe(&self) -> Subscription<R::State> {
        Subscription::new(self.notifier.subscribe())
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.notifier.receiver_count()
    }
}

impl<R: Reducer> Drop for Store<R> {
    fn drop(&mut self) {
        debug!(reducer = reducer_name::<R>(), version = self.version, "Store dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum ListAction {
        Push(&'static str),
        Clear,
        Refuse,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("refused")]
    struct Refused;

    struct Names;

    impl Reducer for Names {
        type State = Vec<&'static str>;
        type Action = ListAction;
        type Rejection = Refused;

        fn reduce(state: &Self::State, action: ListAction) -> Result<Self::State, Refused> {
            match action {
                ListAction::Push(name) => {
                    let mut next = state.clone();
                    next.push(name);
                    Ok(next)
                }
                ListAction::Clear => Ok(Vec::new()),
                ListAction::Refuse => Err(Refused),
            }
        }
    }

    #[test]
    fn dispatch_applies_and_counts_versions() {
        let mut store = Store::<Names>::new(vec!["a"]);
        assert_eq!(store.dispatch(ListAction::Push("b")), &vec!["a", "b"]);
        assert_eq!(store.version(), 1);

        store.dispatch(ListAction::Clear);
        assert!(store.state().is_empty());
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn rejected_action_keeps_state_and_version() {
        let mut store = Store::<Names>::new(vec!["a"]);
        assert_eq!(store.dispatch(ListAction::Refuse), &vec!["a"]);
        assert_eq!(store.version(), 0);
        assert!(store.try_dispatch(ListAction::Refuse).is_err());
    }

    #[test]
    fn subscription_only_sees_applied_transitions() {
        let mut store = Store::<Names>::new(Vec::new());
        let mut sub = store.subscribe();
        assert_eq!(store.subscriber_count(), 1);
        assert!(!sub.has_changed());

        store.dispatch(ListAction::Refuse);
        assert!(!sub.has_changed());

        store.dispatch(ListAction::Push("x"));
        assert_eq!(sub.take_change(), Some(vec!["x"]));
        assert_eq!(sub.take_change(), None);
    }

    #[test]
    fn equal_result_is_not_a_transition() {
        let mut store = Store::<Names>::new(Vec::new());
        let sub = store.subscribe();

        store.dispatch(ListAction::Clear);
        assert_eq!(store.version(), 0);
        assert!(!sub.has_changed());
        assert!(store.try_dispatch(ListAction::Clear).is_ok());
    }
}
