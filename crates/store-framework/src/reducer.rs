//! # Reducer Trait
//!
//! The `Reducer` trait is the contract every piece of page state (the stock list, and
//! anything built the same way later) implements to be managed by a [`Store`](crate::Store).
//! It names the state, the action enum and the rejection type, and provides a single pure
//! transition function.
//!
//! # Architecture Note
//! The store loop is written *once* against this trait. The state type only has to say how
//! one action turns the old state into the new one; ownership, notification and logging live
//! in the store.
//!
//! A reducer never mutates in place and never performs I/O. Rejections are values, not
//! panics: the store logs them and keeps the previous state.

use std::fmt::Debug;

/// Pure state-transition function managed by a [`Store`](crate::Store).
///
/// # Associated Types
/// - `State`: the value owned by the store and broadcast to subscribers.
/// - `Action`: the tagged union of requests. Keep a catch-all variant if the action set is
///   built from untyped input.
/// - `Rejection`: why an action was refused. The store never surfaces it to the user, it
///   only logs it.
///
/// # Example
///
/// ```rust
/// use store_framework::{Reducer, Store};
///
/// #[derive(Debug)]
/// enum CounterAction { Add(i64) }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("overflow")]
/// struct Overflow;
///
/// struct Counter;
///
/// impl Reducer for Counter {
///     type State = i64;
///     type Action = CounterAction;
///     type Rejection = Overflow;
///
///     fn reduce(state: &i64, action: CounterAction) -> Result<i64, Overflow> {
///         match action {
///             CounterAction::Add(n) => state.checked_add(n).ok_or(Overflow),
///         }
///     }
/// }
///
/// let mut store = Store::<Counter>::new(1);
/// assert_eq!(*store.dispatch(CounterAction::Add(2)), 3);
/// assert_eq!(*store.dispatch(CounterAction::Add(i64::MAX)), 3);
/// ```
pub trait Reducer: 'static {
    /// The state owned by the store. Equality lets the store skip transitions that change
    /// nothing.
    type State: Clone + Debug + PartialEq + Send + Sync + 'static;

    /// The requests this reducer understands.
    type Action: Debug;

    /// Why an action was refused.
    type Rejection: std::error::Error + Send + Sync + 'static;

    /// Computes the next state, or refuses the action.
    ///
    /// Must be deterministic: the same state and action always give the same result.
    fn reduce(state: &Self::State, action: Self::Action) -> Result<Self::State, Self::Rejection>;
}

/// Short type name used as the `reducer` field in log lines.
pub(crate) fn reducer_name<R: Reducer>() -> &'static str {
    std::any::type_name::<R>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
