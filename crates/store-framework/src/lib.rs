//! # Store Framework
//!
//! This crate provides the building blocks for reducer-driven page state: a pure
//! [`Reducer`] contract, a [`Store`] that owns the state and runs every transition, and
//! [`Subscription`]s that let views follow the state without owning it.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Transition Layer** ([`Reducer`]) - Your business rules, as a pure function
//! 2. **State Layer** ([`Store`]) - Ownership, versioning, logging and change notification
//! 3. **View Layer** ([`Subscription`]) - Latest-value change feed for re-rendering
//!
//! Host capabilities that pages need but must not own (blocking confirm/alert prompts) are
//! described by the [`Interaction`] trait and passed in when a handler runs.
//!
//! ## Quick Look
//!
//! ```rust
//! use store_framework::{Reducer, Store};
//!
//! #[derive(Debug)]
//! enum TodoAction { Add(String), Remove(usize) }
//!
//! #[derive(Debug, thiserror::Error)]
//! enum TodoRejection {
//!     #[error("empty title")]
//!     EmptyTitle,
//! }
//!
//! struct Todos;
//!
//! impl Reducer for Todos {
//!     type State = Vec<String>;
//!     type Action = TodoAction;
//!     type Rejection = TodoRejection;
//!
//!     fn reduce(state: &Vec<String>, action: TodoAction) -> Result<Vec<String>, TodoRejection> {
//!         match action {
//!             TodoAction::Add(title) if title.is_empty() => Err(TodoRejection::EmptyTitle),
//!             TodoAction::Add(title) => {
//!                 let mut next = state.clone();
//!                 next.push(title);
//!                 Ok(next)
//!             }
//!             TodoAction::Remove(index) => Ok(state
//!                 .iter()
//!                 .enumerate()
//!                 .filter(|(i, _)| *i != index)
//!                 .map(|(_, t)| t.clone())
//!                 .collect()),
//!         }
//!     }
//! }
//!
//! let mut store = Store::<Todos>::new(Vec::new());
//! let mut view = store.subscribe();
//!
//! store.dispatch(TodoAction::Add("write docs".into()));
//! store.dispatch(TodoAction::Add(String::new())); // rejected, logged, state kept
//!
//! assert_eq!(view.take_change(), Some(vec!["write docs".to_string()]));
//! ```
//!
//! ## Concurrency Model
//!
//! - A store is driven by its single owner, one action at a time (no locks)
//! - Subscriptions are `tokio::sync::watch` receivers: latest value wins
//! - Nothing in a transition suspends or performs I/O
//!
//! ## Testing
//!
//! See the [`mock`] module for an [`Interaction`] double with ordered expectations.

pub mod error;
pub mod interaction;
pub mod mock;
pub mod reducer;
pub mod store;
pub mod subscription;
pub mod tracing;

// Re-export core types for convenience
pub use error::StoreError;
pub use interaction::{AutoAnswer, Interaction};
pub use reducer::Reducer;
pub use store::Store;
pub use subscription::Subscription;
