//! # Subscriptions
//!
//! The view side of a [`Store`](crate::Store). A `Subscription` is cheap to clone and only ever
//! sees the latest state: intermediate transitions that happened between two reads are
//! coalesced, which is exactly what a re-render needs.

use crate::error::StoreError;
use tokio::sync::watch;

/// Receives the state published by a [`Store`](crate::Store).
#[derive(Clone, Debug)]
pub struct Subscription<S> {
    receiver: watch::Receiver<S>,
}

impl<S: Clone> Subscription<S> {
    pub(crate) fn new(receiver: watch::Receiver<S>) -> Self {
        Self { receiver }
    }

    /// Latest published state, without marking it as seen.
    pub fn current(&self) -> S {
        self.receiver.borrow().clone()
    }

    /// Whether a transition was published since the last [`take_change`](Self::take_change)
    /// or [`changed`](Self::changed). A dropped store counts as "no change".
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Returns the new state if one was published, marking it as seen.
    pub fn take_change(&mut self) -> Option<S> {
        if self.has_changed() {
            Some(self.receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    /// Waits for the next transition.
    ///
    /// # Errors
    /// [`StoreError::Closed`] once the store has been dropped.
    pub async fn changed(&mut self) -> Result<S, StoreError> {
        self.receiver
            .changed()
            .await
            .map_err(|_| StoreError::Closed)?;
        Ok(self.receiver.borrow_and_update().clone())
    }
}
