//! # Interaction Service
//!
//! Blocking prompts belong to the host (a browser's `confirm`/`alert`, a terminal's stdin),
//! not to the pages that use them. Pages receive an `&dyn Interaction` at call time, the same
//! way a store's dependencies are handed in when it is driven rather than when it is built.
//!
//! Tests substitute [`MockInteraction`](crate::mock::MockInteraction).

/// Host capability for blocking yes/no questions and one-way messages.
pub trait Interaction: Send + Sync {
    /// Asks a yes/no question and blocks until it is answered.
    fn confirm(&self, message: &str) -> bool;

    /// Shows a message and blocks until it is dismissed.
    fn notify(&self, message: &str);
}

/// Answers every question with a fixed value and drops messages.
///
/// Useful for scripted runs where nobody is there to answer.
#[derive(Debug, Clone, Copy)]
pub struct AutoAnswer(pub bool);

impl Interaction for AutoAnswer {
    fn confirm(&self, message: &str) -> bool {
        tracing::debug!(message, answer = self.0, "Auto-answered confirm");
        self.0
    }

    fn notify(&self, message: &str) {
        tracing::debug!(message, "Dropped notification");
    }
}
