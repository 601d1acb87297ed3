//! # Mock Interaction & Testing Guide
//!
//! `MockInteraction` implements [`Interaction`] entirely in memory. You queue the prompts a
//! workflow is expected to raise, in order, together with the answers to give; the mock
//! panics on anything unexpected and [`MockInteraction::verify`] fails if a queued prompt was
//! never raised.
//!
//! ## When to use the mock vs a fixed answer
//!
//! | | MockInteraction | AutoAnswer |
//! |--|-----------------|------------|
//! | **Checks the message text** | Yes | No |
//! | **Checks call order** | Yes | No |
//! | **Use case** | Unit/integration tests of a workflow | Scripted demo runs |
//!
//! ## Example
//!
//! ```rust
//! use store_framework::mock::MockInteraction;
//! use store_framework::Interaction;
//!
//! let mock = MockInteraction::new();
//! mock.expect_confirm("Delete?").answer(true);
//! mock.expect_notify("Deleted");
//!
//! if mock.confirm("Delete?") {
//!     mock.notify("Deleted");
//! }
//!
//! mock.verify();
//! assert_eq!(mock.notifications(), vec!["Deleted".to_string()]);
//! ```

use crate::interaction::Interaction;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A queued prompt and, for confirms, the answer to give.
#[derive(Debug)]
enum Expectation {
    Confirm { message: String, answer: bool },
    Notify { message: String },
}

/// An [`Interaction`] double with ordered expectations.
#[derive(Clone, Default)]
pub struct MockInteraction {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    notifications: Arc<Mutex<Vec<String>>>,
}

impl MockInteraction {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `confirm` with exactly `message`. Finish with
    /// [`ConfirmExpectationBuilder::answer`].
    pub fn expect_confirm(&self, message: impl Into<String>) -> ConfirmExpectationBuilder {
        ConfirmExpectationBuilder {
            message: message.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `notify` with exactly `message`.
    pub fn expect_notify(&self, message: impl Into<String>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Notify {
            message: message.into(),
        });
    }

    /// Every message passed to `notify`, in order.
    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                exps.len(),
                exps
            );
        }
    }
}

impl Interaction for MockInteraction {
    fn confirm(&self, message: &str) -> bool {
        let next = self.expectations.lock().unwrap().pop_front();
        match next {
            Some(Expectation::Confirm {
                message: expected,
                answer,
            }) => {
                assert_eq!(message, expected, "confirm called with unexpected message");
                answer
            }
            other => panic!("Unexpected confirm({message:?}), next expectation: {other:?}"),
        }
    }

    fn notify(&self, message: &str) {
        self.notifications.lock().unwrap().push(message.to_string());
        let next = self.expectations.lock().unwrap().pop_front();
        match next {
            Some(Expectation::Notify { message: expected }) => {
                assert_eq!(message, expected, "notify called with unexpected message");
            }
            other => panic!("Unexpected notify({message:?}), next expectation: {other:?}"),
        }
    }
}

/// Builder for `confirm` expectations.
pub struct ConfirmExpectationBuilder {
    message: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ConfirmExpectationBuilder {
    /// Queues the expectation, answering `answer` when it is met.
    pub fn answer(self, answer: bool) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Confirm {
            message: self.message,
            answer,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_in_queue_order() {
        let mock = MockInteraction::new();
        mock.expect_confirm("first").answer(false);
        mock.expect_confirm("second").answer(true);

        assert!(!mock.confirm("first"));
        assert!(mock.confirm("second"));
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn verify_fails_on_leftover_expectation() {
        let mock = MockInteraction::new();
        mock.expect_notify("never shown");
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Unexpected confirm")]
    fn unexpected_prompt_panics() {
        let mock = MockInteraction::new();
        mock.expect_notify("hello");
        mock.confirm("really?");
    }
}
