//! # Framework Errors
//!
//! Errors raised by the store plumbing itself. Domain rejections are the reducer's own
//! `Rejection` type and never show up here.

/// Errors that can occur within the store framework.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store closed")]
    Closed,
}
