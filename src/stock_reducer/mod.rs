//! # Stock Reducer
//!
//! The state-transition core of the stock page: a pure function from the current list of
//! [`Stock`](crate::model::Stock) records and a [`StockAction`] to the next list.
//!
//! ## Structure
//!
//! - [`actions`] - [`StockAction`] (ADD / UPDATE / DELETE plus a catch-all) and tag parsing
//! - [`error`] - [`StockRejection`], the diagnostic for refused actions
//! - [`reducer`] - [`Reducer`](store_framework::Reducer) implementation and the total
//!   [`stock_reducer`] function
//! - [`new_store()`] - Factory for a store holding a given list
//!
//! ## Usage
//!
//! ```rust
//! use stockroom::model::{Stock, StockId};
//! use stockroom::stock_reducer::{self, StockAction};
//!
//! let mut store = stock_reducer::new_store(vec![Stock::new(1, "Apple", 10.0, 100)]);
//! store.dispatch(StockAction::Add(Stock::new(2, "Banana", 5.0, 50)));
//! store.dispatch(StockAction::Delete(StockId(1)));
//!
//! assert_eq!(store.state().len(), 1);
//! assert_eq!(store.state()[0].name, "Banana");
//! ```
//!
//! ## Validation
//!
//! ADD and UPDATE refuse an empty name, a negative or non-finite price and a negative
//! quantity. Ids are not checked: assigning a fresh one is the caller's job.

pub mod actions;
pub mod error;
pub mod reducer;

pub use actions::*;
pub use error::*;
pub use reducer::*;

use crate::model::Stock;
use store_framework::Store;

/// Creates a stock store holding `initial`.
pub fn new_store(initial: Vec<Stock>) -> Store<StockReducer> {
    Store::new(initial)
}
