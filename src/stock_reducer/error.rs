//! Error types for the stock reducer.

use thiserror::Error;

/// Why the stock reducer refused an action.
///
/// These are diagnostics: the store logs them and keeps the previous list. The user sees
/// no signal beyond the table not changing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StockRejection {
    #[error("Invalid stock data for {action} action: name is empty")]
    EmptyName { action: &'static str },

    #[error("Invalid stock data for {action} action: negative price {price}")]
    NegativePrice { action: &'static str, price: f64 },

    #[error("Invalid stock data for {action} action: price is not a finite number")]
    NonFinitePrice { action: &'static str },

    #[error("Invalid stock data for {action} action: negative quantity {quantity}")]
    NegativeQuantity { action: &'static str, quantity: i64 },

    #[error("Unknown action type: {0}")]
    UnknownAction(String),
}
