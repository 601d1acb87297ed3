use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur on the POS screen.
///
/// The screen passes every one of these to
/// [`Interaction::notify`](store_framework::Interaction::notify) before returning it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PosError {
    #[error("This item is out of stock")]
    OutOfStock(ProductId),

    #[error("Cannot add more of this item - not enough stock")]
    NotEnoughStock(ProductId),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Please enter a valid payment amount")]
    InvalidPayment,

    #[error("No product with id {0}")]
    UnknownProduct(ProductId),

    #[error("Product {0} is not in the cart")]
    NotInCart(ProductId),

    #[error("Close the checkout before changing the cart")]
    CheckoutOpen,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
