//! # Point of Sale
//!
//! A self-contained demo screen: browse a catalog, fill a cart bounded by stock, take a
//! payment that covers subtotal plus tax.
//!
//! This module does not share state with the stock page. Products carry [`Money`] in cents so
//! that totals and change are exact.
//!
//! [`Money`]: crate::model::Money

pub mod cart;
pub mod catalog;
pub mod error;
pub mod screen;

pub use cart::*;
pub use catalog::*;
pub use error::*;
pub use screen::*;
