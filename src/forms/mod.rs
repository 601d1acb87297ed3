//! Input forms.

pub mod stock_form;

pub use stock_form::*;
