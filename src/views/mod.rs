//! Render-to-text views. Each view is a pure function of the data it is given plus an event
//! API; none of them owns application state.

pub mod dialog;
pub mod navbar;
pub mod stock_table;

pub use dialog::*;
pub use navbar::*;
pub use stock_table::*;
