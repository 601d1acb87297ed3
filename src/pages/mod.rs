pub mod stock_page;

pub use stock_page::*;
