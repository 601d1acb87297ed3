//! Pure data structures for both screens: [`Stock`] records for the stock page and
//! [`Product`]/[`CartItem`] for the POS demo.

pub mod money;
pub mod product;
pub mod stock;

pub use money::*;
pub use product::*;
pub use stock::*;
