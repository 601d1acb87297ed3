/// Represents one line of inventory on the stock page.
///
/// # Store Framework
/// A `Vec<Stock>` is the state of the [`StockReducer`](crate::stock_reducer::StockReducer),
/// owned by a [`Store`](store_framework::Store).
///
/// Ids are assigned by the caller (see [`next_stock_id`]); the reducer never checks them.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StockId(pub u32);

impl From<u32> for StockId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for StockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub id: StockId,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl Stock {
    /// Creates a new Stock instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, chosen by the caller
    /// * `name` - Display name
    /// * `price` - Unit price
    /// * `quantity` - Units on hand
    pub fn new(id: impl Into<StockId>, name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// The id a newly added record should get: one past the largest id in use, or `1`.
pub fn next_stock_id(stocks: &[Stock]) -> StockId {
    stocks
        .iter()
        .map(|s| s.id.0)
        .max()
        .map_or(StockId(1), |max| StockId(max + 1))
}

/// Records the stock page starts with.
pub fn initial_stocks() -> Vec<Stock> {
    vec![
        Stock::new(1, "Apple", 10.0, 100),
        Stock::new(2, "Banana", 5.0, 50),
        Stock::new(3, "Orange", 8.0, 80),
        Stock::new(4, "Mango", 12.0, 120),
        Stock::new(5, "Pineapple", 15.0, 150),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_one_for_empty_collection() {
        assert_eq!(next_stock_id(&[]), StockId(1));
    }

    #[test]
    fn next_id_follows_largest_not_last() {
        let stocks = vec![Stock::new(7, "A", 1.0, 1), Stock::new(3, "B", 1.0, 1)];
        assert_eq!(next_stock_id(&stocks), StockId(8));
    }

    #[test]
    fn seed_data_has_unique_ids() {
        let stocks = initial_stocks();
        let mut ids: Vec<_> = stocks.iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), stocks.len());
        assert_eq!(next_stock_id(&stocks), StockId(6));
    }
}
