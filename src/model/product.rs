/// Represents an item in the POS demo catalog.
///
/// Products belong to the [`pos`](crate::pos) screen only. They share field names with
/// [`Stock`](crate::model::Stock) but not its lifecycle or validation, so the two types stay
/// apart.
use crate::model::Money;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub category: String,
    pub stock: u32,
}

/// How much of a product is left, as shown on its catalog badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// More than ten left.
    Plenty,
    /// One to ten left.
    Low,
    OutOfStock,
}

impl Product {
    /// Creates a new Product with the placeholder image.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: PLACEHOLDER_IMAGE.to_string(),
            category: category.into(),
            stock,
        }
    }

    pub fn stock_level(&self) -> StockLevel {
        match self.stock {
            s if s > 10 => StockLevel::Plenty,
            s if s > 0 => StockLevel::Low,
            _ => StockLevel::OutOfStock,
        }
    }
}

/// A product snapshot in the cart, with the requested quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// `price * quantity`.
    pub fn line_total(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/80/80";

/// The demo catalog.
pub fn initial_products() -> Vec<Product> {
    vec![
        Product::new(1, "T-Shirt", Money::from_cents(1999), "Clothing", 25),
        Product::new(2, "Jeans", Money::from_cents(3999), "Clothing", 15),
        Product::new(3, "Sneakers", Money::from_cents(5999), "Footwear", 10),
        Product::new(4, "Backpack", Money::from_cents(2999), "Accessories", 8),
        Product::new(5, "Hat", Money::from_cents(1499), "Accessories", 20),
        Product::new(6, "Socks", Money::from_cents(999), "Clothing", 30),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_level_thresholds() {
        let mut p = Product::new(1, "Hat", Money::from_cents(100), "Accessories", 11);
        assert_eq!(p.stock_level(), StockLevel::Plenty);
        p.stock = 10;
        assert_eq!(p.stock_level(), StockLevel::Low);
        p.stock = 0;
        assert_eq!(p.stock_level(), StockLevel::OutOfStock);
    }
}
