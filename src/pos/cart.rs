//! The cart: one entry per product, bounded by the product's live stock.

use super::PosError;
use crate::model::{CartItem, Money, Product, ProductId};

#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|i| i.id() == id)
            .map_or(0, |i| i.quantity)
    }

    /// "Add to cart": a new entry with quantity one, or one more of an existing entry.
    pub fn add(&mut self, product: &Product) -> Result<(), PosError> {
        if product.stock == 0 {
            return Err(PosError::OutOfStock(product.id));
        }
        match self.items.iter_mut().find(|i| i.id() == product.id) {
            Some(item) if item.quantity >= product.stock => {
                Err(PosError::NotEnoughStock(product.id))
            }
            Some(item) => {
                item.quantity += 1;
                Ok(())
            }
            None => {
                self.items.push(CartItem {
                    product: product.clone(),
                    quantity: 1,
                });
                Ok(())
            }
        }
    }

    /// One more of an entry already in the cart.
    pub fn increment(&mut self, product: &Product) -> Result<(), PosError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id() == product.id)
            .ok_or(PosError::NotInCart(product.id))?;
        if item.quantity + 1 > product.stock {
            return Err(PosError::NotEnoughStock(product.id));
        }
        item.quantity += 1;
        Ok(())
    }

    /// One fewer of an entry; the entry leaves the cart when it reaches zero.
    pub fn decrement(&mut self, id: ProductId) -> Result<(), PosError> {
        let index = self
            .items
            .iter()
            .position(|i| i.id() == id)
            .ok_or(PosError::NotInCart(id))?;
        if self.items[index].quantity > 1 {
            self.items[index].quantity -= 1;
        } else {
            self.items.remove(index);
        }
        Ok(())
    }

    pub fn remove(&mut self, id: ProductId) -> Result<(), PosError> {
        let before = self.items.len();
        self.items.retain(|i| i.id() != id);
        if self.items.len() == before {
            return Err(PosError::NotInCart(id));
        }
        Ok(())
    }

    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub(crate) fn take_items(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }
}
