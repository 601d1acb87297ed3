//! Product catalog with category filter and name search.

use super::PosError;
use crate::model::{Product, ProductId};
use tracing::debug;

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    active_category: String,
    search_term: String,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            active_category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Result<&Product, PosError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(PosError::UnknownProduct(id))
    }

    /// `All` followed by each category in the order it first appears.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_category(&mut self, category: &str) -> Result<(), PosError> {
        let known = self
            .categories()
            .into_iter()
            .find(|c| c.eq_ignore_ascii_case(category))
            .map(str::to_string)
            .ok_or_else(|| PosError::UnknownCategory(category.to_string()))?;
        debug!(category = %known, "Category selected");
        self.active_category = known;
        Ok(())
    }

    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Products matching both the active category and the search term.
    pub fn visible(&self) -> Vec<&Product> {
        let needle = self.search_term.to_lowercase();
        self.products
            .iter()
            .filter(|p| self.active_category == ALL_CATEGORIES || p.category == self.active_category)
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Takes sold units off the shelf.
    pub(crate) fn take(&mut self, id: ProductId, quantity: u32) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == id) {
            product.stock = product.stock.saturating_sub(quantity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::initial_products;

    #[test]
    fn categories_keep_first_seen_order() {
        let catalog = Catalog::new(initial_products());
        assert_eq!(
            catalog.categories(),
            vec!["All", "Clothing", "Footwear", "Accessories"]
        );
    }

    #[test]
    fn category_and_search_combine() {
        let mut catalog = Catalog::new(initial_products());
        catalog.set_category("clothing").unwrap();
        assert_eq!(catalog.active_category(), "Clothing");
        assert_eq!(catalog.visible().len(), 3);

        catalog.search("JE");
        let names: Vec<_> = catalog.visible().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Jeans"]);
    }

    #[test]
    fn empty_search_matches_everything() {
        let mut catalog = Catalog::new(initial_products());
        catalog.search("");
        assert_eq!(catalog.visible().len(), 6);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut catalog = Catalog::new(initial_products());
        assert_eq!(
            catalog.set_category("Food"),
            Err(PosError::UnknownCategory("Food".to_string()))
        );
        assert_eq!(catalog.active_category(), ALL_CATEGORIES);
    }

    #[test]
    fn take_never_goes_below_zero() {
        let mut catalog = Catalog::new(initial_products());
        catalog.take(ProductId(4), 100);
        assert_eq!(catalog.get(ProductId(4)).unwrap().stock, 0);
    }
}
