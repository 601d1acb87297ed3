//! # POS Screen
//!
//! Ties the [`Catalog`] and [`Cart`] together with the checkout modal.
//!
//! The checkout modal freezes the cart: while it is open, cart edits are refused with
//! [`PosError::CheckoutOpen`].
//!
//! Every handler that can fail takes the host's [`Interaction`] service. Rejections are passed
//! to [`Interaction::notify`] and also returned, so callers that script the screen can branch
//! on them.

use super::{Cart, Catalog, PosError};
use crate::model::{CartItem, Money, Product, ProductId, StockLevel};
use crate::views::Dialog;
use std::fmt::Display;
use store_framework::Interaction;
use tracing::{debug, info, instrument, warn};

pub const SCREEN_TITLE: &str = "POS System";
pub const CHECKOUT_TITLE: &str = "Checkout";
pub const DEFAULT_TAX_PERCENT: u32 = 10;

/// Subtotal, tax and total of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl Totals {
    pub fn of(cart: &Cart, tax_percent: u32) -> Self {
        let subtotal = cart.subtotal();
        let tax = subtotal.percent(tax_percent);
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

impl Display for Totals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Subtotal: {:>10}", self.subtotal)?;
        writeln!(f, "Tax:      {:>10}", self.tax)?;
        write!(f, "Total:    {:>10}", self.total)
    }
}

/// What a completed sale looked like.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub items: Vec<CartItem>,
    pub totals: Totals,
    pub payment: Money,
    pub change: Money,
}

impl Receipt {
    pub fn message(&self) -> String {
        format!("Payment successful! Change: {}", self.change)
    }
}

pub struct PosScreen {
    catalog: Catalog,
    cart: Cart,
    tax_percent: u32,
    checkout_open: bool,
    payment_input: String,
}

impl PosScreen {
    pub fn new(products: Vec<Product>, tax_percent: u32) -> Self {
        Self {
            catalog: Catalog::new(products),
            cart: Cart::default(),
            tax_percent,
            checkout_open: false,
            payment_input: String::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn totals(&self) -> Totals {
        Totals::of(&self.cart, self.tax_percent)
    }

    pub fn is_checkout_open(&self) -> bool {
        self.checkout_open
    }

    pub fn payment_input(&self) -> &str {
        &self.payment_input
    }

    pub fn search(&mut self, term: impl Into<String>) {
        self.catalog.search(term);
    }

    pub fn set_category(
        &mut self,
        category: &str,
        interaction: &dyn Interaction,
    ) -> Result<(), PosError> {
        report(self.catalog.set_category(category), interaction)
    }

    #[instrument(skip(self, interaction))]
    pub fn add_to_cart(
        &mut self,
        id: ProductId,
        interaction: &dyn Interaction,
    ) -> Result<(), PosError> {
        let result = self
            .ensure_checkout_closed()
            .and_then(|()| self.catalog.get(id))
            .and_then(|product| self.cart.add(product));
        report(result, interaction)
    }

    #[instrument(skip(self, interaction))]
    pub fn increment(&mut self, id: ProductId, interaction: &dyn Interaction) -> Result<(), PosError> {
        let result = self
            .ensure_checkout_closed()
            .and_then(|()| self.catalog.get(id))
            .and_then(|product| self.cart.increment(product));
        report(result, interaction)
    }

    pub fn decrement(&mut self, id: ProductId, interaction: &dyn Interaction) -> Result<(), PosError> {
        let result = self
            .ensure_checkout_closed()
            .and_then(|()| self.cart.decrement(id));
        report(result, interaction)
    }

    pub fn remove(&mut self, id: ProductId, interaction: &dyn Interaction) -> Result<(), PosError> {
        let result = self
            .ensure_checkout_closed()
            .and_then(|()| self.cart.remove(id));
        report(result, interaction)
    }

    fn ensure_checkout_closed(&self) -> Result<(), PosError> {
        if self.checkout_open {
            return Err(PosError::CheckoutOpen);
        }
        Ok(())
    }

    /// Opens the checkout modal. An empty cart keeps it closed.
    pub fn open_checkout(&mut self, interaction: &dyn Interaction) -> Result<(), PosError> {
        if self.cart.is_empty() {
            return report(Err(PosError::EmptyCart), interaction);
        }
        debug!("Opening checkout");
        self.checkout_open = true;
        Ok(())
    }

    pub fn cancel_checkout(&mut self) {
        debug!("Closing checkout");
        self.checkout_open = false;
    }

    pub fn set_payment(&mut self, input: impl Into<String>) {
        self.payment_input = input.into();
    }

    /// "Complete Payment": checks the entered amount against the total, takes the sold units
    /// off the shelf, empties the cart, closes the modal and clears the payment input.
    #[instrument(skip(self, interaction))]
    pub fn complete_payment(&mut self, interaction: &dyn Interaction) -> Result<Receipt, PosError> {
        if self.cart.is_empty() {
            return report(Err(PosError::EmptyCart), interaction);
        }

        let totals = self.totals();
        let payment = match Money::parse(&self.payment_input) {
            Some(payment) if payment >= totals.total => payment,
            _ => return report(Err(PosError::InvalidPayment), interaction),
        };

        let items = self.cart.take_items();
        for item in &items {
            self.catalog.take(item.id(), item.quantity);
        }

        let receipt = Receipt {
            items,
            totals,
            payment,
            change: payment - totals.total,
        };
        info!(total = %totals.total, change = %receipt.change, "Sale completed");
        interaction.notify(&receipt.message());

        self.checkout_open = false;
        self.payment_input.clear();
        Ok(receipt)
    }
}

fn report<T>(result: Result<T, PosError>, interaction: &dyn Interaction) -> Result<T, PosError> {
    if let Err(e) = &result {
        warn!(error = %e, "POS action refused");
        interaction.notify(&e.to_string());
    }
    result
}

fn badge(product: &Product) -> String {
    match product.stock_level() {
        StockLevel::Plenty => format!("{} in stock", product.stock),
        StockLevel::Low => format!("Only {} left", product.stock),
        StockLevel::OutOfStock => "Out of stock".to_string(),
    }
}

struct CheckoutBody<'a> {
    totals: Totals,
    payment_input: &'a str,
}

impl Display for CheckoutBody<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Amount due: {}", self.totals.total)?;
        write!(f, "Payment:    {}", self.payment_input)
    }
}

impl Display for PosScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{SCREEN_TITLE}    {} Products    {} Items",
            self.catalog.products().len(),
            self.cart.len()
        )?;

        let categories: Vec<String> = self
            .catalog
            .categories()
            .into_iter()
            .map(|c| {
                if c == self.catalog.active_category() {
                    format!("[{c}]")
                } else {
                    format!(" {c} ")
                }
            })
            .collect();
        writeln!(f, "{}", categories.join(" "))?;
        writeln!(f, "Search: {}", self.catalog.search_term())?;
        writeln!(f)?;

        let visible = self.catalog.visible();
        if visible.is_empty() {
            writeln!(f, "No products found.")?;
        }
        for product in visible {
            writeln!(
                f,
                "{:>3}  {:<12} {:>8}  {:<12} {}",
                product.id,
                product.name,
                product.price,
                product.category,
                badge(product)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Cart")?;
        if self.cart.is_empty() {
            writeln!(f, "Cart is empty")?;
        }
        for item in self.cart.items() {
            writeln!(
                f,
                "{:>3}  {:<12} x{:<3} {:>10}",
                item.id(),
                item.product.name,
                item.quantity,
                item.line_total()
            )?;
        }
        write!(f, "{}", self.totals())?;

        if self.checkout_open {
            let body = CheckoutBody {
                totals: self.totals(),
                payment_input: &self.payment_input,
            };
            write!(f, "\n\n{}", Dialog::open(CHECKOUT_TITLE, body))?;
        }
        Ok(())
    }
}
