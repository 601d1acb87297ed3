//! # Stock Table
//!
//! Stateless view over a slice of [`Stock`] records. It renders one row per record, in order,
//! or a single placeholder row, and turns a row control activation into a [`TableEvent`]
//! carrying the full record.

use crate::model::{Stock, StockId};
use std::fmt::Display;

pub const COLUMNS: [&str; 5] = ["ID", "Name", "Quantity", "Price", "Actions"];
pub const EMPTY_PLACEHOLDER: &str = "No stocks found.";

/// One rendered row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableRow<'a> {
    Record(&'a Stock),
    Placeholder,
}

/// The per-row buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowControl {
    Edit,
    Delete,
}

/// Emitted when a row control is activated.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    Edit(Stock),
    Delete(Stock),
}

#[derive(Debug, Clone, Copy)]
pub struct StockTable<'a> {
    stocks: &'a [Stock],
}

impl<'a> StockTable<'a> {
    pub fn new(stocks: &'a [Stock]) -> Self {
        Self { stocks }
    }

    pub fn rows(&self) -> Vec<TableRow<'a>> {
        if self.stocks.is_empty() {
            return vec![TableRow::Placeholder];
        }
        self.stocks.iter().map(TableRow::Record).collect()
    }

    /// Activates `control` on the row at `index`. The placeholder row has no controls.
    pub fn activate(&self, index: usize, control: RowControl) -> Option<TableEvent> {
        self.stocks.get(index).map(|stock| event(stock, control))
    }

    /// Activates `control` on the first row showing `id`.
    pub fn activate_id(&self, id: StockId, control: RowControl) -> Option<TableEvent> {
        self.stocks
            .iter()
            .find(|s| s.id == id)
            .map(|stock| event(stock, control))
    }
}

fn event(stock: &Stock, control: RowControl) -> TableEvent {
    match control {
        RowControl::Edit => TableEvent::Edit(stock.clone()),
        RowControl::Delete => TableEvent::Delete(stock.clone()),
    }
}

impl Display for StockTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name_width = self
            .stocks
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(0)
            .max(COLUMNS[1].len());

        writeln!(
            f,
            "{:>4} | {:<name_width$} | {:>8} | {:>10} | {}",
            COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3], COLUMNS[4]
        )?;
        write!(f, "{}", "-".repeat(4 + name_width + 8 + 10 + 7 + 3 * 4))?;
        for row in self.rows() {
            match row {
                TableRow::Record(stock) => write!(
                    f,
                    "\n{:>4} | {:<name_width$} | {:>8} | {:>10} | [edit] [delete]",
                    stock.id, stock.name, stock.quantity, stock.price
                )?,
                TableRow::Placeholder => write!(f, "\n{EMPTY_PLACEHOLDER}")?,
            }
        }
        Ok(())
    }
}
