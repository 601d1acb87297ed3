//! [`Reducer`] implementation for the stock list.
//!
//! [`StockReducer::reduce`] is the fallible core used by the [`Store`](store_framework::Store);
//! [`stock_reducer`] is the total form that logs and absorbs rejections itself.

use super::actions::StockAction;
use super::error::StockRejection;
use crate::model::Stock;
use store_framework::Reducer;
use tracing::warn;

/// Transitions for the stock page's list of records.
pub struct StockReducer;

impl Reducer for StockReducer {
    type State = Vec<Stock>;
    type Action = StockAction;
    type Rejection = StockRejection;

    /// # Actions
    /// - `Add`: validates, then appends.
    /// - `Update`: validates, then replaces records with the same id in place. No match is a
    ///   no-op.
    /// - `Delete`: drops records with the id. No validation, no match is a no-op.
    /// - `Unknown`: always rejected.
    fn reduce(state: &Vec<Stock>, action: StockAction) -> Result<Vec<Stock>, StockRejection> {
        match action {
            StockAction::Add(stock) => {
                validate(&stock, "ADD")?;
                let mut next = state.clone();
                next.push(stock);
                Ok(next)
            }
            StockAction::Update(stock) => {
                validate(&stock, "UPDATE")?;
                Ok(state
                    .iter()
                    .map(|existing| {
                        if existing.id == stock.id {
                            stock.clone()
                        } else {
                            existing.clone()
                        }
                    })
                    .collect())
            }
            StockAction::Delete(id) => Ok(state.iter().filter(|s| s.id != id).cloned().collect()),
            StockAction::Unknown(tag) => Err(StockRejection::UnknownAction(tag)),
        }
    }
}

/// Applies `action` to `state`. Rejected actions are logged and return `state` unchanged.
pub fn stock_reducer(state: &[Stock], action: StockAction) -> Vec<Stock> {
    let current = state.to_vec();
    match StockReducer::reduce(&current, action) {
        Ok(next) => next,
        Err(e) => {
            warn!(error = %e, "Stock action rejected");
            current
        }
    }
}

fn validate(stock: &Stock, action: &'static str) -> Result<(), StockRejection> {
    if stock.name.is_empty() {
        return Err(StockRejection::EmptyName { action });
    }
    if !stock.price.is_finite() {
        return Err(StockRejection::NonFinitePrice { action });
    }
    if stock.price < 0.0 {
        return Err(StockRejection::NegativePrice {
            action,
            price: stock.price,
        });
    }
    if stock.quantity < 0 {
        return Err(StockRejection::NegativeQuantity {
            action,
            quantity: stock.quantity,
        });
    }
    Ok(())
}
