//! Actions understood by the [`StockReducer`](super::StockReducer).

use crate::model::{Stock, StockId};

/// Requests against the stock list.
///
/// `Unknown` keeps the reducer total when actions are built from untyped input (see
/// [`StockAction::from_tag`]); typed callers never construct it.
#[derive(Debug, Clone, PartialEq)]
pub enum StockAction {
    /// Appends a record. The caller picks the id.
    Add(Stock),
    /// Replaces the record with the same id, keeping its position.
    Update(Stock),
    /// Removes every record with this id.
    Delete(StockId),
    /// An action tag this version does not know about.
    Unknown(String),
}

/// Payload accompanying a textual action tag.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionPayload {
    Stock(Stock),
    Id(StockId),
}

impl StockAction {
    /// Builds an action from its wire tag (`ADD`, `UPDATE`, `DELETE`).
    ///
    /// A tag that is unknown, or paired with the wrong kind of payload, yields
    /// [`StockAction::Unknown`] carrying the tag.
    pub fn from_tag(tag: &str, payload: ActionPayload) -> Self {
        match (tag, payload) {
            ("ADD", ActionPayload::Stock(stock)) => StockAction::Add(stock),
            ("UPDATE", ActionPayload::Stock(stock)) => StockAction::Update(stock),
            ("DELETE", ActionPayload::Id(id)) => StockAction::Delete(id),
            (other, _) => StockAction::Unknown(other.to_string()),
        }
    }

    /// The wire tag of this action.
    pub fn tag(&self) -> &str {
        match self {
            StockAction::Add(_) => "ADD",
            StockAction::Update(_) => "UPDATE",
            StockAction::Delete(_) => "DELETE",
            StockAction::Unknown(tag) => tag,
        }
    }
}
