//! # Stock Page
//!
//! Composes the stock [`Store`], the [`StockForm`], the [`StockTable`] and a [`Dialog`] into
//! the add / edit / delete workflows.
//!
//! ## Workflow States
//!
//! ```text
//!            add                  submit (valid) -> dispatch ADD
//!   Closed ───────> Adding ──────────────────────────────────┐
//!     ^  │                                                   │
//!     │  │ edit row      submit (valid) -> dispatch UPDATE   │
//!     │  └────────> Editing{target} ─────────────────────────┤
//!     │                                                      │
//!     └──────────────── cancel / after dispatch ─────────────┘
//! ```
//!
//! Delete does not open the dialog: it asks the [`Interaction`] service for confirmation and
//! dispatches DELETE when the answer is yes.
//!
//! The dialog is modal. While it is open, add, edit and delete are refused with
//! [`PageError::DialogOpen`]; only the form, save and cancel reach the page.
//!
//! The page never copies the list: the store owns it, and views either borrow it through
//! [`StockPage::stocks`] or follow it through [`StockPage::subscribe`].

use crate::forms::{Field, FormOutcome, StockForm, StockFormData};
use crate::model::{next_stock_id, Stock, StockId};
use crate::stock_reducer::{self, StockAction, StockReducer};
use crate::views::{Dialog, RowControl, StockTable, TableEvent};
use std::fmt::Display;
use store_framework::{Interaction, Store, Subscription};
use thiserror::Error;
use tracing::{debug, info, instrument};

pub const PAGE_TITLE: &str = "Stock Management";
pub const ADD_TITLE: &str = "Add Stock";
pub const EDIT_TITLE: &str = "Edit Stock";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this stock?";

/// Errors that can occur while driving the page.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("No stock with id {0}")]
    UnknownStock(StockId),

    #[error("No dialog is open")]
    DialogClosed,

    #[error("Save or cancel the open dialog first")]
    DialogOpen,
}

/// Which dialog, if any, is showing.
#[derive(Debug, Clone)]
pub enum DialogState {
    Closed,
    Adding { form: StockForm },
    Editing { target: Stock, form: StockForm },
}

/// Result of pressing Save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The form was valid and an action was dispatched; the dialog is closed.
    /// `applied` is false when the reducer refused the action or it changed nothing.
    Saved { id: StockId, applied: bool },
    /// The form has errors; the dialog stays open.
    Invalid,
}

pub struct StockPage {
    store: Store<StockReducer>,
    dialog: DialogState,
}

impl StockPage {
    pub fn new(initial: Vec<Stock>) -> Self {
        Self {
            store: stock_reducer::new_store(initial),
            dialog: DialogState::Closed,
        }
    }

    pub fn stocks(&self) -> &[Stock] {
        self.store.state()
    }

    pub fn subscribe(&self) -> Subscription<Vec<Stock>> {
        self.store.subscribe()
    }

    pub fn table(&self) -> StockTable<'_> {
        StockTable::new(self.stocks())
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    pub fn is_dialog_open(&self) -> bool {
        !matches!(self.dialog, DialogState::Closed)
    }

    pub fn dialog_title(&self) -> Option<&'static str> {
        match self.dialog {
            DialogState::Closed => None,
            DialogState::Adding { .. } => Some(ADD_TITLE),
            DialogState::Editing { .. } => Some(EDIT_TITLE),
        }
    }

    pub fn form(&self) -> Option<&StockForm> {
        match &self.dialog {
            DialogState::Closed => None,
            DialogState::Adding { form } | DialogState::Editing { form, .. } => Some(form),
        }
    }

    fn form_mut(&mut self) -> Result<&mut StockForm, PageError> {
        match &mut self.dialog {
            DialogState::Closed => Err(PageError::DialogClosed),
            DialogState::Adding { form } | DialogState::Editing { form, .. } => Ok(form),
        }
    }

    fn ensure_closed(&self) -> Result<(), PageError> {
        if self.is_dialog_open() {
            return Err(PageError::DialogOpen);
        }
        Ok(())
    }

    /// "Add Stock" button.
    pub fn open_add(&mut self) -> Result<(), PageError> {
        self.ensure_closed()?;
        debug!("Opening add dialog");
        self.dialog = DialogState::Adding {
            form: StockForm::new(),
        };
        Ok(())
    }

    /// Row edit control.
    pub fn open_edit(&mut self, stock: Stock) -> Result<(), PageError> {
        self.ensure_closed()?;
        debug!(id = %stock.id, "Opening edit dialog");
        let form = StockForm::prefilled(&StockFormData::from(&stock));
        self.dialog = DialogState::Editing {
            target: stock,
            form,
        };
        Ok(())
    }

    pub fn open_edit_by_id(&mut self, id: StockId) -> Result<(), PageError> {
        self.ensure_closed()?;
        let event = self.table().activate_id(id, RowControl::Edit);
        match event {
            Some(TableEvent::Edit(stock)) => self.open_edit(stock),
            _ => Err(PageError::UnknownStock(id)),
        }
    }

    /// Types into the open form.
    pub fn change_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), PageError> {
        self.form_mut()?.change(field, value);
        Ok(())
    }

    /// "Save" button: validates, dispatches ADD or UPDATE, closes the dialog.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Result<SaveOutcome, PageError> {
        let data = match self.form_mut()?.submit() {
            FormOutcome::Submitted(data) => data,
            FormOutcome::Invalid => {
                debug!("Form has errors, keeping dialog open");
                return Ok(SaveOutcome::Invalid);
            }
        };

        let id = match &self.dialog {
            DialogState::Editing { target, .. } => target.id,
            _ => next_stock_id(self.stocks()),
        };
        let stock = Stock {
            id,
            name: data.name,
            price: data.price,
            quantity: data.quantity,
        };
        let action = match self.dialog {
            DialogState::Editing { .. } => StockAction::Update(stock),
            _ => StockAction::Add(stock),
        };

        let before = self.store.version();
        self.store.dispatch(action);
        let applied = self.store.version() != before;
        info!(%id, applied, "Saved");

        self.dialog = DialogState::Closed;
        Ok(SaveOutcome::Saved { id, applied })
    }

    /// Form "Cancel" button or the dialog's close control. Nothing is dispatched.
    pub fn cancel(&mut self) {
        debug!("Closing dialog");
        self.dialog = DialogState::Closed;
    }

    /// Row delete control. Returns whether DELETE was dispatched.
    #[instrument(skip(self, interaction), fields(id = %stock.id))]
    pub fn request_delete(
        &mut self,
        stock: &Stock,
        interaction: &dyn Interaction,
    ) -> Result<bool, PageError> {
        self.ensure_closed()?;
        if !interaction.confirm(CONFIRM_DELETE) {
            debug!("Delete declined");
            return Ok(false);
        }
        self.store.dispatch(StockAction::Delete(stock.id));
        Ok(true)
    }

    pub fn request_delete_by_id(
        &mut self,
        id: StockId,
        interaction: &dyn Interaction,
    ) -> Result<bool, PageError> {
        self.ensure_closed()?;
        let event = self.table().activate_id(id, RowControl::Delete);
        match event {
            Some(TableEvent::Delete(stock)) => self.request_delete(&stock, interaction),
            _ => Err(PageError::UnknownStock(id)),
        }
    }

    /// Routes an event emitted by the table.
    pub fn handle_table_event(
        &mut self,
        event: TableEvent,
        interaction: &dyn Interaction,
    ) -> Result<(), PageError> {
        match event {
            TableEvent::Edit(stock) => self.open_edit(stock),
            TableEvent::Delete(stock) => self.request_delete(&stock, interaction).map(|_| ()),
        }
    }
}

impl Display for StockPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{PAGE_TITLE}{:>30}", "[+ Add Stock]")?;
        writeln!(f)?;
        write!(f, "{}", self.table())?;
        if let (Some(title), Some(form)) = (self.dialog_title(), self.form()) {
            write!(f, "\n\n{}", Dialog::open(title, form))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::initial_stocks;
    use store_framework::mock::MockInteraction;

    fn fill(page: &mut StockPage, name: &str, price: &str, quantity: &str) {
        page.change_field(Field::Name, name).unwrap();
        page.change_field(Field::Price, price).unwrap();
        page.change_field(Field::Quantity, quantity).unwrap();
    }

    #[test]
    fn add_assigns_next_id_and_closes_dialog() {
        let mut page = StockPage::new(initial_stocks());
        page.open_add().unwrap();
        assert_eq!(page.dialog_title(), Some(ADD_TITLE));

        fill(&mut page, "Kiwi", "3", "30");
        assert_eq!(
            page.submit(),
            Ok(SaveOutcome::Saved {
                id: StockId(6),
                applied: true
            })
        );
        assert!(!page.is_dialog_open());
        assert_eq!(page.stocks().last(), Some(&Stock::new(6, "Kiwi", 3.0, 30)));
    }

    #[test]
    fn add_to_empty_page_starts_at_one() {
        let mut page = StockPage::new(Vec::new());
        page.open_add().unwrap();
        fill(&mut page, "Kiwi", "3", "30");
        page.submit().unwrap();
        assert_eq!(page.stocks()[0].id, StockId(1));
    }

    #[test]
    fn invalid_form_keeps_dialog_open_and_dispatches_nothing() {
        let mut page = StockPage::new(initial_stocks());
        let mut view = page.subscribe();
        page.open_add().unwrap();

        assert_eq!(page.submit(), Ok(SaveOutcome::Invalid));
        assert!(page.is_dialog_open());
        assert_eq!(
            page.form().and_then(|f| f.visible_error(Field::Name)),
            Some("Name is required.")
        );
        assert!(!view.has_changed());
        assert_eq!(view.take_change(), None);
    }

    #[test]
    fn edit_replaces_record_in_place() {
        let mut page = StockPage::new(initial_stocks());
        page.open_edit_by_id(StockId(1)).unwrap();
        assert_eq!(page.dialog_title(), Some(EDIT_TITLE));
        assert_eq!(page.form().map(|f| f.input().name.as_str()), Some("Apple"));

        page.change_field(Field::Price, "12").unwrap();
        page.change_field(Field::Quantity, "90").unwrap();
        assert_eq!(
            page.submit(),
            Ok(SaveOutcome::Saved {
                id: StockId(1),
                applied: true
            })
        );
        assert_eq!(page.stocks()[0], Stock::new(1, "Apple", 12.0, 90));
        assert_eq!(page.stocks().len(), 5);
    }

    #[test]
    fn negative_values_pass_form_but_reducer_refuses() {
        let mut page = StockPage::new(initial_stocks());
        page.open_add().unwrap();
        fill(&mut page, "Debt", "-5", "1");
        assert_eq!(
            page.submit(),
            Ok(SaveOutcome::Saved {
                id: StockId(6),
                applied: false
            })
        );
        assert!(!page.is_dialog_open());
        assert_eq!(page.stocks().len(), 5);
    }

    #[test]
    fn cancel_closes_without_dispatch() {
        let mut page = StockPage::new(initial_stocks());
        let view = page.subscribe();
        page.open_edit_by_id(StockId(2)).unwrap();
        page.change_field(Field::Name, "Plantain").unwrap();
        page.cancel();

        assert!(!page.is_dialog_open());
        assert_eq!(page.stocks()[1].name, "Banana");
        assert!(!view.has_changed());
        assert_eq!(page.change_field(Field::Name, "x"), Err(PageError::DialogClosed));
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut page = StockPage::new(initial_stocks());
        let interaction = MockInteraction::new();
        interaction.expect_confirm(CONFIRM_DELETE).answer(false);
        interaction.expect_confirm(CONFIRM_DELETE).answer(true);

        assert_eq!(page.request_delete_by_id(StockId(3), &interaction), Ok(false));
        assert_eq!(page.stocks().len(), 5);

        assert_eq!(page.request_delete_by_id(StockId(3), &interaction), Ok(true));
        assert!(page.stocks().iter().all(|s| s.id != StockId(3)));
        interaction.verify();
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut page = StockPage::new(initial_stocks());
        let interaction = MockInteraction::new();
        assert_eq!(page.open_edit_by_id(StockId(99)), Err(PageError::UnknownStock(StockId(99))));
        assert_eq!(
            page.request_delete_by_id(StockId(99), &interaction),
            Err(PageError::UnknownStock(StockId(99)))
        );
        interaction.verify();
    }

    #[test]
    fn render_includes_dialog_only_when_open() {
        let mut page = StockPage::new(initial_stocks());
        assert!(!page.to_string().contains(ADD_TITLE));
        page.open_add().unwrap();
        assert!(page.to_string().contains(ADD_TITLE));
    }

    #[test]
    fn open_dialog_blocks_the_page() {
        let mut page = StockPage::new(initial_stocks());
        let interaction = MockInteraction::new();
        page.open_edit_by_id(StockId(1)).unwrap();
        page.change_field(Field::Price, "99").unwrap();

        assert_eq!(
            page.request_delete_by_id(StockId(1), &interaction),
            Err(PageError::DialogOpen)
        );
        assert_eq!(page.open_add(), Err(PageError::DialogOpen));
        assert_eq!(page.open_edit_by_id(StockId(2)), Err(PageError::DialogOpen));
        assert_eq!(page.dialog_title(), Some(EDIT_TITLE));

        assert_eq!(
            page.submit(),
            Ok(SaveOutcome::Saved {
                id: StockId(1),
                applied: true
            })
        );
        assert_eq!(page.stocks().len(), 5);
        assert_eq!(page.stocks()[0].price, 99.0);
        interaction.verify();
    }

    #[test]
    fn saving_an_untouched_edit_changes_nothing() {
        let mut page = StockPage::new(initial_stocks());
        let view = page.subscribe();
        page.open_edit_by_id(StockId(2)).unwrap();

        assert_eq!(
            page.submit(),
            Ok(SaveOutcome::Saved {
                id: StockId(2),
                applied: false
            })
        );
        assert!(!page.is_dialog_open());
        assert!(!view.has_changed());
    }
}
