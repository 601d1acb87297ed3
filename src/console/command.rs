//! One line of console input and what it does to the [`App`].

use super::CommandError;
use crate::forms::Field;
use crate::lifecycle::{ActiveScreen, App};
use crate::model::{ProductId, StockId};
use store_framework::Interaction;
use tracing::debug;

pub const HELP: &str = "\
Screens:  stock | pos | nav <path> | help | quit
Stock:    list | add | edit <id> | delete <id> | set <name|price|quantity> <value> | save | cancel
POS:      search [term] | category <name> | buy <id> | inc <id> | dec <id> | remove <id>
          checkout | pay <amount> | close";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ShowStock,
    ShowPos,
    Navigate(String),
    Help,
    Quit,

    List,
    Add,
    Edit(StockId),
    Delete(StockId),
    Set(Field, String),
    Save,
    Cancel,

    Search(String),
    Category(String),
    Buy(ProductId),
    Increment(ProductId),
    Decrement(ProductId),
    Remove(ProductId),
    Checkout,
    Pay(String),
    Close,
}

/// What the session loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Render,
    Print(&'static str),
    Quit,
}

impl Command {
    /// Parses one line. Blank lines are not commands and should be skipped by the caller.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "stock" => Command::ShowStock,
            "pos" => Command::ShowPos,
            "nav" => Command::Navigate(required(rest, "nav", "a path")?.to_string()),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,

            "list" => Command::List,
            "add" => Command::Add,
            "edit" => Command::Edit(id(rest, "edit")?.into()),
            "delete" => Command::Delete(id(rest, "delete")?.into()),
            "set" => {
                let rest = required(rest, "set", "a field and a value")?;
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                Command::Set(field.parse()?, value.to_string())
            }
            "save" => Command::Save,
            "cancel" => Command::Cancel,

            "search" => Command::Search(rest.to_string()),
            "category" => Command::Category(required(rest, "category", "a category")?.to_string()),
            "buy" => Command::Buy(id(rest, "buy")?.into()),
            "inc" => Command::Increment(id(rest, "inc")?.into()),
            "dec" => Command::Decrement(id(rest, "dec")?.into()),
            "remove" => Command::Remove(id(rest, "remove")?.into()),
            "checkout" => Command::Checkout,
            "pay" => Command::Pay(required(rest, "pay", "an amount")?.to_string()),
            "close" => Command::Close,

            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(command)
    }

    /// Runs the command against the app.
    pub fn execute(self, app: &mut App, interaction: &dyn Interaction) -> Result<Flow, CommandError> {
        debug!(command = ?self, "Executing");
        match self {
            Command::ShowStock => app.show(ActiveScreen::Stock),
            Command::ShowPos => app.show(ActiveScreen::Pos),
            Command::Navigate(path) => app.nav.navigate(path),
            Command::Help => return Ok(Flow::Print(HELP)),
            Command::Quit => return Ok(Flow::Quit),

            Command::List => on_stock(app, "list")?,
            Command::Add => {
                on_stock(app, "add")?;
                app.stock_page.open_add()?;
            }
            Command::Edit(id) => {
                on_stock(app, "edit")?;
                app.stock_page.open_edit_by_id(id)?;
            }
            Command::Delete(id) => {
                on_stock(app, "delete")?;
                app.stock_page.request_delete_by_id(id, interaction)?;
            }
            Command::Set(field, value) => {
                on_stock(app, "set")?;
                app.stock_page.change_field(field, value)?;
            }
            Command::Save => {
                on_stock(app, "save")?;
                app.stock_page.submit()?;
            }
            Command::Cancel => {
                on_stock(app, "cancel")?;
                app.stock_page.cancel();
            }

            Command::Search(term) => {
                on_pos(app, "search")?;
                app.pos.search(term);
            }
            Command::Category(name) => {
                on_pos(app, "category")?;
                app.pos.set_category(&name, interaction)?;
            }
            Command::Buy(id) => {
                on_pos(app, "buy")?;
                app.pos.add_to_cart(id, interaction)?;
            }
            Command::Increment(id) => {
                on_pos(app, "inc")?;
                app.pos.increment(id, interaction)?;
            }
            Command::Decrement(id) => {
                on_pos(app, "dec")?;
                app.pos.decrement(id, interaction)?;
            }
            Command::Remove(id) => {
                on_pos(app, "remove")?;
                app.pos.remove(id, interaction)?;
            }
            Command::Checkout => {
                on_pos(app, "checkout")?;
                app.pos.open_checkout(interaction)?;
            }
            Command::Pay(amount) => {
                on_pos(app, "pay")?;
                app.pos.set_payment(amount);
                app.pos.complete_payment(interaction)?;
            }
            Command::Close => {
                on_pos(app, "close")?;
                app.pos.cancel_checkout();
            }
        }
        Ok(Flow::Render)
    }
}

fn required<'a>(rest: &'a str, command: &'static str, expected: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument { command, expected });
    }
    Ok(rest)
}

fn id(rest: &str, command: &'static str) -> Result<u32, CommandError> {
    let raw = required(rest, command, "an id")?;
    raw.parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

fn on_stock(app: &App, command: &'static str) -> Result<(), CommandError> {
    match app.active() {
        ActiveScreen::Stock => Ok(()),
        ActiveScreen::Pos => Err(CommandError::WrongScreen {
            command,
            screen: "stock",
        }),
    }
}

fn on_pos(app: &App, command: &'static str) -> Result<(), CommandError> {
    match app.active() {
        ActiveScreen::Pos => Ok(()),
        ActiveScreen::Stock => Err(CommandError::WrongScreen {
            command,
            screen: "pos",
        }),
    }
}
