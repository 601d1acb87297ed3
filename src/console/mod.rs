//! # Console
//!
//! The text host for the application. Each input line is parsed into a [`Command`], executed
//! against the [`App`], and the active screen is rendered again. When the stock store
//! published a new list, a status line from the subscription snapshot comes first.
//!
//! Errors never end the session: parse and routing errors are printed, and POS rejections have
//! already been shown through the interaction service.

pub mod command;
pub mod error;
pub mod terminal;

pub use command::*;
pub use error::*;
pub use terminal::*;

use crate::lifecycle::App;
use crate::model::Stock;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

pub const PROMPT: &str = "> ";

/// Status line printed when the stock store published a new list.
pub fn stock_status(stocks: &[Stock]) -> String {
    format!("(stock list updated: {} records)", stocks.len())
}

/// Runs commands from the terminal until `quit` or end of input.
pub fn run<R, W>(app: &mut App, terminal: &Terminal<R, W>) -> io::Result<()>
where
    R: BufRead + Send,
    W: Write + Send,
{
    terminal.writeln(&app.to_string())?;
    loop {
        terminal.write(PROMPT)?;
        let Some(line) = terminal.read_line()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let flow = Command::parse(&line).and_then(|command| command.execute(app, terminal));
        match flow {
            Ok(Flow::Render) => {
                if let Some(stocks) = app.take_stock_change() {
                    terminal.writeln(&stock_status(&stocks))?;
                }
                terminal.writeln(&app.to_string())?;
            }
            Ok(Flow::Print(text)) => terminal.writeln(text)?,
            Ok(Flow::Quit) => break,
            Err(e) if e.already_reported() => {}
            Err(e) => {
                warn!(error = %e, line = %line, "Command failed");
                terminal.writeln(&format!("error: {e}"))?;
            }
        }
    }
    info!("Session ended");
    Ok(())
}
