//! Line-oriented [`Interaction`] over any reader and writer.
//!
//! The session loop and `confirm` prompts read from the same input, so both go through one
//! [`Terminal`].

use std::io::{self, BufRead, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};
use store_framework::Interaction;
use tracing::warn;

pub struct Terminal<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    /// Next line without its line ending, or `None` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if lock(&self.input).read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn write(&self, text: &str) -> io::Result<()> {
        let mut output = lock(&self.output);
        output.write_all(text.as_bytes())?;
        output.flush()
    }

    pub fn writeln(&self, text: &str) -> io::Result<()> {
        self.write(&format!("{text}\n"))
    }

    pub fn into_output(self) -> W {
        self.output
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<R, W> Interaction for Terminal<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn confirm(&self, message: &str) -> bool {
        let answer = self
            .write(&format!("{message} [y/N] "))
            .and_then(|()| self.read_line());
        match answer {
            Ok(Some(line)) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Could not read answer");
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        if let Err(e) = self.writeln(&format!("! {message}")) {
            warn!(error = %e, message, "Could not show message");
        }
    }
}
