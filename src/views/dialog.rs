//! Modal scaffold: a title, a cancel control and arbitrary content.

use std::fmt::Display;

/// A modal dialog. Renders nothing while closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog<C> {
    pub is_open: bool,
    pub title: String,
    pub content: C,
}

impl<C> Dialog<C> {
    pub fn open(title: impl Into<String>, content: C) -> Self {
        Self {
            is_open: true,
            title: title.into(),
            content,
        }
    }

    pub fn closed(content: C) -> Self {
        Self {
            is_open: false,
            title: String::new(),
            content,
        }
    }
}

impl<C: Display> Display for Dialog<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_open {
            return Ok(());
        }
        let rule = "=".repeat(self.title.chars().count().max(24) + 8);
        writeln!(f, "{rule}")?;
        writeln!(f, "  {}  (x to cancel)", self.title)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "{}", self.content)?;
        write!(f, "{rule}")
    }
}
