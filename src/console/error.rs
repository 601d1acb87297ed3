use crate::forms::UnknownField;
use crate::pages::PageError;
use crate::pos::PosError;
use thiserror::Error;

/// Errors that can occur while parsing or running a console command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Not an id: {0}")]
    InvalidId(String),

    #[error("`{command}` only works on the {screen} screen")]
    WrongScreen {
        command: &'static str,
        screen: &'static str,
    },

    #[error(transparent)]
    Field(#[from] UnknownField),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Pos(#[from] PosError),
}

impl CommandError {
    /// Whether the user has already been told about this error through the interaction service.
    pub fn already_reported(&self) -> bool {
        matches!(self, CommandError::Pos(_))
    }
}
