//! # Command Layer
//!
//! This module contains the **core business logic** of the address book. Each
//! command lives in its own submodule as a plain `run` function over domain
//! types; [`Command`] is the sum type the rest of the crate passes around.
//!
//! ## The Execution Contract
//!
//! ```text
//! Command::execute(&mut UniquePersonList, &DisplayView) -> CmdResult
//! ```
//!
//! - The collection and the current view are supplied at execution time, not
//!   at construction. Building a `Command` never fails, so an out-of-range
//!   index is only detected when the command runs.
//! - Domain failures (bad field, bad index, stale view entry, duplicate) are
//!   **not** errors at this boundary. `execute` turns each into a `CmdResult`
//!   carrying the user-facing message. Nothing here panics or exits.
//! - A failed command leaves the collection exactly as it found it.
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries the feedback [`CmdMessage`] and, for listing commands
//! only, the new [`DisplayView`]. The session swaps its view for that one; the
//! UI renders both. There is no other side channel.
//!
//! ## Index-Targeting Commands
//!
//! `delete`, `change`, `view` and `viewall` all go through
//! [`helpers::resolve_target`], which checks the index against the view and
//! then checks the resolved person still exists in the collection.
//!
//! ## Command Modules
//!
//! - [`add`]: Add a new person
//! - [`delete`]: Remove a listed person
//! - [`change`]: Replace a listed person's phone number
//! - [`view`]: Show one listed person (`view` hides private fields, `viewall` does not)
//! - [`find`]: List persons whose name matches keywords
//! - [`list`]: List everyone
//! - [`clear`]: Remove everyone
//! - [`help`]: Usage for every command
//! - [`helpers`]: Shared index resolution

use crate::book::UniquePersonList;
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayView};
use crate::messages;
use crate::model::PersonRecord;
use tracing::{debug, warn};

pub mod add;
pub mod change;
pub mod clear;
pub mod delete;
pub mod find;
pub mod help;
pub mod helpers;
pub mod list;
pub mod view;

pub const EXIT_COMMAND_WORD: &str = "exit";
pub const EXIT_USAGE: &str =
    "exit: Exits the program.\n\tExample: exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdResult {
    pub message: CmdMessage,
    pub listed: Option<DisplayView>,
}

impl CmdResult {
    pub fn new(message: CmdMessage) -> Self {
        Self {
            message,
            listed: None,
        }
    }

    pub fn with_listed(mut self, view: DisplayView) -> Self {
        self.listed = Some(view);
        self
    }

    /// The feedback text shown to the user.
    pub fn feedback(&self) -> &str {
        &self.message.content
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self.message.level,
            MessageLevel::Warning | MessageLevel::Error
        )
    }
}

/// One user intent, ready to run against a collection and a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(PersonRecord),
    Delete { target: DisplayIndex },
    Change { target: DisplayIndex, new_phone: String },
    View { target: DisplayIndex },
    ViewAll { target: DisplayIndex },
    Find { keywords: Vec<String> },
    List,
    Clear,
    Help,
    Exit,
    /// Input that could not be parsed; executes to its message.
    Incorrect(String),
}

impl Command {
    pub fn execute(&self, book: &mut UniquePersonList, view: &DisplayView) -> CmdResult {
        debug!(command = self.word(), view_len = view.len(), "executing command");
        match self.dispatch(book, view) {
            Ok(result) => result,
            Err(err) => {
                warn!(command = self.word(), error = ?err, "command rejected");
                CmdResult::new(CmdMessage::warning(err.to_string()))
            }
        }
    }

    fn dispatch(&self, book: &mut UniquePersonList, view: &DisplayView) -> Result<CmdResult> {
        match self {
            Command::Add(record) => add::run(book, record),
            Command::Delete { target } => delete::run(book, view, *target),
            Command::Change { target, new_phone } => change::run(book, view, *target, new_phone),
            Command::View { target } => view::run(book, view, *target, false),
            Command::ViewAll { target } => view::run(book, view, *target, true),
            Command::Find { keywords } => Ok(find::run(book, keywords)),
            Command::List => Ok(list::run(book)),
            Command::Clear => Ok(clear::run(book)),
            Command::Help => Ok(help::run()),
            Command::Exit => Ok(CmdResult::new(CmdMessage::info(
                messages::EXIT_ACKNOWLEDGEMENT,
            ))),
            Command::Incorrect(message) => Ok(CmdResult::new(CmdMessage::error(message.clone()))),
        }
    }

    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Delete { .. } => delete::COMMAND_WORD,
            Command::Change { .. } => change::COMMAND_WORD,
            Command::View { .. } => view::COMMAND_WORD,
            Command::ViewAll { .. } => view::VIEW_ALL_COMMAND_WORD,
            Command::Find { .. } => find::COMMAND_WORD,
            Command::List => list::COMMAND_WORD,
            Command::Clear => clear::COMMAND_WORD,
            Command::Help => help::COMMAND_WORD,
            Command::Exit => EXIT_COMMAND_WORD,
            Command::Incorrect(_) => "incorrect",
        }
    }

    /// Whether a successful run of this command changes the collection.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Add(_) | Command::Delete { .. } | Command::Change { .. } | Command::Clear
        )
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }
}
