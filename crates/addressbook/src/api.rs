//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients.
//!
//! ## Role and Responsibilities
//!
//! - **Parses** input lines into [`Command`]s
//! - **Runs** them through the [`Session`], which supplies the collection and
//!   the current view
//! - **Persists** the collection after a mutating command succeeds
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O to the terminal**: results come back as [`CmdResult`] values
//!
//! ## Errors
//!
//! Command failures (invalid index, duplicate person, ...) are ordinary
//! results and never surface as `Err`. Only storage failures do.
//!
//! ## Generic Over DataStore
//!
//! - Production: `AddressBookApi<FileStore>`
//! - Testing: `AddressBookApi<InMemoryStore>`

use crate::book::UniquePersonList;
use crate::commands::Command;
use crate::error::Result;
use crate::index::DisplayView;
use crate::parser;
use crate::session::Session;
use crate::store::DataStore;
use tracing::debug;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct AddressBookApi<S: DataStore> {
    store: S,
    session: Session,
}

impl<S: DataStore> AddressBookApi<S> {
    /// Loads the stored collection and starts with an empty view.
    pub fn open(store: S) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            session: Session::new(book),
        })
    }

    /// Loads the stored collection with a view of everyone already in place.
    pub fn open_with_full_view(store: S) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            session: Session::with_full_view(book),
        })
    }

    /// Parses and runs one line of input.
    pub fn execute(&mut self, input: &str) -> Result<CmdResult> {
        let command = parser::parse(input);
        self.run(&command)
    }

    pub fn run(&mut self, command: &Command) -> Result<CmdResult> {
        let result = self.session.execute(command);
        if command.mutates() && !result.is_failure() {
            debug!(command = command.word(), "saving after mutation");
            self.store.save(self.session.book())?;
        }
        Ok(result)
    }

    pub fn book(&self) -> &UniquePersonList {
        self.session.book()
    }

    pub fn view(&self) -> &DisplayView {
        self.session.view()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
