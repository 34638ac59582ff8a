//! # Storage Layer
//!
//! The command layer never touches storage. It works on an in-memory
//! [`UniquePersonList`]; this module only loads that list at session start and
//! writes it back after a mutating command succeeds.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single pretty-printed JSON array of persons.
//! - [`memory::InMemoryStore`]: for testing without filesystem I/O.
//!
//! ## File Format
//!
//! ```text
//! [
//!   {
//!     "name": "John Doe",
//!     "phone": "98765432",
//!     "phone_private": false,
//!     "email": "johnd@gmail.com",
//!     "email_private": false,
//!     "address": "311, Clementi Ave 2",
//!     "address_private": true,
//!     "tags": ["friends"]
//!   }
//! ]
//! ```
//!
//! Loading re-runs every field check and rejects duplicate persons, so a hand
//! edited file cannot break the collection's invariants.

use crate::book::UniquePersonList;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for address book storage.
pub trait DataStore {
    /// Load the stored collection. A store with nothing saved yet loads empty.
    fn load(&self) -> Result<UniquePersonList>;

    /// Replace the stored collection with `book`.
    fn save(&mut self, book: &UniquePersonList) -> Result<()>;
}
