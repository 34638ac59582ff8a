//! # Address Book Architecture
//!
//! `addressbook` is a **UI-agnostic contact manager library** driven by discrete
//! text commands. The CLI in `crates/addressbook-cli` is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (addressbook-cli)                                │
//! │  - Reads input lines, renders results, owns the terminal    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses input, runs it in the session, saves on success   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, session.rs)                  │
//! │  - Pure logic over the collection and the displayed view    │
//! │  - Every outcome is a CmdResult; nothing panics             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Displayed Indexes
//!
//! Users refer to persons by their 1-based position in the last list or search
//! result, not by any stable id. See [`index`] for how those positions map back
//! onto the collection.
//!
//! ## Example
//!
//! ```
//! use addressbook::api::AddressBookApi;
//! use addressbook::store::memory::InMemoryStore;
//!
//! let mut api = AddressBookApi::open(InMemoryStore::new()).unwrap();
//! api.execute("add Jane Doe p/91234567 e/jane@doe.com a/33G Ohm Road").unwrap();
//! let listed = api.execute("list").unwrap();
//! assert_eq!(listed.feedback(), "1 persons listed!");
//! ```

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod messages;
pub mod model;
pub mod parser;
pub mod session;
pub mod store;

#[cfg(test)]
mod test_utils;
