//! # Address Book CLI
//!
//! The binary is thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/addressbook/`: core library, UI-agnostic
//! - `crates/addressbook-cli/`: this terminal client
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/addressbook-cli/src/cli/)                │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Shell loop, one-shot runs, config display (commands.rs)  │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/addressbook/src/api.rs)                  │
//! │  - Parses command lines, runs them, saves after mutations   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns argument
//! parsing, logging setup, rendering, and exit codes.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to each command plus integration tests over
//!   `AddressBookApi<InMemoryStore>`.
//! - **CLI**: rendering is unit tested with canned `CmdResult` values; the
//!   binary is exercised end to end with `assert_cmd` against a temporary data
//!   directory.

mod cli;
mod logging;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
