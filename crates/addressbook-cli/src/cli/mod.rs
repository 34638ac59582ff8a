//! # CLI Behavior
//!
//! This is **one possible UI client** for the address book, not the
//! application itself. It is the only place that knows about terminal I/O and
//! exit codes.
//!
//! ## Modes
//!
//! ### Shell (`addressbook` or `addressbook shell`)
//!
//! Reads command lines from stdin until `exit` or end of input. Starts with an
//! empty view: index commands need a `list` or `find` first.
//!
//! ### One-shot (`addressbook run <WORDS>...`)
//!
//! Runs a single command line. There is no earlier listing in a fresh process,
//! so the view starts as the whole address book in stored order; `delete 2`
//! addresses the second stored person.
//!
//! ### Config (`addressbook config`)
//!
//! Prints the effective configuration and the resolved data file.
//!
//! ## Module Structure
//!
//! - `commands`: Mode handlers that call the API and print results
//! - `render`: Output formatting for results and listings
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
