//! Styles for the address book CLI.
//!
//! Output code refers to styles by what the text means (an index, a success
//! message), never by color, so the palette can change in one place.
//! `console` drops the escapes on its own when stdout is not a terminal.

use console::Style;
use once_cell::sync::Lazy;

pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(246).italic());
pub static CONFIG_KEY: Lazy<Style> = Lazy::new(|| Style::new().cyan());
