//! # Rendering
//!
//! Turns `CmdResult` values into terminal text. Nothing here prints; callers
//! decide where the strings go.
//!
//! A result renders as its feedback message, followed by the listing when the
//! command produced one. Listings show the public text of each person next to
//! its 1-based index, with indexes right-aligned so names line up.

use super::styles::{CONFIG_KEY, ERROR, INDEX, MUTED, SUCCESS, WARNING};
use addressbook::api::{CmdMessage, CmdResult, MessageLevel};
use addressbook::index::DisplayView;
use unicode_width::UnicodeWidthStr;

pub fn render_result(result: &CmdResult) -> String {
    let mut out = render_message(&result.message);
    if let Some(view) = &result.listed {
        let listing = render_listing(view);
        if !listing.is_empty() {
            out.push('\n');
            out.push_str(&listing);
        }
    }
    out
}

pub fn render_message(message: &CmdMessage) -> String {
    let style = match message.level {
        MessageLevel::Info => return message.content.clone(),
        MessageLevel::Success => &*SUCCESS,
        MessageLevel::Warning => &*WARNING,
        MessageLevel::Error => &*ERROR,
    };
    style.apply_to(&message.content).to_string()
}

pub fn render_listing(view: &DisplayView) -> String {
    let labels: Vec<String> = view
        .indexed()
        .map(|entry| format!("{}.", entry.index))
        .collect();
    let label_width = labels.iter().map(|l| l.width()).max().unwrap_or(0);

    view.indexed()
        .zip(&labels)
        .map(|(entry, label)| {
            let padding = " ".repeat(label_width - label.width());
            format!(
                "{}{} {}",
                padding,
                INDEX.apply_to(label),
                entry.person.as_text_hide_private()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_config(entries: &[(&str, String)], data_file: &str) -> String {
    let mut lines: Vec<String> = entries
        .iter()
        .map(|(key, value)| format!("{} = {}", CONFIG_KEY.apply_to(key), value))
        .collect();
    lines.push(MUTED.apply_to(format!("# using {}", data_file)).to_string());
    lines.join("\n")
}
