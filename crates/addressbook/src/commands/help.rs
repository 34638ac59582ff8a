use crate::commands::{
    add, change, clear, delete, find, list, view, CmdMessage, CmdResult, EXIT_USAGE,
};

pub const COMMAND_WORD: &str = "help";
pub const USAGE: &str = "help: Shows program usage instructions.\n\
\tExample: help";

pub fn usage_text() -> String {
    [
        add::USAGE,
        delete::USAGE,
        change::USAGE,
        clear::USAGE,
        find::USAGE,
        list::USAGE,
        view::USAGE,
        view::VIEW_ALL_USAGE,
        USAGE,
        EXIT_USAGE,
    ]
    .join("\n")
}

pub fn run() -> CmdResult {
    CmdResult::new(CmdMessage::info(usage_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentions_every_command() {
        let text = usage_text();
        for word in [
            "add:", "delete:", "change:", "clear:", "find:", "list:", "view:", "viewall:",
            "help:", "exit:",
        ] {
            assert!(text.contains(word), "missing {word}");
        }
    }
}
