use crate::book::UniquePersonList;
use crate::commands::{CmdMessage, CmdResult};
use crate::messages;
use tracing::info;

pub const COMMAND_WORD: &str = "clear";
pub const USAGE: &str = "clear: Clears address book permanently.\n\
\tExample: clear";

pub fn run(book: &mut UniquePersonList) -> CmdResult {
    let removed = book.len();
    book.clear();
    info!(removed, "address book cleared");
    CmdResult::new(CmdMessage::success(messages::CLEAR_SUCCESS))
}
