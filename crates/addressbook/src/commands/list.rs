use crate::book::UniquePersonList;
use crate::commands::{CmdMessage, CmdResult};
use crate::index::DisplayView;
use crate::messages;

pub const COMMAND_WORD: &str = "list";
pub const USAGE: &str = "list: Displays all persons in the address book as a list with index numbers.\n\
\tExample: list";

pub fn run(book: &UniquePersonList) -> CmdResult {
    CmdResult::new(CmdMessage::info(messages::fill(
        messages::PERSONS_LISTED_OVERVIEW,
        book.len(),
    )))
    .with_listed(DisplayView::new(book.all()))
}
