use crate::book::UniquePersonList;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayView};
use crate::messages;

use super::helpers::resolve_target;

pub const COMMAND_WORD: &str = "view";
pub const USAGE: &str = "view: Views the non-private details of the person identified by the index number in the last shown person listing.\n\
\tParameters: INDEX\n\
\tExample: view 1";

pub const VIEW_ALL_COMMAND_WORD: &str = "viewall";
pub const VIEW_ALL_USAGE: &str = "viewall: Views all details of the person identified by the index number in the last shown person listing.\n\
\tParameters: INDEX\n\
\tExample: viewall 1";

pub fn run(
    book: &UniquePersonList,
    view: &DisplayView,
    target: DisplayIndex,
    show_private: bool,
) -> Result<CmdResult> {
    let person = resolve_target(book, view, target)?;
    let text = if show_private {
        person.as_text_show_all()
    } else {
        person.as_text_hide_private()
    };
    Ok(CmdResult::new(CmdMessage::info(messages::fill(
        messages::VIEW_SUCCESS,
        text,
    ))))
}
