use crate::book::UniquePersonList;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayView};
use crate::messages;
use tracing::info;

use super::helpers::resolve_target;

pub const COMMAND_WORD: &str = "change";
pub const USAGE: &str = "change: Changes the phone number of the person identified by the index number used in the last person listing.\n\
\tParameters: INDEX NEW_PHONE\n\
\tExample: change 1 91234567";

/// Replaces the phone number of the person at `target`.
///
/// The new person is validated before anything is removed, and the swap goes
/// through [`UniquePersonList::replace`], so a duplicate collision leaves the
/// original person where it was.
pub fn run(
    book: &mut UniquePersonList,
    view: &DisplayView,
    target: DisplayIndex,
    new_phone: &str,
) -> Result<CmdResult> {
    let person = resolve_target(book, view, target)?;
    let changed = person.with_phone(new_phone)?;
    book.replace(&person, changed.clone())?;
    info!(
        index = %target,
        name = changed.name().value(),
        "person phone changed"
    );
    Ok(CmdResult::new(CmdMessage::success(messages::fill(
        messages::CHANGE_SUCCESS,
        &changed,
    ))))
}
